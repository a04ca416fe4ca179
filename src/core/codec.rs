use crate::core::alphabet;
use crate::core::splitter::split;
use crate::core::validator::{is_valid_for_decode, is_valid_for_encode};
use crate::domain::model::Direction;
use crate::domain::ports::Translator;
use crate::utils::error::{Result, TelegramError};

const LETTER_SEPARATOR: &str = " ";
const ENCODED_WORD_SEPARATOR: &str = " / ";
const MORSE_WORD_DELIMITER: &str = "/";
const TEXT_WORD_SEPARATOR: &str = " ";

/// Translates text to Morse. Input is upper-cased (ASCII only) before it is
/// checked, so lower-case letters are accepted.
pub fn try_encode_to_morse(text: &str) -> Result<String> {
    let text = text.to_ascii_uppercase();
    if !is_valid_for_encode(&text) {
        return Err(TelegramError::InvalidInput {
            direction: Direction::ToMorse,
        });
    }

    let words: Vec<String> = split(&text, " ")
        .into_iter()
        .map(|word| {
            word.chars()
                .filter_map(alphabet::code_for)
                .collect::<Vec<_>>()
                .join(LETTER_SEPARATOR)
        })
        .collect();

    Ok(words.join(ENCODED_WORD_SEPARATOR))
}

/// Translates Morse to text. Tokens that match no alphabet entry, including
/// the empty tokens left by repeated spaces, are dropped without error.
pub fn try_decode_from_morse(text: &str) -> Result<String> {
    if !is_valid_for_decode(text) {
        return Err(TelegramError::InvalidInput {
            direction: Direction::FromMorse,
        });
    }

    let words: Vec<String> = split(text, MORSE_WORD_DELIMITER)
        .into_iter()
        .map(|word| {
            split(word, " ")
                .into_iter()
                .filter_map(alphabet::symbol_for)
                .collect::<String>()
        })
        .collect();

    Ok(words.join(TEXT_WORD_SEPARATOR))
}

pub fn try_translate(text: &str, direction: Direction) -> Result<String> {
    match direction {
        Direction::ToMorse => try_encode_to_morse(text),
        Direction::FromMorse => try_decode_from_morse(text),
    }
}

/// Boundary form of [`try_encode_to_morse`]: the error renders as "Invalid input.".
pub fn encode_to_morse(text: &str) -> String {
    render(try_encode_to_morse(text))
}

pub fn decode_from_morse(text: &str) -> String {
    render(try_decode_from_morse(text))
}

pub fn translate(text: &str, direction: Direction) -> String {
    render(try_translate(text, direction))
}

pub fn render(result: Result<String>) -> String {
    result.unwrap_or_else(|e| e.to_string())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MorseCodec;

impl Translator for MorseCodec {
    fn encode(&self, text: &str) -> Result<String> {
        try_encode_to_morse(text)
    }

    fn decode(&self, text: &str) -> Result<String> {
        try_decode_from_morse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::INVALID_INPUT;

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(encode_to_morse("SOS"), "... --- ...");
        assert_eq!(encode_to_morse("HI THERE"), ".... .. / - .... . .-. .");
        assert_eq!(encode_to_morse("A1"), ".- .----");
    }

    #[test]
    fn test_encode_is_case_insensitive() {
        assert_eq!(encode_to_morse("sos"), encode_to_morse("SOS"));
        assert_eq!(encode_to_morse("Hi There"), ".... .. / - .... . .-. .");
    }

    #[test]
    fn test_encode_keeps_empty_words() {
        assert_eq!(encode_to_morse("A  B"), ".- /  / -...");
        assert_eq!(encode_to_morse(" E"), " / .");
        assert_eq!(encode_to_morse("E "), ". / ");
    }

    #[test]
    fn test_encode_rejections() {
        assert_eq!(encode_to_morse(""), INVALID_INPUT);
        assert_eq!(encode_to_morse("   "), INVALID_INPUT);
        assert_eq!(encode_to_morse("HELLO!"), INVALID_INPUT);
        assert_eq!(encode_to_morse("straße"), INVALID_INPUT);
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode_from_morse("... --- ..."), "SOS");
        assert_eq!(decode_from_morse(".... .. / - .... . .-. ."), "HI THERE");
        assert_eq!(decode_from_morse("..--- -----"), "20");
    }

    #[test]
    fn test_decode_drops_unknown_tokens() {
        assert_eq!(decode_from_morse(".... ...... .."), "HI");
        assert_eq!(decode_from_morse("....  .."), "HI");
    }

    #[test]
    fn test_decode_spaces_and_slashes_mix() {
        assert_eq!(decode_from_morse("/ /"), "  ");
        assert_eq!(decode_from_morse("...//..."), "S  S");
    }

    #[test]
    fn test_decode_rejections() {
        assert_eq!(decode_from_morse(""), INVALID_INPUT);
        assert_eq!(decode_from_morse("   "), INVALID_INPUT);
        assert_eq!(decode_from_morse("///"), INVALID_INPUT);
        assert_eq!(decode_from_morse("... --- ... ?"), INVALID_INPUT);
    }

    #[test]
    fn test_typed_error_carries_direction() {
        match try_decode_from_morse("abc") {
            Err(TelegramError::InvalidInput { direction }) => {
                assert_eq!(direction, Direction::FromMorse)
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(try_encode_to_morse("?").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_translator_dispatch() {
        let codec = MorseCodec;
        assert_eq!(codec.translate("SOS", Direction::ToMorse).unwrap(), "... --- ...");
        assert_eq!(codec.translate("... --- ...", Direction::FromMorse).unwrap(), "SOS");
        assert_eq!(translate("", Direction::FromMorse), INVALID_INPUT);
    }
}
