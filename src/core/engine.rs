use crate::core::codec::render;
use crate::domain::model::Direction;
use crate::domain::ports::Translator;
use crate::utils::error::Result;

pub struct TranslationEngine<T: Translator> {
    translator: T,
}

impl<T: Translator> TranslationEngine<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    pub fn run(&self, message: &str, direction: Direction) -> Result<String> {
        tracing::debug!("Translating {} chars ({})", message.chars().count(), direction);

        match self.translator.translate(message, direction) {
            Ok(output) => {
                tracing::debug!("Produced {} chars", output.chars().count());
                Ok(output)
            }
            Err(e) => {
                tracing::warn!("Rejected input for {}: {}", direction, e.recovery_suggestion());
                Err(e)
            }
        }
    }

    /// Same as [`run`](Self::run) but with failures rendered as the sentinel text.
    pub fn run_to_string(&self, message: &str, direction: Direction) -> String {
        render(self.run(message, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::MorseCodec;
    use crate::utils::error::{TelegramError, INVALID_INPUT};

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn encode(&self, text: &str) -> Result<String> {
            Ok(format!("enc:{}", text))
        }

        fn decode(&self, _text: &str) -> Result<String> {
            Err(TelegramError::InvalidInput {
                direction: Direction::FromMorse,
            })
        }
    }

    #[test]
    fn test_engine_dispatches_by_direction() {
        let engine = TranslationEngine::new(EchoTranslator);
        assert_eq!(engine.run("x", Direction::ToMorse).unwrap(), "enc:x");
        assert!(engine.run("x", Direction::FromMorse).is_err());
        assert_eq!(engine.run_to_string("x", Direction::FromMorse), INVALID_INPUT);
    }

    #[test]
    fn test_engine_with_morse_codec() {
        let engine = TranslationEngine::new(MorseCodec);
        assert_eq!(engine.run_to_string("sos", Direction::ToMorse), "... --- ...");
        assert_eq!(engine.run_to_string("... --- ...", Direction::FromMorse), "SOS");
    }
}
