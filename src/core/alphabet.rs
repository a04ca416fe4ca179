use crate::domain::model::AlphabetEntry;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Letters A-Z followed by digits 0-9. Order matters: encode indexes into it.
const ENTRIES: [AlphabetEntry; 36] = [
    AlphabetEntry { symbol: 'A', code: ".-" },
    AlphabetEntry { symbol: 'B', code: "-..." },
    AlphabetEntry { symbol: 'C', code: "-.-." },
    AlphabetEntry { symbol: 'D', code: "-.." },
    AlphabetEntry { symbol: 'E', code: "." },
    AlphabetEntry { symbol: 'F', code: "..-." },
    AlphabetEntry { symbol: 'G', code: "--." },
    AlphabetEntry { symbol: 'H', code: "...." },
    AlphabetEntry { symbol: 'I', code: ".." },
    AlphabetEntry { symbol: 'J', code: ".---" },
    AlphabetEntry { symbol: 'K', code: "-.-" },
    AlphabetEntry { symbol: 'L', code: ".-.." },
    AlphabetEntry { symbol: 'M', code: "--" },
    AlphabetEntry { symbol: 'N', code: "-." },
    AlphabetEntry { symbol: 'O', code: "---" },
    AlphabetEntry { symbol: 'P', code: ".--." },
    AlphabetEntry { symbol: 'Q', code: "--.-" },
    AlphabetEntry { symbol: 'R', code: ".-." },
    AlphabetEntry { symbol: 'S', code: "..." },
    AlphabetEntry { symbol: 'T', code: "-" },
    AlphabetEntry { symbol: 'U', code: "..-" },
    AlphabetEntry { symbol: 'V', code: "...-" },
    AlphabetEntry { symbol: 'W', code: ".--" },
    AlphabetEntry { symbol: 'X', code: "-..-" },
    AlphabetEntry { symbol: 'Y', code: "-.--" },
    AlphabetEntry { symbol: 'Z', code: "--.." },
    AlphabetEntry { symbol: '0', code: "-----" },
    AlphabetEntry { symbol: '1', code: ".----" },
    AlphabetEntry { symbol: '2', code: "..---" },
    AlphabetEntry { symbol: '3', code: "...--" },
    AlphabetEntry { symbol: '4', code: "....-" },
    AlphabetEntry { symbol: '5', code: "....." },
    AlphabetEntry { symbol: '6', code: "-...." },
    AlphabetEntry { symbol: '7', code: "--..." },
    AlphabetEntry { symbol: '8', code: "---.." },
    AlphabetEntry { symbol: '9', code: "----." },
];

const DIGIT_OFFSET: usize = 26;

static REVERSE_INDEX: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|entry| (entry.code, entry.symbol))
        .collect()
});

pub fn entries() -> &'static [AlphabetEntry] {
    &ENTRIES
}

/// Code for an upper-case letter or digit.
pub fn code_for(symbol: char) -> Option<&'static str> {
    let index = match symbol {
        'A'..='Z' => symbol as usize - 'A' as usize,
        '0'..='9' => symbol as usize - '0' as usize + DIGIT_OFFSET,
        _ => return None,
    };
    Some(ENTRIES[index].code)
}

pub fn symbol_for(code: &str) -> Option<char> {
    REVERSE_INDEX.get(code).copied()
}
