use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    ToMorse,
    FromMorse,
}

impl Direction {
    /// Maps a shell menu choice to a direction.
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Direction::ToMorse),
            "2" => Some(Direction::FromMorse),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToMorse => write!(f, "text -> morse"),
            Direction::FromMorse => write!(f, "morse -> text"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphabetEntry {
    pub symbol: char,
    pub code: &'static str,
}
