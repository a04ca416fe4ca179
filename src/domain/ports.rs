use crate::domain::model::Direction;
use crate::utils::error::Result;

pub trait Translator: Send + Sync {
    fn encode(&self, text: &str) -> Result<String>;
    fn decode(&self, text: &str) -> Result<String>;

    fn translate(&self, text: &str, direction: Direction) -> Result<String> {
        match direction {
            Direction::ToMorse => self.encode(text),
            Direction::FromMorse => self.decode(text),
        }
    }
}

pub trait ShellSettings {
    fn clear_screen(&self) -> bool;
    fn banner(&self) -> &str;
}
