pub mod alphabet;
pub mod codec;
pub mod engine;
pub mod splitter;
pub mod validator;

pub use crate::domain::model::{AlphabetEntry, Direction};
pub use crate::domain::ports::{ShellSettings, Translator};
pub use crate::utils::error::Result;
