pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::ShellOptions, CliConfig};

pub use crate::app::shell::Shell;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::codec::{
    decode_from_morse, encode_to_morse, translate, try_decode_from_morse, try_encode_to_morse,
    try_translate, MorseCodec,
};
pub use crate::core::engine::TranslationEngine;
pub use crate::domain::model::Direction;
pub use crate::utils::error::{Result, TelegramError, INVALID_INPUT};
