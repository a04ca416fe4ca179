use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::domain::ports::ShellSettings;

/// Shell settings after command-line flags are applied over the config file.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub clear_screen: bool,
    pub banner: String,
}

impl ShellOptions {
    pub fn resolve(cli: &CliConfig, file: &TomlConfig) -> Self {
        Self {
            clear_screen: file.clear_screen() && !cli.no_clear,
            banner: file.banner().to_string(),
        }
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::resolve(&CliConfig::default(), &TomlConfig::default())
    }
}

impl ShellSettings for ShellOptions {
    fn clear_screen(&self) -> bool {
        self.clear_screen
    }

    fn banner(&self) -> &str {
        &self.banner
    }
}
