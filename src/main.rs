use clap::Parser;
use std::io;
use telegram::utils::{logger, validation::Validate};
use telegram::{CliConfig, MorseCodec, Shell, ShellOptions, TomlConfig, TranslationEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    if let Err(e) = file_config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if file_config.json_logs() {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded configuration from {}", path);
    }

    if let Some((direction, message)) = cli.one_shot() {
        let engine = TranslationEngine::new(MorseCodec);
        println!("{}", engine.run_to_string(message, direction));
        return Ok(());
    }

    let options = ShellOptions::resolve(&cli, &file_config);
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), options, MorseCodec);
    shell.run()?;

    Ok(())
}
