use anyhow::Result;
use std::io::{Cursor, Write};
use telegram::{CliConfig, MorseCodec, Shell, ShellOptions, TomlConfig};
use tempfile::NamedTempFile;

fn run_shell(input: &str, options: ShellOptions) -> Result<(usize, String)> {
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), options, MorseCodec);
    let count = shell.run()?;
    Ok((count, String::from_utf8(shell.into_output())?))
}

#[test]
fn test_full_session_transcript() -> Result<()> {
    let options = ShellOptions {
        clear_screen: false,
        banner: "TELEGRAM: Convert between text and Morse code.".to_string(),
    };

    let (count, output) = run_shell("1\nsos\n2\n.... ..\n2\n\nq\n", options)?;

    assert_eq!(count, 3);
    let menu = "TELEGRAM: Convert between text and Morse code.\n\
                [1] to convert TO morse.\n\
                [2] to convert FROM morse.\n\
                [q] to quit program.\n\nInput: ";
    let expected = format!(
        "{menu}Input: Output: ... --- ...\n\n\
         {menu}Input: Output: HI\n\n\
         {menu}Input: Output: Invalid input.\n\n\
         {menu}"
    );
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_clear_sequence_follows_direction_choice() -> Result<()> {
    let (_, output) = run_shell("1\ne\nq\n", ShellOptions::default())?;
    assert!(output.contains("\x1B[2J\x1B[1;1HInput: Output: .\n\n"));
    Ok(())
}

#[test]
fn test_options_from_config_file() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(b"[shell]\nclear_screen = false\nbanner = \"MORSE DESK\"\n")?;

    let file_config = TomlConfig::from_file(temp_file.path())?;
    let options = ShellOptions::resolve(&CliConfig::default(), &file_config);

    let (_, output) = run_shell("q\n", options)?;
    assert!(output.starts_with("MORSE DESK\n"));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let result = TomlConfig::from_file("/definitely/not/here/telegram.toml");
    assert!(matches!(result, Err(telegram::TelegramError::IoError(_))));
}
