use crate::core::engine::TranslationEngine;
use crate::domain::model::Direction;
use crate::domain::ports::{ShellSettings, Translator};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";
const QUIT_CHOICE: &str = "q";

/// Interactive menu loop: pick a direction, enter one line, see the output.
pub struct Shell<R, W, S, T>
where
    R: BufRead,
    W: Write,
    S: ShellSettings,
    T: Translator,
{
    input: R,
    output: W,
    settings: S,
    engine: TranslationEngine<T>,
}

impl<R, W, S, T> Shell<R, W, S, T>
where
    R: BufRead,
    W: Write,
    S: ShellSettings,
    T: Translator,
{
    pub fn new(input: R, output: W, settings: S, translator: T) -> Self {
        Self {
            input,
            output,
            settings,
            engine: TranslationEngine::new(translator),
        }
    }

    /// Runs until `q` or end of input. Returns the number of translations shown.
    pub fn run(&mut self) -> Result<usize> {
        let mut translations = 0;

        loop {
            self.print_menu()?;

            let Some(choice) = self.read_line()? else {
                tracing::debug!("Input closed at menu prompt");
                break;
            };

            if choice == QUIT_CHOICE {
                break;
            }

            let Some(direction) = Direction::from_menu_choice(&choice) else {
                tracing::debug!("Ignoring menu choice {:?}", choice);
                continue;
            };

            if self.settings.clear_screen() {
                write!(self.output, "{}", CLEAR_SEQUENCE)?;
            }
            write!(self.output, "Input: ")?;
            self.output.flush()?;

            let Some(message) = self.read_line()? else {
                tracing::debug!("Input closed at message prompt");
                break;
            };

            let result = self.engine.run_to_string(&message, direction);
            write!(self.output, "Output: {}\n\n", result)?;
            self.output.flush()?;
            translations += 1;
        }

        tracing::info!("Shell finished after {} translation(s)", translations);
        Ok(translations)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "{}", self.settings.banner())?;
        writeln!(self.output, "[1] to convert TO morse.")?;
        writeln!(self.output, "[2] to convert FROM morse.")?;
        writeln!(self.output, "[q] to quit program.")?;
        write!(self.output, "\nInput: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// One line without its terminator; `None` at end of input. Bytes that
    /// are not UTF-8 become U+FFFD, which no validator accepts.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }

        let mut line = bytes.as_slice();
        if let Some(stripped) = line.strip_suffix(b"\n") {
            line = stripped.strip_suffix(b"\r").unwrap_or(stripped);
        }
        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}
