//! User interaction
//!
//! Everything that talks to the user goes through [`Interaction`]. The
//! console implementation reads and writes plain text streams, the graphical
//! one shows native dialogs. The implementation is chosen once at startup and
//! handed to whoever needs it.

use crate::error::Result;

use dialog::{Choice, DialogBox};
use rfd::FileDialog;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::path::{Path, PathBuf};

pub trait Interaction {
    /// Display a message to the user
    fn tell(&mut self, message: &str) -> Result<()>;

    /// Ask a question and return the answer
    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Ask a yes/no question
    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask for a directory
    fn ask_path(&mut self, prompt: &str, default: &Path) -> Result<PathBuf> {
        let default = default.to_string_lossy();
        Ok(PathBuf::from(self.ask(prompt, Some(&default))?))
    }
}

/// Text prompts on a pair of streams
pub struct ConsoleInteraction<R, W> {
    input: R,
    output: W,
}

impl ConsoleInteraction<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInteraction<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns None on end of input
    fn read_answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Interaction for ConsoleInteraction<R, W> {
    fn tell(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let prompt = match default {
            Some(default) => format!("{} [{}]: ", prompt, default),
            None => format!("{}: ", prompt),
        };

        loop {
            match (self.read_answer(&prompt)?, default) {
                (Some(answer), _) if !answer.is_empty() => return Ok(answer),
                (_, Some(default)) => return Ok(default.to_string()),
                (None, None) => {
                    return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer given").into());
                }
                (Some(_), None) => continue,
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let prompt = format!("{} [{}]: ", prompt, if default { "Y/n" } else { "y/N" });

        loop {
            let Some(answer) = self.read_answer(&prompt)? else {
                return Ok(default);
            };
            match answer.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Error: invalid input")?,
            }
        }
    }
}

/// Native dialog boxes and a folder picker
pub struct GraphicalInteraction {
    title: String,
}

impl GraphicalInteraction {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Interaction for GraphicalInteraction {
    fn tell(&mut self, message: &str) -> Result<()> {
        dialog::Message::new(message).title(&self.title).show()?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = dialog::Input::new(prompt);
        input.title(&self.title);
        if let Some(default) = default {
            input.default(default);
        }

        let answer = input.show()?;
        Ok(answer.or(default.map(str::to_string)).unwrap_or_default())
    }

    /// The dialog backends have no default button. Callers that need a safe
    /// default inside the GUI show their own confirmation window.
    fn ask_yes_no(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        let choice = dialog::Question::new(prompt).title(&self.title).show()?;
        Ok(choice == Choice::Yes)
    }

    fn ask_path(&mut self, prompt: &str, default: &Path) -> Result<PathBuf> {
        let mut picker = FileDialog::new().set_title(prompt);
        if default.exists() {
            picker = picker.set_directory(default);
        }
        Ok(picker.pick_folder().unwrap_or_else(|| default.to_path_buf()))
    }
}
