use crate::core::manager::LibraryManager;
use crate::domain::ports::{BookDisplay, BookStore, Output};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const COMMAND_PROMPT: &str = "Enter command (add, remove, show, exit): ";
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Show,
    Exit,
    Invalid,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "add" => Command::Add,
            "remove" => Command::Remove,
            "show" => Command::Show,
            "exit" => Command::Exit,
            _ => Command::Invalid,
        }
    }
}

/// Interactive add/remove/show/exit loop.
///
/// Prompts go to `prompt`; outcome messages go to the [`Output`] passed to
/// [`CommandLoop::run`]. End of input ends the loop like `exit` does.
pub struct CommandLoop<R: BufRead, W: Write> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> CommandLoop<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.prompt)
    }

    /// `None` on end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.prompt, "{}", question)?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn run<S, D, O>(&mut self, manager: &mut LibraryManager<S, D>, out: &mut O) -> Result<()>
    where
        S: BookStore,
        D: BookDisplay,
        O: Output + ?Sized,
    {
        loop {
            let Some(line) = self.ask(COMMAND_PROMPT)? else {
                tracing::debug!("Input closed, leaving command loop");
                return Ok(());
            };

            match Command::parse(&line) {
                Command::Add => {
                    let Some(title) = self.ask("Enter book title: ")? else {
                        return Ok(());
                    };
                    let Some(author) = self.ask("Enter book author: ")? else {
                        return Ok(());
                    };
                    let Some(year) = self.ask("Enter book year: ")? else {
                        return Ok(());
                    };
                    manager.add_book(&title, &author, &year);
                    out.emit(&format!(
                        "Book '{}' by {} ({}) added successfully.",
                        title, author, year
                    ))?;
                }
                Command::Remove => {
                    let Some(title) = self.ask("Enter book title to remove: ")? else {
                        return Ok(());
                    };
                    if manager.remove_book(&title) {
                        out.emit(&format!("Book '{}' removed successfully.", title))?;
                    } else {
                        out.emit(&format!("Book '{}' not found in the library.", title))?;
                    }
                }
                Command::Show => manager.show_books()?,
                Command::Exit => return Ok(()),
                Command::Invalid => out.emit(INVALID_COMMAND_MESSAGE)?,
            }
        }
    }
}
