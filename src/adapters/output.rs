use crate::domain::ports::Output;
use crate::utils::error::{DemoError, Result};
use crate::utils::logger::LoggerHandle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Stdout, Write};
use std::str::FromStr;
use tracing::dispatcher::{self, Dispatch};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Console,
    Log,
}

impl OutputMode {
    pub const NAMES: [&'static str; 2] = ["console", "log"];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Console => "console",
            OutputMode::Log => "log",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "console" => Ok(OutputMode::Console),
            "log" => Ok(OutputMode::Log),
            other => Err(DemoError::InvalidConfigValueError {
                field: "output.mode".to_string(),
                value: other.to_string(),
                reason: format!("Expected one of: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// Writes each message as its own line.
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsoleOutput<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn emit(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub const LOG_TARGET: &str = "pattern_demos";

/// Routes messages into the subscriber of the [`LoggerHandle`] it came from,
/// whatever the current thread's default is.
#[derive(Debug, Clone)]
pub struct LogOutput {
    dispatch: Dispatch,
}

impl LogOutput {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }
}

impl Output for LogOutput {
    fn emit(&mut self, message: &str) -> Result<()> {
        dispatcher::with_default(&self.dispatch, || {
            tracing::info!(target: LOG_TARGET, "{}", message);
        });
        Ok(())
    }
}

#[derive(Debug)]
pub enum AnyOutput {
    Console(ConsoleOutput<Stdout>),
    Log(LogOutput),
}

impl AnyOutput {
    pub fn for_mode(mode: OutputMode, logger: &LoggerHandle) -> Self {
        match mode {
            OutputMode::Console => AnyOutput::Console(ConsoleOutput::stdout()),
            OutputMode::Log => AnyOutput::Log(logger.output()),
        }
    }
}

impl Output for AnyOutput {
    fn emit(&mut self, message: &str) -> Result<()> {
        match self {
            AnyOutput::Console(out) => out.emit(message),
            AnyOutput::Log(out) => out.emit(message),
        }
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    fn emit(&mut self, message: &str) -> Result<()> {
        (**self).emit(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logger::{init_logger, LogSettings};

    #[test]
    fn test_console_output_writes_lines() {
        let mut out = ConsoleOutput::new(Vec::new());
        out.emit("first").unwrap();
        out.emit("second").unwrap();

        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_output_mode_from_str() {
        assert_eq!(" LOG ".parse::<OutputMode>().unwrap(), OutputMode::Log);
        assert_eq!("console".parse::<OutputMode>().unwrap(), OutputMode::Console);
        assert!("syslog".parse::<OutputMode>().is_err());
    }

    fn pinned(path: &std::path::Path) -> LogSettings {
        LogSettings::new(path, false).with_filter("pattern_demos=info")
    }

    #[test]
    fn test_log_output_reaches_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.log");

        let handle = init_logger(&pinned(&path)).unwrap();
        handle.output().emit("No books in the library.").unwrap();
        drop(handle);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("INFO"));
        assert!(contents.trim_end().ends_with("No books in the library."));
    }

    #[test]
    fn test_log_output_follows_its_handle_off_thread() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.log");

        let handle = init_logger(&pinned(&path)).unwrap();
        let mut out = handle.output();
        std::thread::spawn(move || {
            out.emit("Book 'Dune' removed successfully.").unwrap();
        })
        .join()
        .unwrap();
        drop(handle);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Book 'Dune' removed successfully."));
    }

    #[test]
    fn test_log_output_outlives_thread_default() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.log");
        let second = dir.path().join("second.log");

        let first_handle = init_logger(&pinned(&first)).unwrap();
        let mut out = first_handle.output();
        let second_handle = init_logger(&pinned(&second)).unwrap();
        out.emit("Invalid command. Please try again.").unwrap();
        drop(second_handle);
        drop(first_handle);

        assert!(std::fs::read_to_string(&first)
            .unwrap()
            .contains("Invalid command. Please try again."));
        assert!(std::fs::read_to_string(&second).unwrap().is_empty());
    }

    #[test]
    fn test_log_output_uses_crate_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program.log");

        let settings = LogSettings::new(&path, false)
            .with_filter("pattern_demos=info,pattern_demos::adapters=off");
        let handle = init_logger(&settings).unwrap();
        handle.output().emit("Book 'Emma' not found in the library.").unwrap();
        tracing::info!("adapter chatter");
        drop(handle);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Book 'Emma' not found in the library."));
        assert!(!contents.contains("adapter chatter"));
    }
}
