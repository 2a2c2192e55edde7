use crate::adapters::output::LogOutput;
use crate::utils::error::{DemoError, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::dispatcher::{self, DefaultGuard, Dispatch};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub log_file: PathBuf,
    pub verbose: bool,
    /// Fixed filter directive. When set, `RUST_LOG` is ignored.
    pub filter: Option<String>,
}

impl LogSettings {
    pub fn new(log_file: impl Into<PathBuf>, verbose: bool) -> Self {
        Self {
            log_file: log_file.into(),
            verbose,
            filter: None,
        }
    }

    pub fn with_filter(mut self, directive: impl Into<String>) -> Self {
        self.filter = Some(directive.into());
        self
    }
}

/// Owns the demo subscriber and keeps it installed for the current thread.
///
/// Dropping the handle uninstalls the subscriber; the log file closes once
/// every [`LogOutput`] taken from it is gone too.
pub struct LoggerHandle {
    log_file: PathBuf,
    dispatch: Dispatch,
    _guard: DefaultGuard,
}

impl LoggerHandle {
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// A message sink bound to this handle's subscriber, on any thread.
    pub fn output(&self) -> LogOutput {
        LogOutput::new(self.dispatch.clone())
    }
}

fn env_filter(settings: &LogSettings) -> EnvFilter {
    if let Some(directive) = &settings.filter {
        return EnvFilter::new(directive);
    }
    if settings.verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("pattern_demos=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pattern_demos=info"))
    }
}

/// Builds the console + append-file subscriber and installs it as the
/// thread default for the lifetime of the returned handle.
pub fn init_logger(settings: &LogSettings) -> Result<LoggerHandle> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
        .map_err(|e| DemoError::LoggerError {
            message: format!("cannot open {}: {}", settings.log_file.display(), e),
        })?;

    let timer = ChronoLocal::new(TIMESTAMP_FORMAT.to_string());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(timer.clone())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(timer)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        );

    let dispatch = Dispatch::new(subscriber);
    let guard = dispatcher::set_default(&dispatch);

    Ok(LoggerHandle {
        log_file: settings.log_file.clone(),
        dispatch,
        _guard: guard,
    })
}
