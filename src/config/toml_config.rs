use crate::adapters::output::OutputMode;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file, e.g.
///
/// ```toml
/// [output]
/// mode = "log"
///
/// [logging]
/// file = "program.log"
/// verbose = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    pub output: Option<OutputSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub file: Option<String>,
    pub verbose: Option<bool>,
}

impl DemoConfig {
    /// Reads and parses a TOML settings file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DemoError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn output_mode(&self) -> Result<Option<OutputMode>> {
        self.output
            .as_ref()
            .and_then(|o| o.mode.as_deref())
            .map(str::parse::<OutputMode>)
            .transpose()
    }

    pub fn log_file(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.file.as_deref())
    }

    pub fn verbose(&self) -> Option<bool> {
        self.logging.as_ref().and_then(|l| l.verbose)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        self.output_mode()?;
        if let Some(file) = self.log_file() {
            validation::validate_path("logging.file", file)?;
        }
        Ok(())
    }
}
