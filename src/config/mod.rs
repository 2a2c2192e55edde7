pub mod toml_config;

use crate::adapters::output::OutputMode;
use crate::utils::error::Result;
use crate::utils::logger::LogSettings;
use crate::utils::validation::{self, Validate};
use toml_config::DemoConfig;

pub const DEFAULT_LOG_FILE: &str = "program.log";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, clap::Args)]
pub struct CliConfig {
    /// Where demo messages go
    #[arg(long, value_enum)]
    pub output: Option<OutputMode>,

    /// Append-mode log file [default: program.log]
    #[arg(long)]
    pub log_file: Option<String>,

    /// Optional TOML settings file; flags win over its values
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_settings(&self) -> Result<DemoSettings> {
        let file = match &self.config {
            Some(path) => {
                let config = DemoConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        let settings = DemoSettings::resolve(
            file.as_ref(),
            self.output,
            self.log_file.as_deref(),
            self.verbose,
        )?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Effective settings after merging the settings file with CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub output: OutputMode,
    pub log_file: String,
    pub verbose: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            output: OutputMode::Console,
            log_file: DEFAULT_LOG_FILE.to_string(),
            verbose: false,
        }
    }
}

impl DemoSettings {
    pub fn resolve(
        file: Option<&DemoConfig>,
        output: Option<OutputMode>,
        log_file: Option<&str>,
        verbose: bool,
    ) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(file) = file {
            if let Some(mode) = file.output_mode()? {
                settings.output = mode;
            }
            if let Some(path) = file.log_file() {
                settings.log_file = path.to_string();
            }
            settings.verbose = file.verbose().unwrap_or(false);
        }

        if let Some(mode) = output {
            settings.output = mode;
        }
        if let Some(path) = log_file {
            settings.log_file = path.to_string();
        }
        settings.verbose |= verbose;

        Ok(settings)
    }

    pub fn log_settings(&self) -> LogSettings {
        LogSettings::new(&self.log_file, self.verbose)
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("log_file", &self.log_file)?;
        validation::validate_path("log_file", &self.log_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let settings = DemoSettings::resolve(None, None, None, false).unwrap();
        assert_eq!(settings, DemoSettings::default());
        assert_eq!(settings.log_file, "program.log");
    }

    #[test]
    fn test_flags_override_file() {
        let file = DemoConfig::from_toml_str(
            "[output]\nmode = \"log\"\n[logging]\nfile = \"file.log\"\n",
        )
        .unwrap();

        let from_file = DemoSettings::resolve(Some(&file), None, None, false).unwrap();
        assert_eq!(from_file.output, OutputMode::Log);
        assert_eq!(from_file.log_file, "file.log");

        let overridden =
            DemoSettings::resolve(Some(&file), Some(OutputMode::Console), Some("cli.log"), true)
                .unwrap();
        assert_eq!(overridden.output, OutputMode::Console);
        assert_eq!(overridden.log_file, "cli.log");
        assert!(overridden.verbose);
    }

    #[test]
    fn test_blank_log_file_is_rejected() {
        let settings = DemoSettings::resolve(None, None, Some("  "), false).unwrap();
        assert!(settings.validate().is_err());
    }
}
