pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::display::TextBookDisplay;
pub use adapters::output::{AnyOutput, ConsoleOutput, LogOutput, OutputMode};
pub use config::DemoSettings;
pub use crate::core::{
    command::CommandLoop, factory::RegionalFactory, library::Library, manager::LibraryManager,
};
pub use utils::error::{DemoError, Result};
