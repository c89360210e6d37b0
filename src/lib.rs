pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::SeedConfig;

pub use crate::core::{composer::ComposerUpdater, installer::Installer};
pub use domain::model::{AppDescriptor, InstallOutcome, SeedLayout};
pub use domain::ports::{BufferConsole, StdoutConsole};
pub use utils::error::{Result, SeedError};
