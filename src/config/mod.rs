#[cfg(feature = "cli")]
pub mod cli;
pub mod seed_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use seed_config::SeedConfig;
