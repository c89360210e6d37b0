pub mod cleanup;
pub mod composer;
pub mod copy;
pub mod guard;
pub mod installer;
pub mod messages;
pub mod patch;

pub use crate::domain::model::{AppDescriptor, InstallOutcome, SeedLayout, UpdateStatus};
pub use crate::domain::ports::{ConfigProvider, Console, DependencyUpdater};
pub use crate::utils::error::Result;
