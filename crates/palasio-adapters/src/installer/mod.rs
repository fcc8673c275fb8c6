//! Installer adapters.

mod command;
mod stub;

pub use command::{CommandInstaller, InstallFailure, StdoutPolicy};
pub use stub::{FixedInstaller, NoopInstaller};
