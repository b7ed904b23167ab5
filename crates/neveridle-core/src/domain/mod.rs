//! Domain types for NeverIdle.
//!
//! Pure logic with no OS dependencies: the run configuration and its
//! normalization, the delay policy, verbosity levels, and exit statuses.
//! Everything here can be tested without a desktop session.

pub mod config;
pub mod delay;
pub mod exit;
pub mod verbosity;

pub use config::{ConfigError, RunConfiguration, RunConfigurationBuilder};
pub use delay::DelayPolicy;
pub use exit::ExitStatus;
pub use verbosity::Verbosity;
