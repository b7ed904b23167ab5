//! Structured logging setup.
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from the
//! verbosity (see [`Verbosity::default_log_directive`]).  Warnings and errors
//! are written to standard error; everything else to standard output.

use neveridle_core::Verbosity;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Builds the filter used when `RUST_LOG` is absent or invalid.
pub fn default_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::new(verbosity.default_log_directive())
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed (the first one
/// stays in effect).
pub fn init(verbosity: Verbosity) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity));
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_verbosity() {
        assert_eq!(default_filter(Verbosity::SILENT).to_string(), "warn");
        assert_eq!(default_filter(Verbosity::new(2)).to_string(), "info");
        assert_eq!(default_filter(Verbosity::new(5)).to_string(), "debug");
    }

    #[test]
    fn test_second_init_keeps_first_subscriber() {
        // Arrange: whichever call runs first in this process installs it.
        init(Verbosity::SILENT);

        // Act / Assert
        assert!(!init(Verbosity::new(3)));
    }
}
