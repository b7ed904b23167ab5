//! How much the idle-prevention loop reports.

use std::fmt;

/// Stacked `-v` count.
///
/// | Level | Reports                                       |
/// |-------|-----------------------------------------------|
/// | 0     | nothing                                       |
/// | 1     | chosen delays and caught injection errors     |
/// | ≥ 2   | also every successful emission                |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Verbosity(u8);

impl Verbosity {
    pub const SILENT: Verbosity = Verbosity(0);

    pub fn new(level: u8) -> Self {
        Self(level)
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Delays and caught injection errors are reported from level 1.
    pub fn reports_delays(self) -> bool {
        self.0 >= 1
    }

    /// Successful emissions are reported from level 2.
    pub fn reports_emissions(self) -> bool {
        self.0 >= 2
    }

    /// Log filter used when `RUST_LOG` is not set.
    ///
    /// Level 0 still lets warnings through so rejected option values are
    /// always visible.
    pub fn default_log_directive(self) -> &'static str {
        match self.0 {
            0 => "warn",
            1 | 2 => "info",
            _ => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_reports_nothing() {
        assert!(!Verbosity::SILENT.reports_delays());
        assert!(!Verbosity::SILENT.reports_emissions());
    }

    #[test]
    fn test_level_one_reports_delays_only() {
        let v = Verbosity::new(1);
        assert!(v.reports_delays());
        assert!(!v.reports_emissions());
    }

    #[test]
    fn test_level_two_and_above_report_everything() {
        for level in [2, 3, 200] {
            let v = Verbosity::new(level);
            assert!(v.reports_delays());
            assert!(v.reports_emissions());
        }
    }

    #[test]
    fn test_default_log_directive_by_level() {
        assert_eq!(Verbosity::new(0).default_log_directive(), "warn");
        assert_eq!(Verbosity::new(1).default_log_directive(), "info");
        assert_eq!(Verbosity::new(2).default_log_directive(), "info");
        assert_eq!(Verbosity::new(3).default_log_directive(), "debug");
    }
}
