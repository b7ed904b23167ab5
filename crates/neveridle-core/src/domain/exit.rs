//! Process exit statuses.

use std::fmt;

/// Every way the process can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitStatus {
    Success = 0,
    /// Malformed command-line syntax.
    OptionParsingError = 1,
    /// Parsed values could not be normalized.
    OptionValidationError = 2,
    /// Any other error that reached the top level.
    OtherError = -1,
}

impl ExitStatus {
    /// All statuses, in the order `--help` lists them.
    pub const ALL: [ExitStatus; 4] = [
        ExitStatus::Success,
        ExitStatus::OptionParsingError,
        ExitStatus::OptionValidationError,
        ExitStatus::OtherError,
    ];

    /// Value passed to `std::process::exit`.
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            ExitStatus::Success => "Success",
            ExitStatus::OptionParsingError => "OptionParsingError",
            ExitStatus::OptionValidationError => "OptionValidationError",
            ExitStatus::OtherError => "OtherError",
        }
    }

    /// One line of the `--help` exit-value table: the code as 32-bit hex, a
    /// tab, and the name.
    pub fn help_line(self) -> String {
        format!("0x{:08X}\t{}", self.code() as u32, self.name())
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_documented_values() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::OptionParsingError.code(), 1);
        assert_eq!(ExitStatus::OptionValidationError.code(), 2);
        assert_eq!(ExitStatus::OtherError.code(), -1);
    }

    #[test]
    fn test_help_line_formats_negative_code_as_twos_complement() {
        assert_eq!(ExitStatus::OtherError.help_line(), "0xFFFFFFFF\tOtherError");
        assert_eq!(ExitStatus::Success.help_line(), "0x00000000\tSuccess");
    }
}
