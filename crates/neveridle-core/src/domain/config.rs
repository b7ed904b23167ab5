//! Run configuration: the single entity NeverIdle works with.
//!
//! The configuration is assembled in two stages:
//!
//! 1. [`RunConfigurationBuilder`] starts from the defaults and receives each
//!    command-line option in the order it was given.  Options that carry a
//!    value (`--keycode`, `--minDelay`, `--maxDelay`) never fail: an
//!    unparseable value is recorded as a warning and the previous value is
//!    kept.
//! 2. [`RunConfigurationBuilder::normalize`] corrects negative and reversed
//!    delay bounds and freezes the result into a [`RunConfiguration`], which
//!    has no setters.
//!
//! # Delay normalization
//!
//! Each raw bound is replaced by its absolute value, then the pair is sorted,
//! so `--minDelay=-40 --maxDelay=10` runs with bounds `[10, 40]`.  The only
//! value that cannot be corrected is `i32::MIN`, whose absolute value is not
//! an `i32`; it is reported as [`ConfigError::DelayOutOfRange`].

use thiserror::Error;
use tracing::debug;

use super::delay::DelayPolicy;
use super::verbosity::Verbosity;
use crate::keymap::HidKeyCode;

/// Default lower delay bound in seconds.
pub const DEFAULT_MIN_DELAY_SECS: i32 = 1;

/// Default upper delay bound in seconds.
pub const DEFAULT_MAX_DELAY_SECS: i32 = 30;

/// Names of the configuration fields, in the order `--help` lists them.
pub const OPTION_FIELDS: [&str; 8] = [
    "sendDefaultMove",
    "sendKey",
    "keyCode",
    "runOnce",
    "minDelaySeconds",
    "maxDelaySeconds",
    "useRandomDelay",
    "verbosity",
];

/// Error raised while normalizing parsed option values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The absolute value of a delay bound does not fit the delay range.
    #[error("{field} value {value} is out of range: its absolute value is not representable")]
    DelayOutOfRange { field: &'static str, value: i32 },
}

/// Frozen run configuration.
///
/// Only [`RunConfigurationBuilder::normalize`] creates one, which guarantees
/// `min_delay_secs() <= max_delay_secs()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    send_default_move: bool,
    send_key: bool,
    key_code: HidKeyCode,
    run_once: bool,
    min_delay_secs: u32,
    max_delay_secs: u32,
    use_random_delay: bool,
    verbosity: Verbosity,
}

impl RunConfiguration {
    /// Whether a zero-displacement pointer move is emitted every cycle.
    pub fn send_default_move(&self) -> bool {
        self.send_default_move
    }

    /// Whether a key press is emitted every cycle.
    pub fn send_key(&self) -> bool {
        self.send_key
    }

    /// The key pressed when [`send_key`](Self::send_key) is set.
    pub fn key_code(&self) -> HidKeyCode {
        self.key_code
    }

    /// Whether to stop after the first cycle.
    pub fn run_once(&self) -> bool {
        self.run_once
    }

    pub fn min_delay_secs(&self) -> u32 {
        self.min_delay_secs
    }

    pub fn max_delay_secs(&self) -> u32 {
        self.max_delay_secs
    }

    /// Whether the inter-cycle delay is drawn at random; if not, it is always
    /// [`max_delay_secs`](Self::max_delay_secs).
    pub fn use_random_delay(&self) -> bool {
        self.use_random_delay
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Returns the delay policy described by this configuration.
    pub fn delay_policy(&self) -> DelayPolicy {
        if self.use_random_delay {
            DelayPolicy::Random {
                min_secs: self.min_delay_secs,
                max_secs: self.max_delay_secs,
            }
        } else {
            DelayPolicy::Fixed {
                secs: self.max_delay_secs,
            }
        }
    }
}

/// Accumulates parsed command-line options into a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfigurationBuilder {
    send_default_move: bool,
    send_key: bool,
    key_code: HidKeyCode,
    run_once: bool,
    min_delay_secs: i32,
    max_delay_secs: i32,
    use_random_delay: bool,
    verbosity: u8,
    warnings: Vec<String>,
}

impl Default for RunConfigurationBuilder {
    /// | Field           | Default   |
    /// |-----------------|-----------|
    /// | sendDefaultMove | `true`    |
    /// | sendKey         | `false`   |
    /// | keyCode         | `UNKNOWN` |
    /// | runOnce         | `false`   |
    /// | minDelaySeconds | 1         |
    /// | maxDelaySeconds | 30        |
    /// | useRandomDelay  | `true`    |
    /// | verbosity       | 0         |
    fn default() -> Self {
        Self {
            send_default_move: true,
            send_key: false,
            key_code: HidKeyCode::Unknown,
            run_once: false,
            min_delay_secs: DEFAULT_MIN_DELAY_SECS,
            max_delay_secs: DEFAULT_MAX_DELAY_SECS,
            use_random_delay: true,
            verbosity: 0,
            warnings: Vec::new(),
        }
    }
}

impl RunConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `--keycode=NAME`.
    ///
    /// A blank name is ignored.  A valid name selects the key and enables key
    /// presses.  An unknown name is recorded as a warning and leaves both the
    /// key code and the key-press switch as they were.
    pub fn key_name(&mut self, name: &str) -> &mut Self {
        if name.trim().is_empty() {
            return self;
        }
        match HidKeyCode::from_name(name) {
            Ok(code) => {
                self.key_code = code;
                self.send_key = true;
            }
            Err(e) => self
                .warnings
                .push(format!("{e}. Key code reverts to {}.", self.key_code)),
        }
        self
    }

    /// Applies `--noDefault`.
    pub fn no_default(&mut self) -> &mut Self {
        self.send_default_move = false;
        self
    }

    /// Applies `--once`.
    pub fn once(&mut self) -> &mut Self {
        self.run_once = true;
        self
    }

    /// Applies `--minDelay=N`; an unparseable `N` keeps the previous value.
    pub fn min_delay(&mut self, raw: &str) -> &mut Self {
        match raw.trim().parse::<i32>() {
            Ok(secs) => self.min_delay_secs = secs,
            Err(e) => self.warnings.push(format!(
                "invalid minDelay '{raw}': {e}. Minimal delay reverts to {}.",
                self.min_delay_secs
            )),
        }
        self
    }

    /// Applies `--maxDelay=N`; an unparseable `N` keeps the previous value.
    pub fn max_delay(&mut self, raw: &str) -> &mut Self {
        match raw.trim().parse::<i32>() {
            Ok(secs) => self.max_delay_secs = secs,
            Err(e) => self.warnings.push(format!(
                "invalid maxDelay '{raw}': {e}. Maximal delay reverts to {}.",
                self.max_delay_secs
            )),
        }
        self
    }

    /// Applies `--noRandomDelay`.
    pub fn no_random_delay(&mut self) -> &mut Self {
        self.use_random_delay = false;
        self
    }

    /// Sets the verbosity to the number of stacked `-v` flags.
    pub fn verbosity(&mut self, level: u8) -> &mut Self {
        self.verbosity = level;
        self
    }

    /// Warnings collected from rejected option values, oldest first.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Current value of every configuration field, paired with its name from
    /// [`OPTION_FIELDS`].  Values are shown as parsed, before normalization.
    pub fn option_values(&self) -> [(&'static str, String); 8] {
        let [send_default_move, send_key, key_code, run_once, min, max, random, verbosity] =
            OPTION_FIELDS;
        [
            (send_default_move, self.send_default_move.to_string()),
            (send_key, self.send_key.to_string()),
            (key_code, self.key_code.to_string()),
            (run_once, self.run_once.to_string()),
            (min, self.min_delay_secs.to_string()),
            (max, self.max_delay_secs.to_string()),
            (random, self.use_random_delay.to_string()),
            (verbosity, self.verbosity.to_string()),
        ]
    }

    /// Corrects the delay bounds and freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DelayOutOfRange`] if a bound is `i32::MIN`.
    pub fn normalize(&self) -> Result<RunConfiguration, ConfigError> {
        let a = absolute_delay("minDelay", self.min_delay_secs)?;
        let b = absolute_delay("maxDelay", self.max_delay_secs)?;
        let (min_delay_secs, max_delay_secs) = if a <= b { (a, b) } else { (b, a) };

        let raw = (self.min_delay_secs as u32, self.max_delay_secs as u32);
        if (min_delay_secs, max_delay_secs) != raw {
            debug!(
                raw_min = self.min_delay_secs,
                raw_max = self.max_delay_secs,
                min_delay_secs,
                max_delay_secs,
                "corrected delay bounds"
            );
        }

        Ok(RunConfiguration {
            send_default_move: self.send_default_move,
            send_key: self.send_key,
            key_code: self.key_code,
            run_once: self.run_once,
            min_delay_secs,
            max_delay_secs,
            use_random_delay: self.use_random_delay,
            verbosity: Verbosity::new(self.verbosity),
        })
    }
}

fn absolute_delay(field: &'static str, value: i32) -> Result<u32, ConfigError> {
    value
        .checked_abs()
        .map(|secs| secs as u32)
        .ok_or(ConfigError::DelayOutOfRange { field, value })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
