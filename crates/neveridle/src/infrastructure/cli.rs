//! Command-line option table.
//!
//! The `#[derive(Parser)]` macro from `clap` generates the parser from the
//! [`Cli`] fields.  Long names keep their camel-case spelling
//! (`--noDefault`, `--minDelay`, ...).
//!
//! # Repeated options
//!
//! Boolean flags may be repeated (`args_override_self`).  The value options
//! `--keycode`, `--minDelay` and `--maxDelay` collect every occurrence in
//! order; [`Cli::to_builder`] replays them so the last *valid* value wins and
//! each invalid one leaves a warning behind.  The replay goes option by
//! option (every `--keycode`, then `--minDelay`, then `--maxDelay`), so
//! warnings follow that grouping rather than their position on the command
//! line.  The options do not affect each other, so only the warning order
//! depends on it.
//!
//! # Environment variable overrides
//!
//! | Variable              | Option       |
//! |-----------------------|--------------|
//! | `NEVERIDLE_KEYCODE`   | `--keycode`  |
//! | `NEVERIDLE_MIN_DELAY` | `--minDelay` |
//! | `NEVERIDLE_MAX_DELAY` | `--maxDelay` |
//!
//! Command-line values take precedence.
//!
//! # Help
//!
//! clap's generated help flag is disabled.  `-h/--help` is a plain flag and
//! [`render_help`] appends the current option values, the exit values and
//! every key code name to clap's option table.

use std::fmt::Write as _;

use clap::{ArgAction, CommandFactory, Parser};
use neveridle_core::{ExitStatus, HidKeyCode, RunConfigurationBuilder};

/// Key code names per line in the help output.
const KEY_NAMES_PER_LINE: usize = 10;

/// Prevents the session from going idle by sending a zero-distance pointer
/// move and/or a key press at random intervals.
#[derive(Debug, Parser)]
#[command(
    name = "neveridle",
    version,
    disable_help_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Also press NAME every cycle (see "Key code names").
    #[arg(
        short = 'k',
        long = "keycode",
        value_name = "NAME",
        env = "NEVERIDLE_KEYCODE",
        action = ArgAction::Append
    )]
    pub keycode: Vec<String>,

    /// Do not send the default zero-distance pointer move.
    #[arg(short = 'd', long = "noDefault")]
    pub no_default: bool,

    /// Send once and exit.
    #[arg(short = '1', long = "once")]
    pub once: bool,

    /// Minimal delay between cycles, in seconds.
    #[arg(
        long = "minDelay",
        value_name = "SECONDS",
        env = "NEVERIDLE_MIN_DELAY",
        allow_hyphen_values = true,
        action = ArgAction::Append
    )]
    pub min_delay: Vec<String>,

    /// Maximal delay between cycles, in seconds.
    #[arg(
        long = "maxDelay",
        value_name = "SECONDS",
        env = "NEVERIDLE_MAX_DELAY",
        allow_hyphen_values = true,
        action = ArgAction::Append
    )]
    pub max_delay: Vec<String>,

    /// Always wait the maximal delay instead of a random one.
    #[arg(short = 'r', long = "noRandomDelay")]
    pub no_random_delay: bool,

    /// Report delays and errors; repeat (-vv) to report every event sent.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Show this message and exit.
    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

impl Cli {
    /// Replays the parsed options onto a fresh builder.
    ///
    /// Never fails; rejected values are recorded as builder warnings.
    pub fn to_builder(&self) -> RunConfigurationBuilder {
        let mut builder = RunConfigurationBuilder::new();
        for name in &self.keycode {
            builder.key_name(name);
        }
        if self.no_default {
            builder.no_default();
        }
        if self.once {
            builder.once();
        }
        for raw in &self.min_delay {
            builder.min_delay(raw);
        }
        for raw in &self.max_delay {
            builder.max_delay(raw);
        }
        if self.no_random_delay {
            builder.no_random_delay();
        }
        builder.verbosity(self.verbose);
        builder
    }
}

/// Full `--help` text: description and options, then the option values held
/// by `builder`, the exit values and the key code names.
pub fn render_help(builder: &RunConfigurationBuilder) -> String {
    let mut out = Cli::command().render_help().to_string();

    out.push_str("\nOption values:\n");
    for (name, value) in builder.option_values() {
        let _ = writeln!(out, "  {name}={value}");
    }

    out.push_str("\nExit values:\n");
    for status in ExitStatus::ALL {
        let _ = writeln!(out, "  {}", status.help_line());
    }

    out.push_str("\nKey code names:\n");
    for line in HidKeyCode::ALL.chunks(KEY_NAMES_PER_LINE) {
        let names: Vec<&str> = line.iter().map(|key| key.name()).collect();
        let _ = writeln!(out, "  {}", names.join(" "));
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
