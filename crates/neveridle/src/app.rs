//! Top-level flow, from raw arguments to exit status.
//!
//! ```text
//! run()
//!  └─ Cli::try_parse_from()      -- malformed syntax  → OptionParsingError
//!  └─ logging::init()            -- then flush option warnings
//!  └─ --help?                    -- print help         → Success
//!  └─ builder.normalize()        -- ConfigError        → OptionValidationError
//!  └─ make_emulator()            -- construction error → OtherError
//!  └─ IdlePreventionLoop::run()  -- returns only with --once → Success
//! ```

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use neveridle_core::{ExitStatus, RunConfiguration, Verbosity};
use tracing::{debug, error, warn};

use crate::application::keep_awake::{EmulationError, IdlePreventionLoop, PlatformInputEmulator};
use crate::infrastructure::cli::{render_help, Cli};
use crate::infrastructure::logging;

/// Runs NeverIdle with `args` (program name first).
///
/// `make_emulator` is only called once the configuration is valid and help
/// was not requested.
pub async fn run<I, T, F>(args: I, make_emulator: F) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce() -> Result<Box<dyn PlatformInputEmulator>, EmulationError>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors go to stderr; --version goes to stdout.
            let _ = e.print();
            return if e.use_stderr() {
                ExitStatus::OptionParsingError
            } else {
                ExitStatus::Success
            };
        }
    };

    logging::init(Verbosity::new(cli.verbose));

    let builder = cli.to_builder();
    for warning in builder.warnings() {
        warn!("{warning}");
    }

    if cli.help {
        print!("{}", render_help(&builder));
        return ExitStatus::Success;
    }

    let config = match builder.normalize() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitStatus::OptionValidationError;
        }
    };

    match keep_awake(config, make_emulator).await {
        Ok(cycles) => {
            debug!(cycles, "idle prevention finished");
            ExitStatus::Success
        }
        Err(e) => {
            error!("{e:#}");
            ExitStatus::OtherError
        }
    }
}

async fn keep_awake<F>(config: RunConfiguration, make_emulator: F) -> anyhow::Result<u64>
where
    F: FnOnce() -> Result<Box<dyn PlatformInputEmulator>, EmulationError>,
{
    let emulator = make_emulator().context("failed to initialise input emulation")?;
    debug!(?config, "starting idle prevention");

    let mut idle_loop = IdlePreventionLoop::new(config, emulator);
    Ok(idle_loop.run().await)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
