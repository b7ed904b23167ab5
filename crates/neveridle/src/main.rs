//! NeverIdle entry point.
//!
//! # Usage
//!
//! ```text
//! neveridle [OPTIONS]
//!
//!   -k, --keycode <NAME>       Also press NAME every cycle
//!   -d, --noDefault            Do not send the default pointer move
//!   -1, --once                 Send once and exit
//!       --minDelay <SECONDS>   Minimal delay [default: 1]
//!       --maxDelay <SECONDS>   Maximal delay [default: 30]
//!   -r, --noRandomDelay        Always wait the maximal delay
//!   -v, --verbose              Report delays and errors (-vv: every event)
//!   -h, --help                 Show help, key code names and exit values
//! ```
//!
//! The process runs on a single-threaded Tokio runtime; the only await point
//! is the sleep between cycles.  Stop it with Ctrl+C.

use neveridle::app;
use neveridle::infrastructure::input_emulation::platform_emulator;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let status = app::run(std::env::args_os(), platform_emulator).await;
    std::process::exit(status.code());
}
