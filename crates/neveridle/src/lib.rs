//! neveridle library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does NeverIdle do?
//!
//! Operating systems and chat clients treat a session as idle when no input
//! arrives for a while: the screen locks, the display sleeps, the presence
//! indicator turns "away".  NeverIdle prevents that by injecting synthetic
//! input at random intervals:
//!
//! 1. A zero-distance pointer move (unless `--noDefault`).
//! 2. Optionally a key press (`--keycode=F15`).
//!
//! The injection goes through the platform input APIs (`SendInput` on
//! Windows, XTest on Linux, CoreGraphics on macOS) so the OS cannot tell it
//! apart from real input.

/// Top-level flow from arguments to exit status.
pub mod app;

/// Application layer: the idle-prevention loop.
pub mod application;

/// Infrastructure layer: CLI, logging and OS input adapters.
pub mod infrastructure;

#[cfg(test)]
mod log_capture;
