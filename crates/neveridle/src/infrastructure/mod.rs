//! Infrastructure layer for NeverIdle.
//!
//! Contains OS-facing adapters and process plumbing.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `neveridle_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`cli`** – The clap option table, its conversion into a
//!   `RunConfigurationBuilder`, and the `--help` text.
//!
//! - **`input_emulation`** – OS-specific implementations of
//!   `PlatformInputEmulator`, selected at compile time with
//!   `#[cfg(target_os)]`.  A `MockInputEmulator` is also provided for tests.
//!
//! - **`logging`** – tracing-subscriber initialisation.

pub mod cli;
pub mod input_emulation;
pub mod logging;
