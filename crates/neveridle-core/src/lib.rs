//! # neveridle-core
//!
//! Shared library for NeverIdle containing the run configuration, the delay
//! policy, exit statuses, and the key code tables.
//!
//! It has zero dependencies on OS APIs; the platform input emulators live in
//! the `neveridle` crate.
//!
//! # What does NeverIdle do?
//!
//! It keeps a desktop session from being considered idle by injecting a
//! synthetic input event (a zero-distance pointer move and/or a key press)
//! every few seconds.
//!
//! - **`domain`** – The [`RunConfiguration`] built from command-line options,
//!   the [`DelayPolicy`] that picks the pause between cycles, [`Verbosity`],
//!   and [`ExitStatus`].
//!
//! - **`keymap`** – The [`HidKeyCode`] enumeration of pressable keys with their
//!   command-line names, and translation tables to Windows VK codes, X11
//!   KeySyms, and macOS CGKeyCodes.

pub mod domain;
pub mod keymap;

pub use domain::{
    ConfigError, DelayPolicy, ExitStatus, RunConfiguration, RunConfigurationBuilder, Verbosity,
};
pub use keymap::hid::{HidKeyCode, KeyNameError};
