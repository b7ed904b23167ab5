//! Platform-specific input emulation implementations.
//!
//! The correct implementation is selected at compile time via
//! `#[cfg(target_os = ...)]`; [`platform_emulator`] constructs it.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

use crate::application::keep_awake::{EmulationError, PlatformInputEmulator};

/// Creates the input emulator for the compile target.
///
/// # Errors
///
/// Returns the backend's construction error (no X display, no event source),
/// or `EmulationError::NotInitialized` on a target without a backend.
pub fn platform_emulator() -> Result<Box<dyn PlatformInputEmulator>, EmulationError> {
    #[cfg(target_os = "linux")]
    {
        Ok(Box::new(linux::LinuxXTestEmulator::new()?))
    }

    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(windows::WindowsInputEmulator::new()?))
    }

    #[cfg(target_os = "macos")]
    {
        Ok(Box::new(macos::MacosInputEmulator::new()?))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
    {
        Err(EmulationError::NotInitialized)
    }
}
