//! Linux X11 input emulation via the XTest extension.
//!
//! # What is XTest?
//!
//! XTest is an X11 protocol extension that lets a process synthesize keyboard
//! and pointer events as if the user had physically interacted with the
//! hardware.  The X server resets its idle timer (and with it the screen saver
//! and DPMS countdowns) for synthesized events exactly as for real input.
//!
//! The functions used here:
//! - `XTestFakeRelativeMotionEvent(display, dx, dy, delay)` moves the pointer
//!   relative to its current position; `(0, 0)` leaves it where it is.
//! - `XTestFakeKeyEvent(display, keycode, is_press, delay)` presses or
//!   releases a key.
//!
//! # Key code translation
//!
//! `XTestFakeKeyEvent` takes an X11 *keycode* (a server-assigned scan code),
//! not a KeySym:
//! ```text
//! HidKeyCode → X11 KeySym → XKeysymToKeycode(display, keysym) → X11 keycode
//! ```
//! A KeySym the server's keyboard map does not contain yields keycode 0,
//! which is reported as [`EmulationError::InvalidKeyCode`].
//!
//! # Display connection
//!
//! The connection is opened once in [`LinuxXTestEmulator::new`] from the
//! `DISPLAY` environment variable and closed on drop.  The pointer is not
//! `Send`, so the emulator stays on the thread that created it.

use std::os::raw::{c_int, c_uint, c_ulong};
use std::ptr;

use neveridle_core::keymap::{HidKeyCode, KeyMapper};
use tracing::debug;
use x11::{xlib, xtest};

use crate::application::keep_awake::{EmulationError, PlatformInputEmulator};

/// `CurrentTime`: deliver the event immediately.
const CURRENT_TIME: c_ulong = 0;

const TRUE: c_int = 1;
const FALSE: c_int = 0;

/// Linux X11/XTest input emulator.
pub struct LinuxXTestEmulator {
    display: *mut xlib::Display,
}

impl LinuxXTestEmulator {
    /// Connects to the X display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Returns `EmulationError::Platform` if the display cannot be opened or
    /// the server lacks the XTest extension.
    pub fn new() -> Result<Self, EmulationError> {
        // SAFETY: a null name selects the display from the environment.
        let display = unsafe { xlib::XOpenDisplay(ptr::null()) };
        if display.is_null() {
            return Err(EmulationError::Platform(
                "failed to open X display (is DISPLAY set?)".into(),
            ));
        }
        let emulator = Self { display };

        let (mut event_base, mut error_base, mut major, mut minor) = (0, 0, 0, 0);
        // SAFETY: display is non-null and owned by `emulator`.
        let has_xtest = unsafe {
            xtest::XTestQueryExtension(
                emulator.display,
                &mut event_base,
                &mut error_base,
                &mut major,
                &mut minor,
            )
        };
        if has_xtest == FALSE {
            // `emulator` drops here and closes the display.
            return Err(EmulationError::Platform(
                "X server does not support the XTest extension".into(),
            ));
        }

        debug!(backend = "x11-xtest", major, minor, "input emulator ready");
        Ok(emulator)
    }

    fn keycode_for(&self, key: HidKeyCode) -> Result<c_uint, EmulationError> {
        let keysym = xlib::KeySym::from(keysym_for(key)?);
        // SAFETY: display is a live connection for the lifetime of `self`.
        let keycode = unsafe { xlib::XKeysymToKeycode(self.display, keysym) };
        if keycode == 0 {
            return Err(EmulationError::InvalidKeyCode(key));
        }
        Ok(c_uint::from(keycode))
    }

    fn fake_key(&self, key: HidKeyCode, is_press: c_int) -> Result<(), EmulationError> {
        let keycode = self.keycode_for(key)?;
        // SAFETY: display is live; keycode came from the server's keyboard map.
        let status =
            unsafe { xtest::XTestFakeKeyEvent(self.display, keycode, is_press, CURRENT_TIME) };
        self.flush();
        if status == 0 {
            return Err(EmulationError::Platform(format!(
                "XTestFakeKeyEvent failed for {key}"
            )));
        }
        Ok(())
    }

    fn flush(&self) {
        // SAFETY: display is live.
        unsafe {
            xlib::XFlush(self.display);
        }
    }
}

impl Drop for LinuxXTestEmulator {
    fn drop(&mut self) {
        // SAFETY: display was returned non-null by XOpenDisplay and is closed
        // exactly once.
        unsafe {
            xlib::XCloseDisplay(self.display);
        }
    }
}

impl PlatformInputEmulator for LinuxXTestEmulator {
    fn emit_relative_move(&self, dx: i32, dy: i32) -> Result<(), EmulationError> {
        // SAFETY: display is live. Screen -1 = the pointer's current screen.
        let status =
            unsafe { xtest::XTestFakeRelativeMotionEvent(self.display, -1, dx, dy, CURRENT_TIME) };
        self.flush();
        if status == 0 {
            return Err(EmulationError::Platform(
                "XTestFakeRelativeMotionEvent failed".into(),
            ));
        }
        Ok(())
    }

    fn emit_key_down(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        self.fake_key(key, TRUE)
    }

    fn emit_key_up(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        self.fake_key(key, FALSE)
    }
}

/// Translates the key to its X11 KeySym.
fn keysym_for(key: HidKeyCode) -> Result<u32, EmulationError> {
    KeyMapper::hid_to_x11_keysym(key).ok_or(EmulationError::InvalidKeyCode(key))
}
