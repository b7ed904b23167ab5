//! Windows input emulation via the SendInput API.
//!
//! The pointer move is a relative `MOUSEEVENTF_MOVE` with the requested
//! `(dx, dy)`; a `(0, 0)` move leaves the cursor in place but still counts as
//! user input for the idle timer.  Keys are translated to Virtual Key codes
//! and injected as `KEYBDINPUT` down/up events.
//!
//! `SendInput` returns the number of events it inserted; anything other than
//! one means the input was blocked (for example by UIPI or a secure desktop)
//! and is reported as [`EmulationError::Platform`].

#![cfg(target_os = "windows")]

use std::mem::size_of;

use neveridle_core::keymap::{HidKeyCode, KeyMapper};
use tracing::debug;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, MOUSEEVENTF_MOVE, MOUSEINPUT, VIRTUAL_KEY,
};

use crate::application::keep_awake::{EmulationError, PlatformInputEmulator};

/// Virtual keys that live on the extended part of the keyboard and need
/// `KEYEVENTF_EXTENDEDKEY`.
const EXTENDED_VKS: &[u8] = &[
    0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, // nav
    0x2D, 0x2E, // Insert, Delete
    0x5B, 0x5C, 0x5D, // Win keys, Apps
    0x6F, // Numpad divide
    0x90, // NumLock
    0xA3, 0xA5, // Right Ctrl, Right Alt
];

/// Windows implementation of [`PlatformInputEmulator`] using SendInput.
pub struct WindowsInputEmulator;

impl WindowsInputEmulator {
    pub fn new() -> Result<Self, EmulationError> {
        debug!(backend = "win32-sendinput", "input emulator ready");
        Ok(Self)
    }
}

impl PlatformInputEmulator for WindowsInputEmulator {
    fn emit_relative_move(&self, dx: i32, dy: i32) -> Result<(), EmulationError> {
        let input = INPUT {
            r#type: INPUT_MOUSE,
            Anonymous: INPUT_0 {
                mi: MOUSEINPUT {
                    dx,
                    dy,
                    mouseData: 0,
                    // Without MOUSEEVENTF_ABSOLUTE, dx/dy are relative motion.
                    dwFlags: MOUSEEVENTF_MOVE,
                    time: 0,
                    dwExtraInfo: 0,
                },
            },
        };
        send(input, "pointer move")
    }

    fn emit_key_down(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        send_key(key, false)
    }

    fn emit_key_up(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        send_key(key, true)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn send_key(key: HidKeyCode, key_up: bool) -> Result<(), EmulationError> {
    let vk = KeyMapper::hid_to_windows_vk(key).ok_or(EmulationError::InvalidKeyCode(key))?;
    let input = INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(u16::from(vk)),
                wScan: 0,
                dwFlags: key_flags(key, vk, key_up),
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };
    send(input, if key_up { "key up" } else { "key down" })
}

/// Event flags for a key.  NumpadEnter shares VK_RETURN with the main Enter
/// key and is told apart by the extended flag.
fn key_flags(key: HidKeyCode, vk: u8, key_up: bool) -> KEYBD_EVENT_FLAGS {
    let mut flags = KEYBD_EVENT_FLAGS(0);
    if key_up {
        flags |= KEYEVENTF_KEYUP;
    }
    if key == HidKeyCode::NumpadEnter || EXTENDED_VKS.contains(&vk) {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    flags
}

fn send(input: INPUT, what: &str) -> Result<(), EmulationError> {
    // SAFETY: input is a fully initialised INPUT structure on the stack.
    let inserted = unsafe { SendInput(&[input], size_of::<INPUT>() as i32) };
    if inserted != 1 {
        return Err(EmulationError::Platform(format!(
            "SendInput inserted {inserted} of 1 events for {what}"
        )));
    }
    Ok(())
}
