//! Key code translation tables for cross-platform key press injection.
//!
//! The canonical representation is USB HID Usage IDs (page 0x07, Keyboard/Keypad).
//! The configured key is translated to the platform-native code at the
//! emulation boundary.

pub mod hid;
pub mod native;

pub use hid::{HidKeyCode, KeyNameError};
pub use native::{native_codes, NativeCodes};

/// Unified key mapper providing every HID → platform translation.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates a [`HidKeyCode`] to a Windows Virtual Key code.
    ///
    /// Returns `None` if the HID code has no Windows VK equivalent.
    pub fn hid_to_windows_vk(hid: HidKeyCode) -> Option<u8> {
        native_codes(hid).map(|codes| codes.windows_vk)
    }

    /// Translates a [`HidKeyCode`] to an X11 KeySym value.
    ///
    /// Returns `None` if the HID code has no X11 equivalent.
    pub fn hid_to_x11_keysym(hid: HidKeyCode) -> Option<u32> {
        native_codes(hid).map(|codes| codes.x11_keysym)
    }

    /// Translates a [`HidKeyCode`] to a macOS `CGKeyCode` value.
    ///
    /// Returns `None` if the HID code has no macOS equivalent.
    pub fn hid_to_macos_cgkeycode(hid: HidKeyCode) -> Option<u16> {
        native_codes(hid).and_then(|codes| codes.macos_cgkeycode)
    }
}
