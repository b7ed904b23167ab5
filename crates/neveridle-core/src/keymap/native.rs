//! Native key codes for every pressable key.
//!
//! One row per [`HidKeyCode`] except `Unknown`, holding the code each
//! platform's injection API expects:
//!
//! | Column     | Platform | Used by                                   |
//! |------------|----------|-------------------------------------------|
//! | VK         | Windows  | `KEYBDINPUT::wVk` for `SendInput`         |
//! | KeySym     | X11      | `XKeysymToKeycode`, then `XTestFakeKeyEvent` |
//! | CGKeyCode  | macOS    | `CGEvent::new_keyboard_event`             |
//!
//! Sources: winuser.h virtual-key codes, X11/keysymdef.h, and the `kVK_*`
//! constants in HIToolbox Events.h.
//!
//! Letters map to the *lowercase* KeySym, which is the one bound to the
//! unshifted keycode in every standard keyboard map.  NumpadEnter has no VK of
//! its own: it is VK_RETURN sent with `KEYEVENTF_EXTENDEDKEY`.  macOS has no
//! virtual key codes for F21-F24.

use super::hid::HidKeyCode;

/// The native codes of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCodes {
    pub key: HidKeyCode,
    pub windows_vk: u8,
    pub x11_keysym: u32,
    pub macos_cgkeycode: Option<u16>,
}

impl NativeCodes {
    const fn new(
        key: HidKeyCode,
        windows_vk: u8,
        x11_keysym: u32,
        macos_cgkeycode: Option<u16>,
    ) -> Self {
        Self {
            key,
            windows_vk,
            x11_keysym,
            macos_cgkeycode,
        }
    }
}

/// Looks up the native codes of `key`; `None` for `Unknown`.
pub fn native_codes(key: HidKeyCode) -> Option<&'static NativeCodes> {
    // Runs at most once per cycle.
    NATIVE_CODES.iter().find(|row| row.key == key)
}

/// The table behind [`native_codes`], in [`HidKeyCode::ALL`] order.
#[rustfmt::skip]
pub const NATIVE_CODES: [NativeCodes; 116] = {
    use HidKeyCode::*;
    [
        // Columns: key, Windows VK, X11 KeySym, macOS CGKeyCode
        // Letters: VK_A..VK_Z, lowercase Latin-1 KeySyms, ANSI positions on macOS
        NativeCodes::new(KeyA,           0x41, 0x0061, Some(0x00)),
        NativeCodes::new(KeyB,           0x42, 0x0062, Some(0x0B)),
        NativeCodes::new(KeyC,           0x43, 0x0063, Some(0x08)),
        NativeCodes::new(KeyD,           0x44, 0x0064, Some(0x02)),
        NativeCodes::new(KeyE,           0x45, 0x0065, Some(0x0E)),
        NativeCodes::new(KeyF,           0x46, 0x0066, Some(0x03)),
        NativeCodes::new(KeyG,           0x47, 0x0067, Some(0x05)),
        NativeCodes::new(KeyH,           0x48, 0x0068, Some(0x04)),
        NativeCodes::new(KeyI,           0x49, 0x0069, Some(0x22)),
        NativeCodes::new(KeyJ,           0x4A, 0x006A, Some(0x26)),
        NativeCodes::new(KeyK,           0x4B, 0x006B, Some(0x28)),
        NativeCodes::new(KeyL,           0x4C, 0x006C, Some(0x25)),
        NativeCodes::new(KeyM,           0x4D, 0x006D, Some(0x2E)),
        NativeCodes::new(KeyN,           0x4E, 0x006E, Some(0x2D)),
        NativeCodes::new(KeyO,           0x4F, 0x006F, Some(0x1F)),
        NativeCodes::new(KeyP,           0x50, 0x0070, Some(0x23)),
        NativeCodes::new(KeyQ,           0x51, 0x0071, Some(0x0C)),
        NativeCodes::new(KeyR,           0x52, 0x0072, Some(0x0F)),
        NativeCodes::new(KeyS,           0x53, 0x0073, Some(0x01)),
        NativeCodes::new(KeyT,           0x54, 0x0074, Some(0x11)),
        NativeCodes::new(KeyU,           0x55, 0x0075, Some(0x20)),
        NativeCodes::new(KeyV,           0x56, 0x0076, Some(0x09)),
        NativeCodes::new(KeyW,           0x57, 0x0077, Some(0x0D)),
        NativeCodes::new(KeyX,           0x58, 0x0078, Some(0x07)),
        NativeCodes::new(KeyY,           0x59, 0x0079, Some(0x10)),
        NativeCodes::new(KeyZ,           0x5A, 0x007A, Some(0x06)),
        // Digit row
        NativeCodes::new(Digit1,         0x31, 0x0031, Some(0x12)),
        NativeCodes::new(Digit2,         0x32, 0x0032, Some(0x13)),
        NativeCodes::new(Digit3,         0x33, 0x0033, Some(0x14)),
        NativeCodes::new(Digit4,         0x34, 0x0034, Some(0x15)),
        NativeCodes::new(Digit5,         0x35, 0x0035, Some(0x17)),
        NativeCodes::new(Digit6,         0x36, 0x0036, Some(0x16)),
        NativeCodes::new(Digit7,         0x37, 0x0037, Some(0x1A)),
        NativeCodes::new(Digit8,         0x38, 0x0038, Some(0x1C)),
        NativeCodes::new(Digit9,         0x39, 0x0039, Some(0x19)),
        NativeCodes::new(Digit0,         0x30, 0x0030, Some(0x1D)),
        // Editing and punctuation
        NativeCodes::new(Enter,          0x0D, 0xFF0D, Some(0x24)),
        NativeCodes::new(Escape,         0x1B, 0xFF1B, Some(0x35)),
        NativeCodes::new(Backspace,      0x08, 0xFF08, Some(0x33)),
        NativeCodes::new(Tab,            0x09, 0xFF09, Some(0x30)),
        NativeCodes::new(Space,          0x20, 0x0020, Some(0x31)),
        NativeCodes::new(Minus,          0xBD, 0x002D, Some(0x1B)),
        NativeCodes::new(Equal,          0xBB, 0x003D, Some(0x18)),
        NativeCodes::new(BracketLeft,    0xDB, 0x005B, Some(0x21)),
        NativeCodes::new(BracketRight,   0xDD, 0x005D, Some(0x1E)),
        NativeCodes::new(Backslash,      0xDC, 0x005C, Some(0x2A)),
        NativeCodes::new(Semicolon,      0xBA, 0x003B, Some(0x29)),
        NativeCodes::new(Quote,          0xDE, 0x0027, Some(0x27)),
        NativeCodes::new(Backquote,      0xC0, 0x0060, Some(0x32)),
        NativeCodes::new(Comma,          0xBC, 0x002C, Some(0x2B)),
        NativeCodes::new(Period,         0xBE, 0x002E, Some(0x2F)),
        NativeCodes::new(Slash,          0xBF, 0x002F, Some(0x2C)),
        // Locks and F1-F12
        NativeCodes::new(CapsLock,       0x14, 0xFFE5, Some(0x39)),
        NativeCodes::new(F1,             0x70, 0xFFBE, Some(0x7A)),
        NativeCodes::new(F2,             0x71, 0xFFBF, Some(0x78)),
        NativeCodes::new(F3,             0x72, 0xFFC0, Some(0x63)),
        NativeCodes::new(F4,             0x73, 0xFFC1, Some(0x76)),
        NativeCodes::new(F5,             0x74, 0xFFC2, Some(0x60)),
        NativeCodes::new(F6,             0x75, 0xFFC3, Some(0x61)),
        NativeCodes::new(F7,             0x76, 0xFFC4, Some(0x62)),
        NativeCodes::new(F8,             0x77, 0xFFC5, Some(0x64)),
        NativeCodes::new(F9,             0x78, 0xFFC6, Some(0x65)),
        NativeCodes::new(F10,            0x79, 0xFFC7, Some(0x6D)),
        NativeCodes::new(F11,            0x7A, 0xFFC8, Some(0x67)),
        NativeCodes::new(F12,            0x7B, 0xFFC9, Some(0x6F)),
        // Navigation cluster
        NativeCodes::new(PrintScreen,    0x2C, 0xFF61, Some(0x69)),
        NativeCodes::new(ScrollLock,     0x91, 0xFF14, Some(0x6B)),
        NativeCodes::new(Pause,          0x13, 0xFF13, Some(0x71)),
        NativeCodes::new(Insert,         0x2D, 0xFF63, Some(0x72)),
        NativeCodes::new(Home,           0x24, 0xFF50, Some(0x73)),
        NativeCodes::new(PageUp,         0x21, 0xFF55, Some(0x74)),
        NativeCodes::new(Delete,         0x2E, 0xFFFF, Some(0x75)),
        NativeCodes::new(End,            0x23, 0xFF57, Some(0x77)),
        NativeCodes::new(PageDown,       0x22, 0xFF56, Some(0x79)),
        NativeCodes::new(ArrowRight,     0x27, 0xFF53, Some(0x7C)),
        NativeCodes::new(ArrowLeft,      0x25, 0xFF51, Some(0x7B)),
        NativeCodes::new(ArrowDown,      0x28, 0xFF54, Some(0x7D)),
        NativeCodes::new(ArrowUp,        0x26, 0xFF52, Some(0x7E)),
        // Numeric keypad
        NativeCodes::new(NumLock,        0x90, 0xFF7F, Some(0x47)),
        NativeCodes::new(NumpadDivide,   0x6F, 0xFFAF, Some(0x4B)),
        NativeCodes::new(NumpadMultiply, 0x6A, 0xFFAA, Some(0x43)),
        NativeCodes::new(NumpadSubtract, 0x6D, 0xFFAD, Some(0x4E)),
        NativeCodes::new(NumpadAdd,      0x6B, 0xFFAB, Some(0x45)),
        NativeCodes::new(NumpadEnter,    0x0D, 0xFF8D, Some(0x4C)),
        NativeCodes::new(Numpad1,        0x61, 0xFFB1, Some(0x53)),
        NativeCodes::new(Numpad2,        0x62, 0xFFB2, Some(0x54)),
        NativeCodes::new(Numpad3,        0x63, 0xFFB3, Some(0x55)),
        NativeCodes::new(Numpad4,        0x64, 0xFFB4, Some(0x56)),
        NativeCodes::new(Numpad5,        0x65, 0xFFB5, Some(0x57)),
        NativeCodes::new(Numpad6,        0x66, 0xFFB6, Some(0x58)),
        NativeCodes::new(Numpad7,        0x67, 0xFFB7, Some(0x59)),
        NativeCodes::new(Numpad8,        0x68, 0xFFB8, Some(0x5B)),
        NativeCodes::new(Numpad9,        0x69, 0xFFB9, Some(0x5C)),
        NativeCodes::new(Numpad0,        0x60, 0xFFB0, Some(0x52)),
        NativeCodes::new(NumpadDecimal,  0x6E, 0xFFAE, Some(0x41)),
        // Menu and F13-F24; macOS stops at F20
        NativeCodes::new(ContextMenu,    0x5D, 0xFF67, Some(0x6E)),
        NativeCodes::new(F13,            0x7C, 0xFFCA, Some(0x69)),
        NativeCodes::new(F14,            0x7D, 0xFFCB, Some(0x6B)),
        NativeCodes::new(F15,            0x7E, 0xFFCC, Some(0x71)),
        NativeCodes::new(F16,            0x7F, 0xFFCD, Some(0x6A)),
        NativeCodes::new(F17,            0x80, 0xFFCE, Some(0x40)),
        NativeCodes::new(F18,            0x81, 0xFFCF, Some(0x4F)),
        NativeCodes::new(F19,            0x82, 0xFFD0, Some(0x50)),
        NativeCodes::new(F20,            0x83, 0xFFD1, Some(0x5A)),
        NativeCodes::new(F21,            0x84, 0xFFD2, None),
        NativeCodes::new(F22,            0x85, 0xFFD3, None),
        NativeCodes::new(F23,            0x86, 0xFFD4, None),
        NativeCodes::new(F24,            0x87, 0xFFD5, None),
        // Modifiers
        NativeCodes::new(ControlLeft,    0xA2, 0xFFE3, Some(0x3B)),
        NativeCodes::new(ShiftLeft,      0xA0, 0xFFE1, Some(0x38)),
        NativeCodes::new(AltLeft,        0xA4, 0xFFE9, Some(0x3A)),
        NativeCodes::new(MetaLeft,       0x5B, 0xFFEB, Some(0x37)),
        NativeCodes::new(ControlRight,   0xA3, 0xFFE4, Some(0x3E)),
        NativeCodes::new(ShiftRight,     0xA1, 0xFFE2, Some(0x3C)),
        NativeCodes::new(AltRight,       0xA5, 0xFFEA, Some(0x3D)),
        NativeCodes::new(MetaRight,      0x5C, 0xFFEC, Some(0x36)),
    ]
};
