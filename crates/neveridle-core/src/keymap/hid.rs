//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! This is the canonical cross-platform key representation used by NeverIdle.
//! The key named on the command line is parsed into a [`HidKeyCode`] once at
//! startup and translated to the platform-native code only at the moment the
//! key press is injected.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # Key names
//!
//! Every variant has a symbolic name: its variant name in upper case
//! (`KeyA` is `KEYA`, `ArrowUp` is `ARROWUP`, `F15` is `F15`).  Parsing is
//! case-insensitive and ignores surrounding whitespace, so `--keycode=space`
//! and `--keycode=SPACE` select the same key.  [`HidKeyCode::ALL`] lists every
//! name in declaration order; `--help` prints that list verbatim.
//!
//! # Why F13–F24?
//!
//! Most desktop applications bind nothing to F13 and above, and most physical
//! keyboards do not have them, so pressing one counts as user activity without
//! typing anything into the focused window.  `F15` is the usual choice.
//!
//! # The `Unknown` sentinel
//!
//! [`HidKeyCode::Unknown`] (value 0x0000) is the key code before any
//! `--keycode` option has been accepted.  It has no platform mapping, so an
//! attempt to press it fails with an injection error.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a key name does not match any [`HidKeyCode`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("requested key code '{0}' was not found")]
pub struct KeyNameError(pub String);

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID on the keyboard/keypad page.
/// [`HidKeyCode::Unknown`] represents the absence of a usable key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum HidKeyCode {
    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad (HID 0x53–0x63)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,

    // Application key (HID 0x65)
    ContextMenu = 0x65,

    // Extended function keys (HID 0x68–0x73)
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,

    // Modifier keys (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,

    /// Sentinel for "no key selected".
    #[default]
    Unknown = 0x0000,
}

impl HidKeyCode {
    /// Every key code, in declaration order, `Unknown` last.
    pub const ALL: [HidKeyCode; 117] = {
        use HidKeyCode::*;
        [
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
            KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
            Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9, Digit0,
            Enter, Escape, Backspace, Tab, Space, Minus, Equal, BracketLeft, BracketRight,
            Backslash, Semicolon, Quote, Backquote, Comma, Period, Slash,
            CapsLock,
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
            PrintScreen, ScrollLock, Pause, Insert, Home, PageUp, Delete, End, PageDown,
            ArrowRight, ArrowLeft, ArrowDown, ArrowUp,
            NumLock, NumpadDivide, NumpadMultiply, NumpadSubtract, NumpadAdd, NumpadEnter,
            Numpad1, Numpad2, Numpad3, Numpad4, Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,
            Numpad0, NumpadDecimal,
            ContextMenu,
            F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
            ControlLeft, ShiftLeft, AltLeft, MetaLeft,
            ControlRight, ShiftRight, AltRight, MetaRight,
            Unknown,
        ]
    };

    /// Returns the symbolic name accepted by `--keycode` and listed by `--help`.
    pub fn name(self) -> &'static str {
        use HidKeyCode::*;
        match self {
            KeyA => "KEYA",
            KeyB => "KEYB",
            KeyC => "KEYC",
            KeyD => "KEYD",
            KeyE => "KEYE",
            KeyF => "KEYF",
            KeyG => "KEYG",
            KeyH => "KEYH",
            KeyI => "KEYI",
            KeyJ => "KEYJ",
            KeyK => "KEYK",
            KeyL => "KEYL",
            KeyM => "KEYM",
            KeyN => "KEYN",
            KeyO => "KEYO",
            KeyP => "KEYP",
            KeyQ => "KEYQ",
            KeyR => "KEYR",
            KeyS => "KEYS",
            KeyT => "KEYT",
            KeyU => "KEYU",
            KeyV => "KEYV",
            KeyW => "KEYW",
            KeyX => "KEYX",
            KeyY => "KEYY",
            KeyZ => "KEYZ",
            Digit1 => "DIGIT1",
            Digit2 => "DIGIT2",
            Digit3 => "DIGIT3",
            Digit4 => "DIGIT4",
            Digit5 => "DIGIT5",
            Digit6 => "DIGIT6",
            Digit7 => "DIGIT7",
            Digit8 => "DIGIT8",
            Digit9 => "DIGIT9",
            Digit0 => "DIGIT0",
            Enter => "ENTER",
            Escape => "ESCAPE",
            Backspace => "BACKSPACE",
            Tab => "TAB",
            Space => "SPACE",
            Minus => "MINUS",
            Equal => "EQUAL",
            BracketLeft => "BRACKETLEFT",
            BracketRight => "BRACKETRIGHT",
            Backslash => "BACKSLASH",
            Semicolon => "SEMICOLON",
            Quote => "QUOTE",
            Backquote => "BACKQUOTE",
            Comma => "COMMA",
            Period => "PERIOD",
            Slash => "SLASH",
            CapsLock => "CAPSLOCK",
            F1 => "F1",
            F2 => "F2",
            F3 => "F3",
            F4 => "F4",
            F5 => "F5",
            F6 => "F6",
            F7 => "F7",
            F8 => "F8",
            F9 => "F9",
            F10 => "F10",
            F11 => "F11",
            F12 => "F12",
            PrintScreen => "PRINTSCREEN",
            ScrollLock => "SCROLLLOCK",
            Pause => "PAUSE",
            Insert => "INSERT",
            Home => "HOME",
            PageUp => "PAGEUP",
            Delete => "DELETE",
            End => "END",
            PageDown => "PAGEDOWN",
            ArrowRight => "ARROWRIGHT",
            ArrowLeft => "ARROWLEFT",
            ArrowDown => "ARROWDOWN",
            ArrowUp => "ARROWUP",
            NumLock => "NUMLOCK",
            NumpadDivide => "NUMPADDIVIDE",
            NumpadMultiply => "NUMPADMULTIPLY",
            NumpadSubtract => "NUMPADSUBTRACT",
            NumpadAdd => "NUMPADADD",
            NumpadEnter => "NUMPADENTER",
            Numpad1 => "NUMPAD1",
            Numpad2 => "NUMPAD2",
            Numpad3 => "NUMPAD3",
            Numpad4 => "NUMPAD4",
            Numpad5 => "NUMPAD5",
            Numpad6 => "NUMPAD6",
            Numpad7 => "NUMPAD7",
            Numpad8 => "NUMPAD8",
            Numpad9 => "NUMPAD9",
            Numpad0 => "NUMPAD0",
            NumpadDecimal => "NUMPADDECIMAL",
            ContextMenu => "CONTEXTMENU",
            F13 => "F13",
            F14 => "F14",
            F15 => "F15",
            F16 => "F16",
            F17 => "F17",
            F18 => "F18",
            F19 => "F19",
            F20 => "F20",
            F21 => "F21",
            F22 => "F22",
            F23 => "F23",
            F24 => "F24",
            ControlLeft => "CONTROLLEFT",
            ShiftLeft => "SHIFTLEFT",
            AltLeft => "ALTLEFT",
            MetaLeft => "METALEFT",
            ControlRight => "CONTROLRIGHT",
            ShiftRight => "SHIFTRIGHT",
            AltRight => "ALTRIGHT",
            MetaRight => "METARIGHT",
            Unknown => "UNKNOWN",
        }
    }

    /// Looks up a key code by its symbolic name, ignoring case and surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNameError`] if no variant has that name.
    pub fn from_name(name: &str) -> Result<Self, KeyNameError> {
        let wanted = name.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.name() == wanted)
            .ok_or_else(|| KeyNameError(name.to_string()))
    }
}

impl fmt::Display for HidKeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HidKeyCode {
    type Err = KeyNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
