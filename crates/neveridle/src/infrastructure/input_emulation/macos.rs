//! macOS CoreGraphics input emulation.
//!
//! Events are created from a `CGEventSource` in the HID system state and
//! posted at `CGEventTapLocation::HID`, the same level as physical keyboard
//! and mouse input, so they reset the system idle timer.
//!
//! # Relative pointer moves
//!
//! CoreGraphics has no relative-move call.  The current cursor location is
//! read from an empty event, offset by `(dx, dy)`, and posted as a
//! `MouseMoved` event with the delta fields set.  A `(0, 0)` move posts the
//! current location back.
//!
//! # Accessibility permission
//!
//! Posting at the HID tap requires the process (or the terminal running it)
//! to be granted **Accessibility** access in System Settings → Privacy &
//! Security.  Without it the events are silently dropped.

#![cfg(target_os = "macos")]

use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventType, CGMouseButton, EventField};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};
use core_graphics::geometry::CGPoint;
use neveridle_core::keymap::{HidKeyCode, KeyMapper};
use tracing::debug;

use crate::application::keep_awake::{EmulationError, PlatformInputEmulator};

/// macOS implementation of [`PlatformInputEmulator`] using `CGEventPost`.
pub struct MacosInputEmulator {
    source: CGEventSource,
}

impl MacosInputEmulator {
    /// Creates the HID-state event source.
    ///
    /// # Errors
    ///
    /// Returns `EmulationError::Platform` if CoreGraphics refuses to create
    /// the event source.
    pub fn new() -> Result<Self, EmulationError> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|()| EmulationError::Platform("failed to create CGEventSource".into()))?;
        debug!(backend = "coregraphics", "input emulator ready");
        Ok(Self { source })
    }

    fn cursor_location(&self) -> Result<CGPoint, EmulationError> {
        let probe = CGEvent::new(self.source.clone())
            .map_err(|()| EmulationError::Platform("failed to create CGEvent".into()))?;
        Ok(probe.location())
    }

    fn post_key(&self, key: HidKeyCode, key_down: bool) -> Result<(), EmulationError> {
        let keycode =
            KeyMapper::hid_to_macos_cgkeycode(key).ok_or(EmulationError::InvalidKeyCode(key))?;
        let event = CGEvent::new_keyboard_event(self.source.clone(), keycode, key_down)
            .map_err(|()| {
                EmulationError::Platform(format!("failed to create keyboard event for {key}"))
            })?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }
}

impl PlatformInputEmulator for MacosInputEmulator {
    fn emit_relative_move(&self, dx: i32, dy: i32) -> Result<(), EmulationError> {
        let target = offset(self.cursor_location()?, dx, dy);
        let event = CGEvent::new_mouse_event(
            self.source.clone(),
            CGEventType::MouseMoved,
            target,
            CGMouseButton::Left,
        )
        .map_err(|()| EmulationError::Platform("failed to create mouse event".into()))?;
        event.set_integer_value_field(EventField::MOUSE_EVENT_DELTA_X, i64::from(dx));
        event.set_integer_value_field(EventField::MOUSE_EVENT_DELTA_Y, i64::from(dy));
        event.post(CGEventTapLocation::HID);
        Ok(())
    }

    fn emit_key_down(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        self.post_key(key, true)
    }

    fn emit_key_up(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        self.post_key(key, false)
    }
}

/// Screen coordinates with a top-left origin, matching the other platforms.
fn offset(point: CGPoint, dx: i32, dy: i32) -> CGPoint {
    CGPoint::new(point.x + f64::from(dx), point.y + f64::from(dy))
}
