//! Recording input emulator for tests.
//!
//! The real emulators move the cursor and press keys on the machine running
//! the tests.  `MockInputEmulator` replaces every OS call with in-memory
//! recording so that assertions can inspect exactly what was emitted and in
//! what order.
//!
//! # Usage in tests
//!
//! ```ignore
//! let emulator = Arc::new(MockInputEmulator::new());
//! let mut lp = IdlePreventionLoop::new(config, Arc::clone(&emulator));
//!
//! lp.run_cycle();
//!
//! assert_eq!(emulator.relative_moves(), vec![(0, 0)]);
//! ```
//!
//! # Failure switches
//!
//! `fail_moves` and `fail_keys` make the corresponding calls return
//! `EmulationError::Platform` without recording anything, so the two emission
//! paths can fail independently.

use std::sync::{Mutex, PoisonError};

use neveridle_core::HidKeyCode;

use crate::application::keep_awake::{EmulationError, PlatformInputEmulator};

/// A mock emulator that records all calls without performing OS API calls.
#[derive(Debug, Default)]
pub struct MockInputEmulator {
    /// Each `(dx, dy)` passed to `emit_relative_move`.
    pub moves: Mutex<Vec<(i32, i32)>>,
    /// Each key passed to `emit_key_down`.
    pub key_downs: Mutex<Vec<HidKeyCode>>,
    /// Each key passed to `emit_key_up`.
    pub key_ups: Mutex<Vec<HidKeyCode>>,
    /// When `true`, `emit_relative_move` fails.
    pub fail_moves: bool,
    /// When `true`, `emit_key_down` and `emit_key_up` fail.
    pub fail_keys: bool,
}

impl MockInputEmulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An emulator whose pointer moves fail.
    pub fn failing_moves() -> Self {
        Self {
            fail_moves: true,
            ..Self::default()
        }
    }

    /// An emulator whose key events fail.
    pub fn failing_keys() -> Self {
        Self {
            fail_keys: true,
            ..Self::default()
        }
    }

    pub fn relative_moves(&self) -> Vec<(i32, i32)> {
        self.moves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Keys that went down and came back up, in order.
    pub fn key_presses(&self) -> Vec<HidKeyCode> {
        let downs = self
            .key_downs
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let ups = self.key_ups.lock().unwrap_or_else(PoisonError::into_inner);
        downs
            .iter()
            .zip(ups.iter())
            .filter(|(down, up)| down == up)
            .map(|(down, _)| *down)
            .collect()
    }

    fn platform_failure() -> EmulationError {
        EmulationError::Platform("mock failure".into())
    }
}

impl PlatformInputEmulator for MockInputEmulator {
    fn emit_relative_move(&self, dx: i32, dy: i32) -> Result<(), EmulationError> {
        if self.fail_moves {
            return Err(Self::platform_failure());
        }
        self.moves
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((dx, dy));
        Ok(())
    }

    fn emit_key_down(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        if self.fail_keys {
            return Err(Self::platform_failure());
        }
        self.key_downs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(key);
        Ok(())
    }

    fn emit_key_up(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        if self.fail_keys {
            return Err(Self::platform_failure());
        }
        self.key_ups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_moves_and_presses_in_order() {
        // Arrange
        let emulator = MockInputEmulator::new();

        // Act
        emulator.emit_relative_move(0, 0).unwrap();
        emulator.emit_key_press(HidKeyCode::F15).unwrap();
        emulator.emit_key_press(HidKeyCode::Space).unwrap();

        // Assert
        assert_eq!(emulator.relative_moves(), vec![(0, 0)]);
        assert_eq!(
            emulator.key_presses(),
            vec![HidKeyCode::F15, HidKeyCode::Space]
        );
    }

    #[test]
    fn test_failure_switches_are_independent() {
        let moves_fail = MockInputEmulator::failing_moves();
        assert!(moves_fail.emit_relative_move(0, 0).is_err());
        assert!(moves_fail.emit_key_press(HidKeyCode::KeyA).is_ok());

        let keys_fail = MockInputEmulator::failing_keys();
        assert!(keys_fail.emit_relative_move(0, 0).is_ok());
        assert!(keys_fail.emit_key_press(HidKeyCode::KeyA).is_err());
        assert!(keys_fail.key_presses().is_empty());
    }
}
