//! The idle-prevention loop.
//!
//! Each cycle makes up to two independent, best-effort emission attempts
//! through a [`PlatformInputEmulator`]:
//!
//! 1. A zero-displacement pointer move, when the configuration sends the
//!    default move.
//! 2. A press (down then up) of the configured key, when key sending is on.
//!
//! A failed attempt is turned into [`EmissionOutcome::Failed`] and never stops
//! the loop or suppresses the other attempt.  After the emissions the loop
//! either stops (`--once`) or picks the next delay from the configuration's
//! [`DelayPolicy`](neveridle_core::DelayPolicy) and sleeps.
//!
//! # Reporting
//!
//! What is reported depends on the configured [`Verbosity`]:
//!
//! | Verbosity | Reported                                         |
//! |-----------|--------------------------------------------------|
//! | 0         | nothing                                          |
//! | 1         | the chosen delay and caught injection errors     |
//! | ≥ 2       | also every successful emission                   |
//!
//! The gating happens here rather than in the log filter, so `RUST_LOG=debug`
//! alone does not make a silent run chatty.

use std::sync::Arc;
use std::time::Duration;

use neveridle_core::{HidKeyCode, RunConfiguration, Verbosity};
use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;
use tracing::{error, info};

/// Error type for input emulation operations.
#[derive(Debug, Error)]
pub enum EmulationError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("no platform key code for {0}")]
    InvalidKeyCode(HidKeyCode),
    #[error("emulator not initialized")]
    NotInitialized,
}

/// Platform-agnostic input injection.
///
/// Each supported OS provides an implementation in the infrastructure layer.
/// Calls are synchronous and treated as instantaneous.
///
/// There is no `Send`/`Sync` bound: the X11 backend owns a display
/// connection that must stay on the thread that opened it, and the loop runs
/// on a single thread.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformInputEmulator {
    /// Moves the pointer by `(dx, dy)` relative to its current position.
    fn emit_relative_move(&self, dx: i32, dy: i32) -> Result<(), EmulationError>;

    /// Emulates a key press (key-down event).
    fn emit_key_down(&self, key: HidKeyCode) -> Result<(), EmulationError>;

    /// Emulates a key release (key-up event).
    fn emit_key_up(&self, key: HidKeyCode) -> Result<(), EmulationError>;

    /// Presses and releases `key`.
    ///
    /// The release is not attempted when the press fails.
    fn emit_key_press(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        self.emit_key_down(key)?;
        self.emit_key_up(key)
    }
}

impl<T: PlatformInputEmulator + ?Sized> PlatformInputEmulator for Box<T> {
    fn emit_relative_move(&self, dx: i32, dy: i32) -> Result<(), EmulationError> {
        (**self).emit_relative_move(dx, dy)
    }

    fn emit_key_down(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        (**self).emit_key_down(key)
    }

    fn emit_key_up(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        (**self).emit_key_up(key)
    }

    fn emit_key_press(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        (**self).emit_key_press(key)
    }
}

impl<T: PlatformInputEmulator + ?Sized> PlatformInputEmulator for Arc<T> {
    fn emit_relative_move(&self, dx: i32, dy: i32) -> Result<(), EmulationError> {
        (**self).emit_relative_move(dx, dy)
    }

    fn emit_key_down(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        (**self).emit_key_down(key)
    }

    fn emit_key_up(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        (**self).emit_key_up(key)
    }

    fn emit_key_press(&self, key: HidKeyCode) -> Result<(), EmulationError> {
        (**self).emit_key_press(key)
    }
}

/// Result of one emission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmissionOutcome {
    /// The configuration does not ask for this emission.
    Skipped,
    Sent,
    /// The emulator reported an error; the message is kept for reporting.
    Failed(String),
}

impl EmissionOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, EmissionOutcome::Sent)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, EmissionOutcome::Failed(_))
    }
}

impl From<Result<(), EmulationError>> for EmissionOutcome {
    fn from(result: Result<(), EmulationError>) -> Self {
        match result {
            Ok(()) => EmissionOutcome::Sent,
            Err(e) => EmissionOutcome::Failed(e.to_string()),
        }
    }
}

/// What one cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub pointer_move: EmissionOutcome,
    pub key_press: EmissionOutcome,
    /// Delay before the next cycle; `None` when the loop stops.
    pub next_delay: Option<Duration>,
}

impl CycleReport {
    pub fn is_last(&self) -> bool {
        self.next_delay.is_none()
    }
}

/// Runs cycles against an emulator until the configuration says to stop.
///
/// Generic over the random source so tests can seed it.
pub struct IdlePreventionLoop<E, R = ThreadRng> {
    config: RunConfiguration,
    emulator: E,
    rng: R,
}

impl<E: PlatformInputEmulator> IdlePreventionLoop<E, ThreadRng> {
    /// Creates a loop drawing delays from the thread-local generator.
    pub fn new(config: RunConfiguration, emulator: E) -> Self {
        Self::with_rng(config, emulator, rand::thread_rng())
    }
}

impl<E: PlatformInputEmulator, R: Rng> IdlePreventionLoop<E, R> {
    pub fn with_rng(config: RunConfiguration, emulator: E, rng: R) -> Self {
        Self {
            config,
            emulator,
            rng,
        }
    }

    pub fn emulator(&self) -> &E {
        &self.emulator
    }

    /// Runs one cycle: emissions, then the stop-or-delay decision.
    ///
    /// Never fails; injection errors are folded into the report.
    pub fn run_cycle(&mut self) -> CycleReport {
        let verbosity = self.config.verbosity();

        let pointer_move = if self.config.send_default_move() {
            let outcome = EmissionOutcome::from(self.emulator.emit_relative_move(0, 0));
            report_emission(verbosity, &outcome, "pointer move by (0, 0)");
            outcome
        } else {
            EmissionOutcome::Skipped
        };

        let key_press = if self.config.send_key() {
            let key = self.config.key_code();
            let outcome = EmissionOutcome::from(self.emulator.emit_key_press(key));
            report_emission(verbosity, &outcome, &format!("key press on {key}"));
            outcome
        } else {
            EmissionOutcome::Skipped
        };

        let next_delay = if self.config.run_once() {
            None
        } else {
            let delay = self.config.delay_policy().next_delay(&mut self.rng);
            if verbosity.reports_delays() {
                info!(
                    "Delay for {} seconds before sending next event.",
                    delay.as_secs()
                );
            }
            Some(delay)
        };

        CycleReport {
            pointer_move,
            key_press,
            next_delay,
        }
    }

    /// Runs cycles until one reports that it is the last.
    ///
    /// Returns the number of cycles run.  Without `--once` this never
    /// returns; the process ends by external termination.
    pub async fn run(&mut self) -> u64 {
        let mut cycles = 0u64;
        loop {
            let report = self.run_cycle();
            cycles += 1;
            match report.next_delay {
                None => return cycles,
                Some(delay) => tokio::time::sleep(delay).await,
            }
        }
    }
}

fn report_emission(verbosity: Verbosity, outcome: &EmissionOutcome, what: &str) {
    match outcome {
        EmissionOutcome::Sent if verbosity.reports_emissions() => info!("Sent {what}."),
        EmissionOutcome::Failed(message) if verbosity.reports_delays() => {
            error!("Failed to send {what}: {message}")
        }
        _ => {}
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use neveridle_core::RunConfigurationBuilder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tracing::Level;

    use crate::log_capture::CapturedLogs;

    fn config(apply: impl FnOnce(&mut RunConfigurationBuilder)) -> RunConfiguration {
        let mut builder = RunConfigurationBuilder::new();
        apply(&mut builder);
        builder.normalize().unwrap()
    }

    fn seeded<E: PlatformInputEmulator>(
        config: RunConfiguration,
        emulator: E,
    ) -> IdlePreventionLoop<E, StdRng> {
        IdlePreventionLoop::with_rng(config, emulator, StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_default_cycle_moves_pointer_only() {
        // Arrange
        let mut emulator = MockPlatformInputEmulator::new();
        emulator
            .expect_emit_relative_move()
            .with(eq(0), eq(0))
            .times(1)
            .returning(|_, _| Ok(()));
        emulator.expect_emit_key_press().never();
        let mut lp = seeded(config(|_| {}), emulator);

        // Act
        let report = lp.run_cycle();

        // Assert
        assert_eq!(report.pointer_move, EmissionOutcome::Sent);
        assert_eq!(report.key_press, EmissionOutcome::Skipped);
        let delay = report.next_delay.unwrap();
        assert!((1..30).contains(&delay.as_secs()));
    }

    #[test]
    fn test_once_no_default_with_key_presses_key_and_stops() {
        // Arrange
        let mut emulator = MockPlatformInputEmulator::new();
        emulator.expect_emit_relative_move().never();
        emulator
            .expect_emit_key_press()
            .with(eq(HidKeyCode::Space))
            .times(1)
            .returning(|_| Ok(()));
        let cfg = config(|b| {
            b.once().no_default().key_name("SPACE");
        });
        let mut lp = seeded(cfg, emulator);

        // Act
        let report = lp.run_cycle();

        // Assert
        assert!(report.key_press.is_sent());
        assert!(report.is_last());
    }

    #[test]
    fn test_move_failure_does_not_suppress_key_press() {
        // Arrange
        let mut emulator = MockPlatformInputEmulator::new();
        emulator
            .expect_emit_relative_move()
            .times(1)
            .returning(|_, _| Err(EmulationError::Platform("no display".into())));
        emulator
            .expect_emit_key_press()
            .times(1)
            .returning(|_| Ok(()));
        let cfg = config(|b| {
            b.key_name("F15");
        });
        let mut lp = seeded(cfg, emulator);

        // Act
        let report = lp.run_cycle();

        // Assert
        assert_eq!(
            report.pointer_move,
            EmissionOutcome::Failed("platform error: no display".into())
        );
        assert!(report.key_press.is_sent());
    }

    #[test]
    fn test_key_failure_does_not_affect_move_outcome() {
        let mut emulator = MockPlatformInputEmulator::new();
        emulator
            .expect_emit_relative_move()
            .times(1)
            .returning(|_, _| Ok(()));
        emulator
            .expect_emit_key_press()
            .times(1)
            .returning(|key| Err(EmulationError::InvalidKeyCode(key)));
        let cfg = config(|b| {
            b.key_name("F24");
        });
        let mut lp = seeded(cfg, emulator);

        let report = lp.run_cycle();

        assert!(report.pointer_move.is_sent());
        assert!(report.key_press.is_failed());
        assert!(report.next_delay.is_some());
    }

    #[test]
    fn test_fixed_delay_uses_max_bound() {
        let mut emulator = MockPlatformInputEmulator::new();
        emulator
            .expect_emit_relative_move()
            .returning(|_, _| Ok(()));
        let cfg = config(|b| {
            b.min_delay("2").max_delay("5").no_random_delay();
        });
        let mut lp = seeded(cfg, emulator);

        for _ in 0..10 {
            assert_eq!(lp.run_cycle().next_delay, Some(Duration::from_secs(5)));
        }
    }

    #[test]
    fn test_nothing_enabled_still_delays() {
        // Arrange: --noDefault with no key configured
        let mut emulator = MockPlatformInputEmulator::new();
        emulator.expect_emit_relative_move().never();
        emulator.expect_emit_key_press().never();
        let cfg = config(|b| {
            b.no_default().min_delay("3").max_delay("3");
        });
        let mut lp = seeded(cfg, emulator);

        // Act
        let report = lp.run_cycle();

        // Assert
        assert_eq!(report.pointer_move, EmissionOutcome::Skipped);
        assert_eq!(report.key_press, EmissionOutcome::Skipped);
        assert_eq!(report.next_delay, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_default_key_press_skips_release_when_press_fails() {
        // Arrange: a hand-written emulator so the provided method is used.
        struct FailingDown;
        impl PlatformInputEmulator for FailingDown {
            fn emit_relative_move(&self, _: i32, _: i32) -> Result<(), EmulationError> {
                Ok(())
            }
            fn emit_key_down(&self, _: HidKeyCode) -> Result<(), EmulationError> {
                Err(EmulationError::NotInitialized)
            }
            fn emit_key_up(&self, _: HidKeyCode) -> Result<(), EmulationError> {
                panic!("release must not follow a failed press");
            }
        }

        // Act
        let result = FailingDown.emit_key_press(HidKeyCode::KeyA);

        // Assert
        assert!(matches!(result, Err(EmulationError::NotInitialized)));
    }

    #[test]
    fn test_boxed_emulator_forwards_calls() {
        let mut emulator = MockPlatformInputEmulator::new();
        emulator
            .expect_emit_key_press()
            .with(eq(HidKeyCode::F13))
            .times(1)
            .returning(|_| Ok(()));
        let boxed: Box<dyn PlatformInputEmulator> = Box::new(emulator);

        assert!(boxed.emit_key_press(HidKeyCode::F13).is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_with_once_returns_after_one_cycle_without_sleeping() {
        // Arrange
        let mut emulator = MockPlatformInputEmulator::new();
        emulator
            .expect_emit_relative_move()
            .times(1)
            .returning(|_, _| Ok(()));
        let cfg = config(|b| {
            b.once();
        });
        let mut lp = seeded(cfg, emulator);
        let started = tokio::time::Instant::now();

        // Act
        let cycles = lp.run().await;

        // Assert
        assert_eq!(cycles, 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    /// Emulator whose pointer move fails and whose key press succeeds, on a
    /// fixed 5 second delay.
    fn half_failing_loop(verbosity: u8) -> IdlePreventionLoop<MockPlatformInputEmulator, StdRng> {
        let mut emulator = MockPlatformInputEmulator::new();
        emulator
            .expect_emit_relative_move()
            .returning(|_, _| Err(EmulationError::Platform("no display".into())));
        emulator.expect_emit_key_press().returning(|_| Ok(()));
        let cfg = config(|b| {
            b.key_name("F15")
                .max_delay("5")
                .no_random_delay()
                .verbosity(verbosity);
        });
        seeded(cfg, emulator)
    }

    #[test]
    fn test_silent_verbosity_reports_nothing() {
        // Arrange
        let (logs, _guard) = CapturedLogs::install();
        let mut lp = half_failing_loop(0);

        // Act
        let report = lp.run_cycle();

        // Assert
        assert!(report.pointer_move.is_failed());
        assert_eq!(logs.contents(), "");
    }

    #[test]
    fn test_verbosity_one_reports_delay_and_failure_only() {
        // Arrange
        let (logs, _guard) = CapturedLogs::install();
        let mut lp = half_failing_loop(1);

        // Act
        lp.run_cycle();

        // Assert
        let errors = logs.lines_at(Level::ERROR);
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains("Failed to send pointer move by (0, 0)"));
        assert!(errors[0].ends_with("platform error: no display"));
        let info = logs.lines_at(Level::INFO);
        assert_eq!(info.len(), 1, "unexpected records: {info:?}");
        assert!(info[0].contains("Delay for 5 seconds before sending"));
    }

    #[test]
    fn test_verbosity_two_also_reports_each_sent_event() {
        // Arrange
        let (logs, _guard) = CapturedLogs::install();
        let mut lp = half_failing_loop(2);

        // Act
        lp.run_cycle();

        // Assert
        let contents = logs.contents();
        assert!(contents.contains("Sent key press on F15."), "{contents}");
        assert!(contents.contains("Delay for 5 seconds"), "{contents}");
        assert_eq!(logs.lines_at(Level::ERROR).len(), 1);
        assert!(!contents.contains("Sent pointer move"));
    }

    #[test]
    fn test_emission_outcome_from_result() {
        assert_eq!(EmissionOutcome::from(Ok(())), EmissionOutcome::Sent);
        assert_eq!(
            EmissionOutcome::from(Err(EmulationError::NotInitialized)),
            EmissionOutcome::Failed("emulator not initialized".into())
        );
    }
}
