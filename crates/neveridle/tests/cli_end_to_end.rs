//! End-to-end tests: raw arguments through `app::run` to an exit status,
//! with a recording emulator in place of the OS backend.

use std::sync::Arc;
use std::time::Duration;

use neveridle::app;
use neveridle::application::keep_awake::{EmulationError, PlatformInputEmulator};
use neveridle::infrastructure::input_emulation::mock::MockInputEmulator;
use neveridle_core::{ExitStatus, HidKeyCode};

fn recording(
    emulator: &Arc<MockInputEmulator>,
) -> impl FnOnce() -> Result<Box<dyn PlatformInputEmulator>, EmulationError> {
    let emulator = Arc::clone(emulator);
    move || Ok(Box::new(emulator) as Box<dyn PlatformInputEmulator>)
}

fn never_built() -> Result<Box<dyn PlatformInputEmulator>, EmulationError> {
    panic!("no emulator may be built for this invocation");
}

#[tokio::test(start_paused = true)]
async fn test_once_no_default_keycode_space() {
    // Arrange
    let emulator = Arc::new(MockInputEmulator::new());
    let started = tokio::time::Instant::now();

    // Act
    let status = app::run(
        ["neveridle", "--once", "--noDefault", "--keycode=SPACE"],
        recording(&emulator),
    )
    .await;

    // Assert
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(emulator.key_presses(), vec![HidKeyCode::Space]);
    assert!(emulator.relative_moves().is_empty());
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_fixed_five_second_delay_runs_multiple_cycles() {
    // Arrange
    let emulator = Arc::new(MockInputEmulator::new());
    let run = app::run(
        ["neveridle", "--minDelay=5", "--maxDelay=5", "-r"],
        recording(&emulator),
    );

    // Act: cycles at t = 0, 5, 10, 15 fit before the timeout.
    let outcome = tokio::time::timeout(Duration::from_millis(15_500), run).await;

    // Assert
    assert!(outcome.is_err());
    assert_eq!(emulator.relative_moves().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_unparseable_max_delay_keeps_running() {
    // Arrange: default bounds [1, 30) apply, so a cycle happens within 30 s.
    let emulator = Arc::new(MockInputEmulator::new());
    let run = app::run(["neveridle", "--maxDelay=abc"], recording(&emulator));

    // Act
    let outcome = tokio::time::timeout(Duration::from_secs(31), run).await;

    // Assert: still looping, not exited with an error.
    assert!(outcome.is_err());
    assert!(emulator.relative_moves().len() >= 2);
}

#[tokio::test]
async fn test_help_prints_usage_and_runs_no_loop() {
    let long = app::run(["neveridle", "--help"], never_built).await;
    let short_with_key = app::run(["neveridle", "-h", "-k", "F15"], never_built).await;

    assert_eq!(long, ExitStatus::Success);
    assert_eq!(short_with_key, ExitStatus::Success);
}

#[tokio::test]
async fn test_unknown_option_exits_with_parsing_error() {
    let status = app::run(["neveridle", "--sleepy"], never_built).await;
    assert_eq!(status.code(), 1);
}

#[tokio::test]
async fn test_unknown_key_name_without_previous_key_sends_only_the_move() {
    // Arrange
    let emulator = Arc::new(MockInputEmulator::new());

    // Act
    let status = app::run(["neveridle", "-1", "--keycode=NOPE"], recording(&emulator)).await;

    // Assert
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(emulator.relative_moves(), vec![(0, 0)]);
    assert!(emulator.key_presses().is_empty());
}
