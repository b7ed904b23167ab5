//! Application layer use cases for NeverIdle.
//!
//! - **`keep_awake`** – The idle-prevention loop.  It reads the frozen
//!   `RunConfiguration`, emits a pointer move and/or a key press each cycle
//!   through a `PlatformInputEmulator` injected at construction time, and
//!   waits for the delay chosen by the configuration's delay policy.

pub mod keep_awake;
