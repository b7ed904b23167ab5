//! Inter-cycle delay selection.

use std::time::Duration;

use rand::Rng;

/// How long to wait between two cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
    /// Uniform draw from the half-open range `[min_secs, max_secs)`.
    ///
    /// When `min_secs == max_secs` the range is empty and the draw yields
    /// `min_secs`.
    Random { min_secs: u32, max_secs: u32 },
    /// Always the same delay.
    Fixed { secs: u32 },
}

impl DelayPolicy {
    /// Picks the delay before the next cycle.
    pub fn next_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let secs = match *self {
            DelayPolicy::Random { min_secs, max_secs } if min_secs < max_secs => {
                rng.gen_range(min_secs..max_secs)
            }
            DelayPolicy::Random { min_secs, .. } => min_secs,
            DelayPolicy::Fixed { secs } => secs,
        };
        Duration::from_secs(u64::from(secs))
    }
}
