//! Drop pacing for drivers
//!
//! The engine keeps no timers. A driver asks this for the gravity interval
//! after each spawn and schedules its ticks accordingly: every
//! `acceleration_rate` pieces the rate grows by one drop per second.

use crate::config::GameConfig;

/// Milliseconds in one second
const SECOND_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPacing {
    drops_per_second: u32,
    acceleration_rate: u32,
}

impl DropPacing {
    /// `config` must already be validated.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            drops_per_second: config.drops_per_second.max(1),
            acceleration_rate: config.acceleration_rate.max(0) as u32,
        }
    }

    /// Current drops per second after `pieces_generated` pieces
    pub fn drops_per_second(&self, pieces_generated: u32) -> u32 {
        if self.acceleration_rate == 0 {
            return self.drops_per_second;
        }
        self.drops_per_second
            .saturating_add(pieces_generated.saturating_sub(1) / self.acceleration_rate)
    }

    /// Tick interval in milliseconds after `pieces_generated` pieces
    ///
    /// Never below 1ms.
    pub fn interval_ms(&self, pieces_generated: u32) -> u32 {
        (SECOND_MS / self.drops_per_second(pieces_generated)).max(1)
    }
}
