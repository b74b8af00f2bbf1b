//! Game configuration
//!
//! Grid size and win threshold are read by the engine. Drop rate and
//! acceleration are carried for the driver's pacing only.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_ACCELERATION_RATE, DEFAULT_COLS, DEFAULT_DROPS_PER_SECOND, DEFAULT_ROWS,
    DEFAULT_SCORE_THRESHOLD, HIDDEN_ROWS, MAX_GRID_SIDE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Total rows, hidden buffer included
    pub rows: u16,
    pub cols: u16,
    /// Score at which the game is won
    pub score_threshold: u32,
    /// Base rows-per-second gravity
    pub drops_per_second: u32,
    /// Pieces per +1 drops/sec step; 0 disables acceleration
    pub acceleration_rate: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            drops_per_second: DEFAULT_DROPS_PER_SECOND,
            acceleration_rate: DEFAULT_ACCELERATION_RATE,
        }
    }
}

impl GameConfig {
    pub fn with_dimensions(mut self, rows: u16, cols: u16) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_score_threshold(mut self, score: u32) -> Self {
        self.score_threshold = score;
        self
    }

    pub fn with_drops_per_second(mut self, rate: u32) -> Self {
        self.drops_per_second = rate;
        self
    }

    pub fn with_acceleration_rate(mut self, rate: i32) -> Self {
        self.acceleration_rate = rate;
        self
    }

    /// Reject values no game can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows <= HIDDEN_ROWS || self.cols == 0 {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows > MAX_GRID_SIDE || self.cols > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                rows: self.rows,
                cols: self.cols,
                max: MAX_GRID_SIDE,
            });
        }
        if self.score_threshold == 0 {
            return Err(ConfigError::NonPositiveScoreThreshold);
        }
        if self.drops_per_second == 0 {
            return Err(ConfigError::NonPositiveDropRate);
        }
        if self.acceleration_rate < 0 {
            return Err(ConfigError::NegativeAccelerationRate(self.acceleration_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.score_threshold, 500);
        assert_eq!((config.rows, config.cols), (24, 10));
    }

    #[test]
    fn test_rejects_bad_values() {
        let base = GameConfig::default();
        assert_eq!(
            base.with_score_threshold(0).validate(),
            Err(ConfigError::NonPositiveScoreThreshold)
        );
        assert_eq!(
            base.with_drops_per_second(0).validate(),
            Err(ConfigError::NonPositiveDropRate)
        );
        assert_eq!(
            base.with_acceleration_rate(-1).validate(),
            Err(ConfigError::NegativeAccelerationRate(-1))
        );
        assert_eq!(
            base.with_dimensions(4, 10).validate(),
            Err(ConfigError::GridTooSmall { rows: 4, cols: 10 })
        );
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let base = GameConfig::default();
        assert_eq!(
            base.with_dimensions(40_000, 10).validate(),
            Err(ConfigError::GridTooLarge {
                rows: 40_000,
                cols: 10,
                max: MAX_GRID_SIDE,
            })
        );
        assert!(matches!(
            base.with_dimensions(24, u16::MAX).validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
        assert_eq!(
            base.with_dimensions(MAX_GRID_SIDE, MAX_GRID_SIDE).validate(),
            Ok(())
        );
    }
}
