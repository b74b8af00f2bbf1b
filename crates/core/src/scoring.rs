//! Scoring module - points per lock and the win threshold
//!
//! Each cleared row is worth 25 points, and every row beyond the first in the
//! same lock adds 10 more: single 25, double 60, triple 95, four rows 130.

use crate::types::{MULTI_ROW_BONUS, POINTS_PER_ROW};

/// Points for clearing `rows` rows in one lock
pub fn line_clear_score(rows: usize) -> u32 {
    let rows = rows as u32;
    rows * POINTS_PER_ROW + rows.saturating_sub(1) * MULTI_ROW_BONUS
}

/// Whether `score` wins against `threshold`
pub fn reaches_threshold(score: u32, threshold: u32) -> bool {
    score >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 25);
        assert_eq!(line_clear_score(2), 60);
        assert_eq!(line_clear_score(3), 95);
        assert_eq!(line_clear_score(4), 130);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(!reaches_threshold(499, 500));
        assert!(reaches_threshold(500, 500));
        assert!(reaches_threshold(525, 500));
    }
}
