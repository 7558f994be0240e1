//! Scoring module - flat per-line bonus
//!
//! Every cleared row is worth [`LINE_CLEAR_POINTS`], however many rows a
//! single lock clears. There are no levels, combos or drop points.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `lines` rows with one lock.
pub fn line_clear_score(lines: usize) -> u32 {
    (lines as u32).saturating_mul(LINE_CLEAR_POINTS)
}
