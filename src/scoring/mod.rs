//! Log-normal scoring of raw metric values
//!
//! This module converts an unbounded, non-negative metric measurement into a
//! bounded 0..1 score. It is shared by every metric audit, so the convention it
//! encodes defines what a score means across the whole suite.
//!
//! # Implementation Model
//!
//! A metric is modeled as log-normally distributed and calibrated by two
//! reference points held in a [`ScoreCalibration`]:
//! - **podr** (point of diminishing returns): the value that scores
//!   [`GOOD_SCORE_PROBABILITY`] (0.9)
//! - **median**: the value that scores exactly 0.5
//!
//! [`LogNormalParams`] derives the distribution's location and scale from a
//! calibration once, and [`compute_log_normal_score`] evaluates the upper tail
//! of that distribution for a measured value. Lower measurements score higher.
//!
//! Scores are classified for display with [`Rating`], and audits declare how
//! their score should be displayed with [`ScoringMode`].

mod calibration;
mod log_normal;
mod rating;
mod scoring_mode;

pub use calibration::ScoreCalibration;
pub use log_normal::{GOOD_SCORE_PROBABILITY, LogNormalParams, compute_log_normal_score, log_normal_score, normalize_score};
pub use rating::Rating;
pub use scoring_mode::ScoringMode;
