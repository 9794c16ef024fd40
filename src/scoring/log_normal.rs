use super::ScoreCalibration;
use crate::Result;
use ohno::IntoAppError;
use statrs::distribution::{ContinuousCDF, LogNormal, Normal};

/// Score awarded to a measurement equal to the calibration's podr.
///
/// Every metric audit shares this convention; changing it changes the meaning of every score.
pub const GOOD_SCORE_PROBABILITY: f64 = 0.9;

/// Log-normal distribution parameters fitted to a [`ScoreCalibration`].
///
/// The parameters depend only on the calibration pair, so they can be derived once and
/// reused for any number of measurements.
#[derive(Debug, Clone)]
pub struct LogNormalParams {
    location: f64,
    scale: f64,
    distribution: LogNormal,
}

impl LogNormalParams {
    /// Fit the distribution so that its median is `calibration.median()` and its survival
    /// function at `calibration.podr()` equals [`GOOD_SCORE_PROBABILITY`].
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution cannot be constructed.
    pub fn new(calibration: &ScoreCalibration) -> Result<Self> {
        let standard_normal = Normal::new(0.0, 1.0).into_app_err("creating standard normal distribution")?;
        let z = standard_normal.inverse_cdf(GOOD_SCORE_PROBABILITY);

        let location = calibration.median().ln();
        let scale = (location - calibration.podr().ln()) / z;

        let distribution = LogNormal::new(location, scale)
            .into_app_err_with(|| format!("creating log-normal distribution (location={location}, scale={scale})"))?;

        Ok(Self {
            location,
            scale,
            distribution,
        })
    }

    /// Natural log of the calibration median.
    #[must_use]
    pub const fn location(&self) -> f64 {
        self.location
    }

    /// Standard deviation of the underlying normal distribution.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }
}

/// Compute the score of a measured value: the upper-tail probability `1 - CDF(value)`,
/// clamped to `[0, 1]`.
///
/// Values at or below zero score 1. NaN is treated as the worst possible measurement and
/// scores 0. This function never fails.
#[must_use]
pub fn compute_log_normal_score(value: f64, params: &LogNormalParams) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    if value <= 0.0 {
        return 1.0;
    }

    if value.is_infinite() {
        return 0.0;
    }

    params.distribution.sf(value).clamp(0.0, 1.0)
}

/// Validate a calibration pair and score a value against it in one step.
///
/// # Errors
///
/// Returns an error if `podr` and `median` do not form a valid [`ScoreCalibration`].
pub fn log_normal_score(value: f64, podr: f64, median: f64) -> Result<f64> {
    let calibration = ScoreCalibration::new(podr, median)?;
    let params = LogNormalParams::new(&calibration)?;
    Ok(compute_log_normal_score(value, &params))
}

/// Clamp a score to `[0, 1]` and round it to two decimals, the precision at which scores
/// are reported.
#[must_use]
pub fn normalize_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }

    (score.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn params(podr: f64, median: f64) -> LogNormalParams {
        LogNormalParams::new(&ScoreCalibration::new(podr, median).unwrap()).unwrap()
    }

    #[test]
    fn test_median_scores_one_half() {
        let p = params(0.1, 0.5);
        assert!((compute_log_normal_score(0.5, &p) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_podr_scores_good_probability() {
        let p = params(0.1, 0.5);
        assert!((compute_log_normal_score(0.1, &p) - GOOD_SCORE_PROBABILITY).abs() < 1e-6);
    }

    #[test]
    fn test_zero_scores_one() {
        let p = params(0.1, 0.5);
        assert!((compute_log_normal_score(0.0, &p) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_scores_one() {
        let p = params(0.1, 0.5);
        assert!((compute_log_normal_score(-3.0, &p) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_infinity_scores_zero() {
        let p = params(0.1, 0.5);
        assert!(compute_log_normal_score(f64::INFINITY, &p).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_scores_zero() {
        let p = params(0.1, 0.5);
        assert!(compute_log_normal_score(f64::NAN, &p).abs() < f64::EPSILON);
    }

    #[test]
    fn test_small_value_scores_near_one() {
        let p = params(0.1, 0.5);
        assert!(compute_log_normal_score(0.05, &p) > 0.9);
        assert!(compute_log_normal_score(0.001, &p) > 0.99);
    }

    #[test]
    fn test_large_value_scores_near_zero() {
        let p = params(0.1, 0.5);

        // scale = ln(5) / z(0.9) and ln(10) / scale is about 1.83 standard deviations
        let score = compute_log_normal_score(5.0, &p);
        assert!((0.03..0.04).contains(&score), "got {score}");

        assert!(compute_log_normal_score(50.0, &p) < 0.01);
    }

    #[test]
    fn test_params_location_and_scale() {
        let p = params(0.1, 0.5);
        assert!((p.location() - 0.5_f64.ln()).abs() < TOLERANCE);
        assert!((p.scale() - (5.0_f64.ln() / 1.281_551_565_544_600_4)).abs() < 1e-9);
    }

    #[test]
    fn test_log_normal_score_validates_calibration() {
        let _ = log_normal_score(0.2, 0.5, 0.1).unwrap_err();
        let _ = log_normal_score(0.2, 0.0, 0.5).unwrap_err();
        let _ = log_normal_score(0.2, -1.0, 0.5).unwrap_err();
    }

    #[test]
    fn test_log_normal_score_matches_params_path() {
        let direct = log_normal_score(0.25, 0.1, 0.5).unwrap();
        let via_params = compute_log_normal_score(0.25, &params(0.1, 0.5));
        assert_eq!(direct.to_bits(), via_params.to_bits());
    }

    #[test]
    fn test_normalize_score_rounds_to_two_decimals() {
        assert!((normalize_score(0.904_9) - 0.9).abs() < f64::EPSILON);
        assert!((normalize_score(0.905_1) - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn test_normalize_score_clamps() {
        assert!((normalize_score(1.5) - 1.0).abs() < f64::EPSILON);
        assert!(normalize_score(-0.5).abs() < f64::EPSILON);
        assert!(normalize_score(f64::NAN).abs() < f64::EPSILON);
    }

    fn calibration_strategy() -> impl Strategy<Value = (f64, f64)> {
        (1e-3_f64..1e3, 1.01_f64..100.0).prop_map(|(podr, ratio)| (podr, podr * ratio))
    }

    proptest! {
        #[test]
        fn prop_median_scores_one_half((podr, median) in calibration_strategy()) {
            let score = log_normal_score(median, podr, median).unwrap();
            prop_assert!((score - 0.5).abs() < 1e-6);
        }

        #[test]
        fn prop_score_is_clamped((podr, median) in calibration_strategy(), value in 0.0_f64..1e6) {
            let score = log_normal_score(value, podr, median).unwrap();
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn prop_score_is_monotonically_non_increasing(
            (podr, median) in calibration_strategy(),
            a in 0.0_f64..1e4,
            b in 0.0_f64..1e4,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let p = params(podr, median);
            prop_assert!(compute_log_normal_score(low, &p) >= compute_log_normal_score(high, &p) - 1e-12);
        }

        #[test]
        fn prop_scoring_is_deterministic((podr, median) in calibration_strategy(), value in 0.0_f64..1e4) {
            let first = log_normal_score(value, podr, median).unwrap();
            let second = log_normal_score(value, podr, median).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }

        #[test]
        fn prop_values_near_zero_score_near_one((podr, median) in calibration_strategy()) {
            let score = log_normal_score(podr * 1e-6, podr, median).unwrap();
            prop_assert!(score > 0.99);
        }
    }
}
