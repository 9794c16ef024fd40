use crate::Result;
use ohno::bail;
use serde::{Deserialize, Serialize};

/// Two reference points on a metric's scale that calibrate its log-normal score curve.
///
/// Construction validates `0 < podr < median`, so every instance is usable by the
/// scorer. Deserialization goes through the same validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCalibration")]
pub struct ScoreCalibration {
    podr: f64,
    median: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCalibration {
    podr: f64,
    median: f64,
}

impl ScoreCalibration {
    /// Create a calibration from its point of diminishing returns and its median.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite, if `podr` is not positive, if
    /// `median` is not greater than `podr`, or if the two are indistinguishable on a log scale.
    pub fn new(podr: f64, median: f64) -> Result<Self> {
        if !podr.is_finite() || !median.is_finite() {
            bail!("calibration values must be finite, got podr={podr}, median={median}");
        }

        if podr <= 0.0 {
            bail!("calibration podr must be greater than 0, got {podr}");
        }

        if median <= podr {
            bail!("calibration median ({median}) must be greater than podr ({podr})");
        }

        // Adjacent floats pass the check above but leave no room between them on a log scale.
        let spread = median.ln() - podr.ln();
        if !spread.is_finite() || spread <= 0.0 {
            bail!("calibration median ({median}) and podr ({podr}) are too close to fit a score curve");
        }

        Ok(Self { podr, median })
    }

    /// The value that scores 0.9.
    #[must_use]
    pub const fn podr(&self) -> f64 {
        self.podr
    }

    /// The value that scores 0.5.
    #[must_use]
    pub const fn median(&self) -> f64 {
        self.median
    }
}

impl TryFrom<RawCalibration> for ScoreCalibration {
    type Error = ohno::AppError;

    fn try_from(raw: RawCalibration) -> Result<Self> {
        Self::new(raw.podr, raw.median)
    }
}
