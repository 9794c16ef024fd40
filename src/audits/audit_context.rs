use crate::i18n::Locale;
use crate::scoring::ScoreCalibration;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The device class a page was loaded as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormFactor {
    #[default]
    Mobile,
    Desktop,
}

/// Run-scoped settings shared by every audit in a run.
///
/// Providers may depend on these, so they are part of the memoization key for
/// computed metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RunSettings {
    pub locale: Locale,
    pub form_factor: FormFactor,
}

/// Per-invocation configuration handed to an audit.
#[derive(Debug, Clone, Default)]
pub struct AuditContext {
    calibration: Option<ScoreCalibration>,
    settings: RunSettings,
}

impl AuditContext {
    #[must_use]
    pub const fn new(settings: RunSettings) -> Self {
        Self {
            calibration: None,
            settings,
        }
    }

    /// Score with `calibration` instead of the audit's default.
    #[must_use]
    pub const fn with_calibration(mut self, calibration: ScoreCalibration) -> Self {
        self.calibration = Some(calibration);
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RunSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The caller-supplied calibration, if any.
    #[must_use]
    pub const fn calibration(&self) -> Option<&ScoreCalibration> {
        self.calibration.as_ref()
    }

    #[must_use]
    pub const fn settings(&self) -> &RunSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_calibration() {
        let context = AuditContext::default();
        assert!(context.calibration().is_none());
        assert_eq!(context.settings().form_factor, FormFactor::Mobile);
        assert_eq!(context.settings().locale, Locale::EnUs);
    }

    #[test]
    fn test_with_calibration() {
        let calibration = ScoreCalibration::new(0.2, 0.4).unwrap();
        let context = AuditContext::default().with_calibration(calibration);
        assert_eq!(context.calibration(), Some(&calibration));
    }

    #[test]
    fn test_form_factor_names() {
        assert_eq!(FormFactor::Desktop.to_string(), "desktop");
        let parsed: FormFactor = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(parsed, FormFactor::Mobile);
    }
}
