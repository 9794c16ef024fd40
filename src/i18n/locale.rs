use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Maximum number of fraction digits shown when formatting numbers.
const MAX_FRACTION_DIGITS: usize = 3;

/// Locales supported for display text and number formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, Display, EnumString, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[strum(serialize = "en-US")]
    #[serde(rename = "en-US")]
    EnUs,

    #[strum(serialize = "en-GB")]
    #[serde(rename = "en-GB")]
    EnGb,

    #[strum(serialize = "de-DE")]
    #[serde(rename = "de-DE")]
    DeDe,

    #[strum(serialize = "fr-FR")]
    #[serde(rename = "fr-FR")]
    FrFr,

    #[strum(serialize = "es-ES")]
    #[serde(rename = "es-ES")]
    EsEs,

    #[strum(serialize = "ja-JP")]
    #[serde(rename = "ja-JP")]
    JaJp,
}

impl Locale {
    const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnGb | Self::JaJp => '.',
            Self::DeDe | Self::FrFr | Self::EsEs => ',',
        }
    }

    const fn grouping_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnGb | Self::JaJp => ',',
            Self::DeDe | Self::EsEs => '.',
            Self::FrFr => '\u{202f}',
        }
    }

    /// Spanish only groups integers of five or more digits.
    const fn min_grouping_digits(self) -> usize {
        match self {
            Self::EsEs => 5,
            _ => 4,
        }
    }

    /// Format a number with at most three fraction digits, trailing zeros trimmed, using
    /// this locale's separators.
    #[must_use]
    pub fn format_number(self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        if value.is_infinite() {
            return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
        }

        let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
        let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let fraction = fraction.trim_end_matches('0');

        let mut out = String::with_capacity(fixed.len() + 4);
        if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
            out.push('-');
        }

        self.push_grouped(&mut out, integer);

        if !fraction.is_empty() {
            out.push(self.decimal_separator());
            out.push_str(fraction);
        }

        out
    }

    fn push_grouped(self, out: &mut String, digits: &str) {
        let len = digits.chars().count();
        if len < self.min_grouping_digits() {
            out.push_str(digits);
            return;
        }

        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (len - index) % 3 == 0 {
                out.push(self.grouping_separator());
            }
            out.push(digit);
        }
    }
}
