use super::{Locale, UiString};
use core::fmt::Debug;

/// Resolves localizable messages for one locale.
pub trait StringResolver: Send + Sync + Debug {
    /// The locale this resolver produces text for.
    fn locale(&self) -> Locale;

    /// Look up the text for a message, falling back to its English text.
    fn resolve(&self, message: &UiString) -> String;
}
