//! Localized strings and number formatting
//!
//! Audits never embed display text directly. They declare [`UiString`]s (a
//! lookup key plus the English message) and resolve them through an injected
//! [`StringResolver`] when their metadata is built. Display values are
//! formatted with [`Locale::format_number`] for the run's locale.
//!
//! [`LocaleStrings`] is the stock resolver: a [`Locale`] plus an optional
//! message catalog loaded from JSON. Keys missing from the catalog fall back to
//! the English message.

mod locale;
mod locale_strings;
mod resolver;
mod ui_string;

pub use locale::Locale;
pub use locale_strings::LocaleStrings;
pub use resolver::StringResolver;
pub use ui_string::UiString;
