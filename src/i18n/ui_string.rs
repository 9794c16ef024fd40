/// A localizable message: its catalog key and its English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UiString {
    pub key: &'static str,
    pub message: &'static str,
}

impl UiString {
    #[must_use]
    pub const fn new(key: &'static str, message: &'static str) -> Self {
        Self { key, message }
    }
}
