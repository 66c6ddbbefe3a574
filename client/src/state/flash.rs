//! Inline success/error banner shown above a screen's content.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

impl Flash {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: FlashKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: FlashKind::Error, text: text.into() }
    }

    /// Banner modifier class.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "alert alert--success",
            FlashKind::Error => "alert alert--error",
        }
    }
}
