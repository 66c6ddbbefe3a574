//! English/Malay text pairs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lang {
    En,
    Ms,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::En, Self::Ms];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ms => "ms",
        }
    }

    /// Short tag shown next to localized inputs, e.g. `EN`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Ms => "MS",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ms => "Bahasa Malaysia",
        }
    }
}

/// A required English/Malay pair. Missing members deserialize as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Localized {
    pub en: String,
    pub ms: String,
}

impl Localized {
    #[must_use]
    pub fn new(en: impl Into<String>, ms: impl Into<String>) -> Self {
        Self { en: en.into(), ms: ms.into() }
    }

    #[must_use]
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ms => &self.ms,
        }
    }

    pub fn set(&mut self, lang: Lang, value: impl Into<String>) {
        match lang {
            Lang::En => self.en = value.into(),
            Lang::Ms => self.ms = value.into(),
        }
    }

    /// Both languages have non-blank text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.ms.trim().is_empty()
    }

    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.en.trim(), self.ms.trim())
    }
}

/// An optional English/Malay pair as used by site settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ms: Option<String>,
}

impl LocalizedValue {
    #[must_use]
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => self.en.as_deref().unwrap_or_default(),
            Lang::Ms => self.ms.as_deref().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, lang: Lang, value: impl Into<String>) {
        match lang {
            Lang::En => self.en = Some(value.into()),
            Lang::Ms => self.ms = Some(value.into()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.en.as_deref().is_none_or(str::is_empty) && self.ms.as_deref().is_none_or(str::is_empty)
    }
}

impl From<&LocalizedValue> for Localized {
    fn from(value: &LocalizedValue) -> Self {
        Self::new(value.en.clone().unwrap_or_default(), value.ms.clone().unwrap_or_default())
    }
}

impl From<Localized> for LocalizedValue {
    fn from(value: Localized) -> Self {
        Self { en: Some(value.en), ms: Some(value.ms) }
    }
}
