use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (browsers and OS settings disagree on `pt_BR` vs `pt-BR`).
/// - Trims whitespace and lowercases.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-").to_ascii_lowercase()
}

/// A supported site language.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Locale {
    /// Portuguese; the default when nothing else is known.
    #[default]
    Pt,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Storage/wire tag: `"pt"` or `"en"`.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// Recognize a tag, ignoring case, separators and region subtags.
    ///
    /// `pt`, `PT`, `pt-BR` and `pt_PT` all map to [`Locale::Pt`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        let norm = normalize_locale(tag);
        match norm.split('-').next() {
            Some("pt") => Some(Locale::Pt),
            Some("en") => Some(Locale::En),
            _ => None,
        }
    }

    /// The opposite locale.
    ///
    /// Only meaningful while exactly two locales are supported; adding a
    /// third requires callers to pick an explicit target instead.
    pub fn other(self) -> Self {
        match self {
            Locale::Pt => Locale::En,
            Locale::En => Locale::Pt,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale `{0}` (expected `pt` or `en`)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_tag(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
