//! The closed language set and per-language lookup tables.

use serde::{Deserialize, Serialize};

/// A language supported by the bot.
///
/// The set is closed: anything outside it collapses to [`Language::En`] at
/// every boundary (detector output, stored preference reads, UI lookups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic.
    Ar,
    /// French.
    Fr,
    /// English (the uniform fallback).
    #[default]
    En,
}

impl Language {
    /// All supported languages, in button-display order.
    pub const ALL: [Language; 3] = [Language::Ar, Language::Fr, Language::En];

    /// ISO 639-1 code, used for storage and callback payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::Fr => "fr",
            Self::En => "en",
        }
    }

    /// Parse an exact code from the closed set.
    ///
    /// This is the validation point for UI inputs (button payloads and
    /// commands): unknown codes are rejected here rather than collapsed.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Self::Ar),
            "fr" => Some(Self::Fr),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// Collapse an arbitrary detector code onto the closed set by prefix.
    ///
    /// `ar*` maps to Arabic, `fr*` to French, everything else to English.
    /// Works for both ISO 639-1 (`ar`) and 639-3 (`ara`) codes.
    pub fn collapse(code: &str) -> Self {
        if code.starts_with("ar") {
            Self::Ar
        } else if code.starts_with("fr") {
            Self::Fr
        } else {
            Self::En
        }
    }

    /// Native-script name, used for language-choice button labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ar => "🇦🇪 العربية",
            Self::Fr => "🇫🇷 Français",
            Self::En => "🇬🇧 English",
        }
    }
}

/// A per-language value table.
///
/// Every table carries a value for each member of the closed set, so lookups
/// can never miss; the English fallback for out-of-set inputs happens once,
/// in [`Language::collapse`], instead of at each lookup site.
#[derive(Debug, Clone, Copy)]
pub struct Localized<T> {
    ar: T,
    fr: T,
    en: T,
}

impl<T> Localized<T> {
    /// Create a table with one value per language.
    pub const fn new(ar: T, fr: T, en: T) -> Self {
        Self { ar, fr, en }
    }

    /// Look up the value for a language.
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::Ar => &self.ar,
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }
}
