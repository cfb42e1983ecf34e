use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Languages with both a frequency list and translation coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    German,
    French,
    Italian,
    Spanish,
    Portuguese,
    Dutch,
    Swedish,
    Danish,
    Norwegian,
    Finnish,
    Turkish,
    Arabic,
    Farsi,
    Hindi,
    Russian,
    Polish,
    Greek,
    Czech,
    Hungarian,
    Romanian,
}

impl Language {
    pub const ALL: [Language; 21] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Italian,
        Language::Spanish,
        Language::Portuguese,
        Language::Dutch,
        Language::Swedish,
        Language::Danish,
        Language::Norwegian,
        Language::Finnish,
        Language::Turkish,
        Language::Arabic,
        Language::Farsi,
        Language::Hindi,
        Language::Russian,
        Language::Polish,
        Language::Greek,
        Language::Czech,
        Language::Hungarian,
        Language::Romanian,
    ];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Italian => "it",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Swedish => "sv",
            Language::Danish => "da",
            Language::Norwegian => "no",
            Language::Finnish => "fi",
            Language::Turkish => "tr",
            Language::Arabic => "ar",
            Language::Farsi => "fa",
            Language::Hindi => "hi",
            Language::Russian => "ru",
            Language::Polish => "pl",
            Language::Greek => "el",
            Language::Czech => "cs",
            Language::Hungarian => "hu",
            Language::Romanian => "ro",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::French => "French",
            Language::Italian => "Italian",
            Language::Spanish => "Spanish",
            Language::Portuguese => "Portuguese",
            Language::Dutch => "Dutch",
            Language::Swedish => "Swedish",
            Language::Danish => "Danish",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Turkish => "Turkish",
            Language::Arabic => "Arabic",
            Language::Farsi => "Farsi (Persian)",
            Language::Hindi => "Hindi",
            Language::Russian => "Russian",
            Language::Polish => "Polish",
            Language::Greek => "Greek",
            Language::Czech => "Czech",
            Language::Hungarian => "Hungarian",
            Language::Romanian => "Romanian",
        }
    }
}

impl FromStr for Language {
    type Err = ConfigurationError;

    /// Accepts a code ("de") or an English name ("German"), case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();

        Language::ALL
            .into_iter()
            .find(|lang| {
                lang.code() == needle
                    || lang.name().to_lowercase() == needle
                    || (*lang == Language::Farsi && needle == "persian")
            })
            .ok_or_else(|| ConfigurationError::UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
