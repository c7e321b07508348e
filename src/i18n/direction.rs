// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Language subtags rendered right-to-left. Regional variants (e.g.
/// `ur-PK`) inherit the direction of their language subtag.
const RTL_LANGUAGES: [&str; 4] = ["ar", "fa", "he", "ur"];

/// Text direction derived from a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Derive the direction for `locale` from the fixed RTL set.
    pub fn of(locale: &LanguageIdentifier) -> Self {
        if RTL_LANGUAGES.contains(&locale.language.as_str()) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    /// The value used for the document's `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
