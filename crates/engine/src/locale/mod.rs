//! Locale data used to read numbers and order text
//!
//! A [`Locale`] resolves a BCP 47 style tag (`en`, `de-CH`, `fr_FR`) to the
//! symbols the locale uses when formatting numbers: the grouping separator,
//! the decimal separator and its ten digit glyphs. Tags are matched on the
//! full tag first, then on the language subtag; anything unknown falls back
//! to English. Text ordering does not depend on the locale; every table
//! uses the root [`Collator`].

mod collate;
mod number;

pub use collate::{CollationKey, Collator};
pub use number::NumberParser;

use std::fmt;

const LATN: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARAB: [char; 10] = [
    '\u{660}', '\u{661}', '\u{662}', '\u{663}', '\u{664}', '\u{665}', '\u{666}', '\u{667}',
    '\u{668}', '\u{669}',
];
const ARABEXT: [char; 10] = [
    '\u{6F0}', '\u{6F1}', '\u{6F2}', '\u{6F3}', '\u{6F4}', '\u{6F5}', '\u{6F6}', '\u{6F7}',
    '\u{6F8}', '\u{6F9}',
];
const BENG: [char; 10] = [
    '\u{9E6}', '\u{9E7}', '\u{9E8}', '\u{9E9}', '\u{9EA}', '\u{9EB}', '\u{9EC}', '\u{9ED}',
    '\u{9EE}', '\u{9EF}',
];
const DEVA: [char; 10] = [
    '\u{966}', '\u{967}', '\u{968}', '\u{969}', '\u{96A}', '\u{96B}', '\u{96C}', '\u{96D}',
    '\u{96E}', '\u{96F}',
];

const NBSP: char = '\u{A0}';
const NNBSP: char = '\u{202F}';

/// Number formatting symbols of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub group: char,
    pub decimal: char,
    pub numerals: [char; 10],
}

impl NumberSymbols {
    const fn new(group: char, decimal: char, numerals: [char; 10]) -> Self {
        Self {
            group,
            decimal,
            numerals,
        }
    }
}

const EN: NumberSymbols = NumberSymbols::new(',', '.', LATN);
const DOT_COMMA: NumberSymbols = NumberSymbols::new('.', ',', LATN);
const SPACE_COMMA: NumberSymbols = NumberSymbols::new(NBSP, ',', LATN);

// Separators and digits each locale uses to format 12345.6.
const LOCALES: &[(&str, NumberSymbols)] = &[
    ("en", EN),
    ("ja", EN),
    ("ko", EN),
    ("zh", EN),
    ("hi", EN),
    ("th", EN),
    ("he", EN),
    ("de", DOT_COMMA),
    ("de-at", SPACE_COMMA),
    ("de-ch", NumberSymbols::new('\u{2019}', '.', LATN)),
    ("es", DOT_COMMA),
    ("it", DOT_COMMA),
    ("nl", DOT_COMMA),
    ("pt", DOT_COMMA),
    ("pt-pt", SPACE_COMMA),
    ("tr", DOT_COMMA),
    ("id", DOT_COMMA),
    ("da", DOT_COMMA),
    ("el", DOT_COMMA),
    ("fr", NumberSymbols::new(NNBSP, ',', LATN)),
    ("fr-ch", NumberSymbols::new(NNBSP, '.', LATN)),
    ("ru", SPACE_COMMA),
    ("uk", SPACE_COMMA),
    ("pl", SPACE_COMMA),
    ("cs", SPACE_COMMA),
    ("sk", SPACE_COMMA),
    ("sv", SPACE_COMMA),
    ("fi", SPACE_COMMA),
    ("nb", SPACE_COMMA),
    ("no", SPACE_COMMA),
    ("ar", NumberSymbols::new('\u{66C}', '\u{66B}', ARAB)),
    ("fa", NumberSymbols::new('\u{66C}', '\u{66B}', ARABEXT)),
    ("bn", NumberSymbols::new(',', '.', BENG)),
    ("mr", NumberSymbols::new(',', '.', DEVA)),
    ("ne", NumberSymbols::new(',', '.', DEVA)),
];

/// A resolved locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    tag: String,
    symbols: NumberSymbols,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            tag: "en".to_string(),
            symbols: EN,
        }
    }
}

impl Locale {
    /// Resolve a locale tag. Unknown tags fall back to English.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();

        let found = LOCALES
            .iter()
            .find(|(known, _)| *known == normalized)
            .or_else(|| LOCALES.iter().find(|(known, _)| *known == language));

        match found {
            Some((_, symbols)) => Self {
                tag: normalized,
                symbols: *symbols,
            },
            None => {
                tracing::debug!("unknown locale '{}', falling back to 'en'", tag);
                Self::default()
            }
        }
    }

    /// The normalized tag (lowercase, `-` separated).
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn symbols(&self) -> &NumberSymbols {
        &self.symbols
    }

    /// Build the number parser for this locale.
    #[must_use]
    pub fn number_parser(&self) -> NumberParser {
        NumberParser::new(&self.symbols)
    }

}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_region_and_language() {
        assert_eq!(Locale::new("de_CH").symbols().group, '\u{2019}');
        assert_eq!(Locale::new("de-DE").symbols(), &DOT_COMMA);
        assert_eq!(Locale::new("de-DE").tag(), "de-de");
        assert_eq!(Locale::new("EN").symbols(), &EN);
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        let locale = Locale::new("xx-YY");
        assert_eq!(locale.tag(), "en");
        assert_eq!(locale.symbols(), &EN);
        assert_eq!(Locale::new("").tag(), "en");
    }

    #[test]
    fn test_non_latin_numerals() {
        assert_eq!(Locale::new("ar").symbols().numerals[7], '\u{667}');
        assert_eq!(Locale::new("fa-IR").symbols().numerals[0], '\u{6F0}');
    }
}
