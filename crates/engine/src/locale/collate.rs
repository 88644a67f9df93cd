//! Multi-level text collation
//!
//! Strings are compared the way a dictionary orders them rather than by code
//! point: first by base letters (case and accents ignored), then by accents,
//! then by case with lowercase first. At the base level whitespace sorts
//! before punctuation, punctuation before symbols, symbols before digits and
//! digits before letters. Digits are compared one at a time, so `"10"` sorts
//! before `"9"`.
//!
//! This is the root collation order; no locale-specific tailorings are
//! applied.

use std::cmp::Ordering;

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

// Secondary weights, in root collation order.
const PLAIN: u8 = 0;
const ACUTE: u8 = 1;
const GRAVE: u8 = 2;
const BREVE: u8 = 3;
const CIRCUMFLEX: u8 = 4;
const CARON: u8 = 5;
const RING: u8 = 6;
const DIAERESIS: u8 = 7;
const DOUBLE_ACUTE: u8 = 8;
const TILDE: u8 = 9;
const DOT: u8 = 10;
const STROKE: u8 = 11;
const CEDILLA: u8 = 12;
const OGONEK: u8 = 13;
const MACRON: u8 = 14;
const LIGATURE: u8 = 15;

/// Lowercase accented letters mapped to their base letters and accent weight.
const FOLDS: &[(char, &str, u8)] = &[
    ('á', "a", ACUTE),
    ('à', "a", GRAVE),
    ('ă', "a", BREVE),
    ('â', "a", CIRCUMFLEX),
    ('å', "a", RING),
    ('ä', "a", DIAERESIS),
    ('ã', "a", TILDE),
    ('ą', "a", OGONEK),
    ('ā', "a", MACRON),
    ('æ', "ae", LIGATURE),
    ('ć', "c", ACUTE),
    ('ĉ', "c", CIRCUMFLEX),
    ('č', "c", CARON),
    ('ċ', "c", DOT),
    ('ç', "c", CEDILLA),
    ('ď', "d", CARON),
    ('đ', "d", STROKE),
    ('ð', "d", STROKE),
    ('é', "e", ACUTE),
    ('è', "e", GRAVE),
    ('ĕ', "e", BREVE),
    ('ê', "e", CIRCUMFLEX),
    ('ě', "e", CARON),
    ('ë', "e", DIAERESIS),
    ('ė', "e", DOT),
    ('ę', "e", OGONEK),
    ('ē', "e", MACRON),
    ('ğ', "g", BREVE),
    ('ĝ', "g", CIRCUMFLEX),
    ('ġ', "g", DOT),
    ('ģ', "g", CEDILLA),
    ('ĥ', "h", CIRCUMFLEX),
    ('ħ', "h", STROKE),
    ('í', "i", ACUTE),
    ('ì', "i", GRAVE),
    ('ĭ', "i", BREVE),
    ('î', "i", CIRCUMFLEX),
    ('ï', "i", DIAERESIS),
    ('ĩ', "i", TILDE),
    ('į', "i", OGONEK),
    ('ī', "i", MACRON),
    ('ĵ', "j", CIRCUMFLEX),
    ('ķ', "k", CEDILLA),
    ('ĺ', "l", ACUTE),
    ('ľ', "l", CARON),
    ('ł', "l", STROKE),
    ('ļ', "l", CEDILLA),
    ('ń', "n", ACUTE),
    ('ň', "n", CARON),
    ('ñ', "n", TILDE),
    ('ņ', "n", CEDILLA),
    ('ó', "o", ACUTE),
    ('ò', "o", GRAVE),
    ('ŏ', "o", BREVE),
    ('ô', "o", CIRCUMFLEX),
    ('ö', "o", DIAERESIS),
    ('ő', "o", DOUBLE_ACUTE),
    ('õ', "o", TILDE),
    ('ø', "o", STROKE),
    ('ō', "o", MACRON),
    ('œ', "oe", LIGATURE),
    ('ŕ', "r", ACUTE),
    ('ř', "r", CARON),
    ('ŗ', "r", CEDILLA),
    ('ś', "s", ACUTE),
    ('ŝ', "s", CIRCUMFLEX),
    ('š', "s", CARON),
    ('ş', "s", CEDILLA),
    ('ß', "ss", LIGATURE),
    ('ť', "t", CARON),
    ('ŧ', "t", STROKE),
    ('ţ', "t", CEDILLA),
    ('þ', "th", LIGATURE),
    ('ú', "u", ACUTE),
    ('ù', "u", GRAVE),
    ('ŭ', "u", BREVE),
    ('û', "u", CIRCUMFLEX),
    ('ů', "u", RING),
    ('ü', "u", DIAERESIS),
    ('ű', "u", DOUBLE_ACUTE),
    ('ũ', "u", TILDE),
    ('ų', "u", OGONEK),
    ('ū', "u", MACRON),
    ('ŵ', "w", CIRCUMFLEX),
    ('ý', "y", ACUTE),
    ('ŷ', "y", CIRCUMFLEX),
    ('ÿ', "y", DIAERESIS),
    ('ź', "z", ACUTE),
    ('ž', "z", CARON),
    ('ż', "z", DOT),
];

/// Base-level weight class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

/// Precomputed comparison key; ordering keys orders the source strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(Class, u32)>,
    secondary: Vec<u8>,
    tertiary: Vec<bool>,
}

/// Compares text in dictionary order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Collator;

#[allow(clippy::unused_self)]
impl Collator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.sort_key(a).cmp(&self.sort_key(b))
    }

    /// Build the key for a string.
    #[must_use]
    pub fn sort_key(&self, text: &str) -> CollationKey {
        let mut key = CollationKey {
            primary: Vec::with_capacity(text.len()),
            secondary: Vec::with_capacity(text.len()),
            tertiary: Vec::with_capacity(text.len()),
        };

        for ch in text.chars() {
            let upper = ch.is_uppercase();
            let lower = ch.to_lowercase().next().unwrap_or(ch);

            if let Some((_, base, accent)) = FOLDS.iter().find(|(c, _, _)| *c == lower) {
                for (i, base_char) in base.chars().enumerate() {
                    key.primary.push((Class::Letter, u32::from(base_char)));
                    key.secondary.push(if i == 0 { *accent } else { PLAIN });
                    key.tertiary.push(upper);
                }
                continue;
            }

            key.primary.push(primary_weight(lower));
            key.secondary.push(PLAIN);
            key.tertiary.push(upper);
        }

        key
    }
}

fn primary_weight(ch: char) -> (Class, u32) {
    if ch.is_whitespace() {
        return (Class::Whitespace, 0);
    }
    if let Some(position) = PUNCTUATION_ORDER.find(ch) {
        return (Class::Punctuation, position as u32);
    }
    if let Some(digit) = ch.to_digit(10) {
        return (Class::Digit, digit);
    }
    if ch.is_alphabetic() {
        return (Class::Letter, u32::from(ch));
    }
    if ch.is_numeric() {
        return (Class::Digit, u32::from(ch));
    }
    (Class::Symbol, u32::from(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let collator = Collator::new();
        let mut out: Vec<String> = words.iter().map(|s| s.to_string()).collect();
        out.sort_by(|a, b| collator.compare(a, b));
        out
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry", "apple"]),
            vec!["apple", "Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(
            sorted(&["resume", "résumé", "rester", "Resume"]),
            vec!["rester", "resume", "Resume", "résumé"]
        );
        assert_eq!(sorted(&["éclair", "ecrire"]), vec!["éclair", "ecrire"]);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(
            sorted(&["b", "2", "a b", "_x", "#1", "ab"]),
            vec!["_x", "#1", "2", "a b", "ab", "b"]
        );
        // Digit by digit, not numerically.
        assert_eq!(sorted(&["9", "10"]), vec!["10", "9"]);
    }

    #[test]
    fn test_expansions() {
        let collator = Collator::new();
        assert_eq!(collator.compare("Straße", "Strasse"), Ordering::Greater);
        assert_eq!(collator.compare("Straße", "Strasses"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        let collator = Collator::new();
        assert_eq!(collator.compare("same", "same"), Ordering::Equal);
        assert_eq!(collator.compare("", "a"), Ordering::Less);
    }
}
