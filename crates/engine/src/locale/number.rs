use super::NumberSymbols;

/// Parses numbers written in a locale's format.
///
/// The input is trimmed, every grouping separator is dropped, the first
/// decimal separator becomes `.`, and localized digits are mapped to ASCII.
/// What remains must be a whole numeric literal: decimal with an optional
/// sign and exponent, `Infinity`, or a `0x`/`0o`/`0b` integer. So `"1e3"`,
/// `"-Infinity"` and `"0x1f"` are numbers while `"12abc"` is not.
///
/// Parsing never fails; unparseable input yields `NaN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberParser {
    group: char,
    decimal: char,
    numerals: [char; 10],
}

impl NumberParser {
    #[must_use]
    pub fn new(symbols: &NumberSymbols) -> Self {
        Self {
            group: symbols.group,
            decimal: symbols.decimal,
            numerals: symbols.numerals,
        }
    }

    /// Parse localized text, returning `NaN` when it is not a number.
    #[must_use]
    pub fn parse(&self, input: &str) -> f64 {
        let mut normalized = String::with_capacity(input.len());
        let mut decimal_seen = false;

        for ch in input.trim().chars() {
            if ch == self.group {
                continue;
            }
            if ch == self.decimal && !decimal_seen {
                decimal_seen = true;
                normalized.push('.');
            } else if let Some(digit) = self.numerals.iter().position(|n| *n == ch) {
                normalized.push(char::from(b'0' + digit as u8));
            } else {
                normalized.push(ch);
            }
        }

        if normalized.is_empty() {
            return f64::NAN;
        }
        parse_literal(&normalized)
    }

    /// Whether the text reads as a number in this locale.
    #[must_use]
    pub fn is_number(&self, input: &str) -> bool {
        !self.parse(input).is_nan()
    }
}

/// Strict numeric literal conversion for already-normalized text.
fn parse_literal(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    // `f64::from_str` also takes "inf" and "nan", which are not numbers here.
    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned integer digits in `radix`, accumulated as `f64` so long inputs
/// lose precision instead of overflowing. Signs are not digits.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |value, c| {
            c.to_digit(radix)
                .map(|digit| value * f64::from(radix) + f64::from(digit))
        })
        .unwrap_or(f64::NAN)
}
