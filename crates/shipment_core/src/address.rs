//! Street-name extraction from free-form postal addresses.
//!
//! Only the first comma-separated segment of an address is considered: it
//! holds the house number, the street name and its road-type suffix, and an
//! optional unit designator. Locality, state and zip live in later segments
//! and are ignored.

mod vocabulary;

use serde_json::Value;

use crate::error::AddressError;

use vocabulary::{is_directional, is_road_suffix, is_unit_designator};

/// Something that can pull the street name out of an address.
///
/// The scorer takes its parser as a dependency so tests can substitute one
/// that always fails, or one tuned for a different address format.
pub trait StreetNameParser: Send + Sync {
    fn street_name(&self, address: &str) -> Result<String, AddressError>;
}

/// Parser for US-style addresses such as `"123 Lucifer Lane, Portland, OR 92123"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UsAddressParser;

impl StreetNameParser for UsAddressParser {
    fn street_name(&self, address: &str) -> Result<String, AddressError> {
        let street_line = address.split(',').next().unwrap_or_default();
        let tokens: Vec<&str> = street_line
            .split_whitespace()
            .filter(|token| !normalize(token).is_empty())
            .collect();

        let mut rest = tokens.as_slice();
        if let [first, tail @ ..] = rest {
            if is_house_number(first) {
                rest = tail;
            }
        }
        if let [first, next, ..] = rest {
            if is_directional(&normalize(first)) && is_name_word(next) {
                rest = &rest[1..];
            }
        }

        // A unit designator ends the street part unless it opens the name
        // ("77 Lot Ave"); a `#` unit always does.
        let end = rest
            .iter()
            .enumerate()
            .position(|(index, token)| is_unit_boundary(token, index))
            .unwrap_or(rest.len());
        let mut street = &rest[..end];
        while let [head @ .., last] = street {
            if head.is_empty() || !is_directional(&normalize(last)) {
                break;
            }
            street = head;
        }

        // The road type is the last suffix word, so "Old Mill Rd" keeps "Mill".
        let Some((_, tail)) = street.split_first() else {
            return Err(AddressError::StreetNameNotFound);
        };
        let name = match tail.iter().rposition(|token| is_road_suffix(&normalize(token))) {
            Some(suffix) => &street[..=suffix],
            None => street,
        };

        let words: Vec<&str> = name.iter().map(|token| strip_punctuation(token)).collect();
        Ok(words.join(" "))
    }
}

/// Extract the street name with the default [`UsAddressParser`].
pub fn street_name(address: &str) -> Result<String, AddressError> {
    UsAddressParser.street_name(address)
}

/// Extract the street name from an untyped JSON value.
///
/// This is the entry point for data that arrives without static typing (for
/// example a decoded request body). Anything but a JSON string fails with
/// [`AddressError::Type`] carrying the value's JSON serialization.
pub fn street_name_from_value(value: &Value) -> Result<String, AddressError> {
    match value {
        Value::String(address) => street_name(address),
        other => Err(AddressError::Type {
            value: other.to_string(),
            expected: "string",
        }),
    }
}

fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn normalize(token: &str) -> String {
    strip_punctuation(token).to_lowercase()
}

fn is_house_number(token: &str) -> bool {
    let word = normalize(token);
    word.starts_with(|c: char| c.is_ascii_digit()) && !is_ordinal(&word)
}

/// `5th`, `21st`, `102nd`: numbered streets rather than house numbers.
fn is_ordinal(word: &str) -> bool {
    ["st", "nd", "rd", "th"].iter().any(|suffix| {
        word.strip_suffix(suffix)
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
    })
}

fn is_unit_boundary(token: &str, index: usize) -> bool {
    token.starts_with('#') || (index > 0 && is_unit_designator(&normalize(token)))
}

/// A word that can open a street name, so a directional in front of it is a qualifier.
fn is_name_word(token: &str) -> bool {
    !token.starts_with('#') && !is_road_suffix(&normalize(token))
}
