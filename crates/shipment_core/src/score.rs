//! Suitability scoring for a single driver/destination pair.

use crate::address::{StreetNameParser, UsAddressParser};
use crate::error::AddressError;
use crate::rules::{count_consonants, count_vowels, shares_common_factor};

/// Weight applied to vowel counts and to pairs whose lengths share a factor.
const BONUS_MULTIPLIER: f64 = 1.5;

/// Trait for anything that can score how well a driver fits a destination.
///
/// Higher is better. The orchestrator negates scores when it builds a cost
/// matrix; implementations always return the positive suitability.
pub trait Scorer: Send + Sync {
    fn score(&self, driver: &str, destination: &str) -> Result<f64, AddressError>;
}

/// The character-counting heuristic:
///
/// 1. Even-length street name: vowels in the driver name times 1.5.
///    Odd-length street name: consonants in the driver name.
/// 2. Times 1.5 again when the driver name and street name lengths share a
///    factor other than 1.
#[derive(Debug, Default, Clone)]
pub struct SuitabilityScorer<P = UsAddressParser> {
    parser: P,
}

impl SuitabilityScorer<UsAddressParser> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: StreetNameParser> SuitabilityScorer<P> {
    /// Build a scorer around a specific street-name parser.
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: StreetNameParser> Scorer for SuitabilityScorer<P> {
    fn score(&self, driver: &str, destination: &str) -> Result<f64, AddressError> {
        let street_name = self.parser.street_name(destination)?;
        let name_len = street_name.chars().count();
        let driver_len = driver.chars().count();

        let base = if name_len % 2 == 0 {
            count_vowels(driver) as f64 * BONUS_MULTIPLIER
        } else {
            count_consonants(driver) as f64
        };

        if shares_common_factor(driver_len, name_len) {
            Ok(base * BONUS_MULTIPLIER)
        } else {
            Ok(base)
        }
    }
}

/// Score a pair with the default parser.
pub fn score(driver: &str, destination: &str) -> Result<f64, AddressError> {
    SuitabilityScorer::new().score(driver, destination)
}
