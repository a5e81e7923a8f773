//! Synthetic driver names and US-style destination addresses.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Minnie", "Sue", "Darrel", "Carrie", "Pat", "Adela", "Bertram", "Celestine", "Dominic",
    "Eulah", "Fletcher", "Gaylord", "Hermina", "Ignacio", "Josefa", "Kurtis", "Lavonne",
    "Marquis", "Nadia", "Orville", "Pearlie", "Quinton", "Rosalind", "Sterling", "Trudie",
    "Ulises", "Verla", "Wilburn", "Yesenia", "Zane",
];

const LAST_NAMES: &[&str] = &[
    "Auer", "Johns", "Moen", "Collier", "White", "Abernathy", "Bashirian", "Corkery", "Dach",
    "Ernser", "Funk", "Gleichner", "Hackett", "Ilies", "Jast", "Kuhlman", "Lang", "Mraz",
    "Nolan", "Okuneva", "Pouros", "Quigley", "Runolfsdottir", "Schmeler", "Toy", "Upton",
    "Volkman", "Wehner", "Yost", "Zboncak",
];

const STREET_SUFFIXES: &[&str] = &[
    "Avenue", "Brook", "Camp", "Circle", "Court", "Crossing", "Drive", "Estates", "Ford",
    "Forest", "Glen", "Harbor", "Highway", "Lane", "Loop", "Mall", "Park", "Ridge", "Road",
    "Square", "Street", "Terrace", "Trail", "Way",
];

const CITIES: &[&str] = &[
    "Compton", "Pittsfield", "St. Joseph", "Broken Arrow", "Mount Pleasant", "Portland",
    "Luna", "Springfield", "Fairview", "Riverside",
];

const STATES: &[&str] = &[
    "AK", "AL", "AZ", "CA", "CO", "FL", "GA", "IL", "MN", "MS", "NM", "NY", "OR", "TX", "WA",
    "WI",
];

/// Seeded generator for driver and destination lists.
pub struct DataGenerator {
    rng: StdRng,
}

impl DataGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items.choose(&mut self.rng).copied().unwrap_or_default()
    }

    pub fn driver_name(&mut self) -> String {
        format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES))
    }

    /// `"<number> <name> <suffix>[ Apt. <n>], <city>, <state> <zip>"`.
    pub fn destination(&mut self) -> String {
        let number: u32 = self.rng.gen_range(1..99_999);
        let name = if self.rng.gen_bool(0.5) {
            self.pick(LAST_NAMES)
        } else {
            self.pick(FIRST_NAMES)
        };
        let suffix = self.pick(STREET_SUFFIXES);
        let unit = if self.rng.gen_bool(0.4) {
            format!(" Apt. {}", self.rng.gen_range(1..1_000))
        } else {
            String::new()
        };
        let city = self.pick(CITIES);
        let state = self.pick(STATES);
        let zip: u32 = self.rng.gen_range(0..100_000);
        format!("{number} {name} {suffix}{unit}, {city}, {state} {zip:05}")
    }

    pub fn drivers(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.driver_name()).collect()
    }

    pub fn destinations(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.destination()).collect()
    }
}
