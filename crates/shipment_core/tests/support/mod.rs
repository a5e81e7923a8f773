#![allow(dead_code)]

pub const SCENARIO_DRIVERS: [&str; 5] = [
    "Minnie Auer",
    "Sue Johns",
    "Darrel Moen",
    "Carrie Collier",
    "Pat White",
];

pub const SCENARIO_DESTINATIONS: [&str; 5] = [
    "23214 Batz Forest, Compton, FL 09954",
    "36768 Candida Ford Apt. 435, Pittsfield, WA 71375-3462",
    "7215 Flatley Glen, St. Joseph, MS 46635",
    "45262 Lang Forest Apt. 274, Broken Arrow, MN 92295",
    "6659 Rylee Estates Apt. 768, Mount Pleasant, WI 38130",
];

const FIRST_NAMES: [&str; 8] = [
    "Minnie", "Sue", "Darrel", "Carrie", "Pat", "Jo", "Bartholomew", "Ines",
];
const LAST_NAMES: [&str; 6] = ["Auer", "Johns", "Moen", "Collier", "White", "Oyelaran"];
const STREETS: [&str; 7] = [
    "Batz Forest",
    "Candida Ford",
    "False Portal Avenue",
    "East Paddington Highway",
    "Lucifer Lane",
    "Rylee Estates",
    "Fake St",
];

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Deterministic driver names of varied length.
pub fn drivers(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            format!(
                "{} {}",
                FIRST_NAMES[i % FIRST_NAMES.len()],
                LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()]
            )
        })
        .collect()
}

/// Deterministic addresses cycling through streets with and without units.
pub fn destinations(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let street = STREETS[i % STREETS.len()];
            if i % 2 == 0 {
                format!("{} {street}, Luna, NM 87120", 10 + i)
            } else {
                format!("{} {street} Apt. {}, Portland, OR 92123", 10 + i, i % 50)
            }
        })
        .collect()
}
