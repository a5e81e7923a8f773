//! Lexical and numeric primitives behind the suitability score.

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Number of vowels (`a e i o u`, any case) in `s`.
pub fn count_vowels(s: &str) -> usize {
    s.chars().filter(|&c| is_vowel(c)).count()
}

/// Number of ASCII consonant letters (any case) in `s`.
pub fn count_consonants(s: &str) -> usize {
    s.chars()
        .filter(|&c| c.is_ascii_alphabetic() && !is_vowel(c))
        .count()
}

/// All positive integers dividing both `a` and `b`, ascending.
///
/// Every integer divides zero, so `common_factors(0, n)` is the divisor list
/// of `n`; `common_factors(0, 0)` is empty.
pub fn common_factors(a: usize, b: usize) -> Vec<usize> {
    let limit = match (a, b) {
        (0, 0) => return Vec::new(),
        (0, n) | (n, 0) => n,
        (a, b) => a.min(b),
    };
    (1..=limit).filter(|f| a % f == 0 && b % f == 0).collect()
}

/// Whether `a` and `b` share a divisor other than 1.
pub fn shares_common_factor(a: usize, b: usize) -> bool {
    common_factors(a, b).len() > 1
}
