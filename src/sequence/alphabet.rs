//! The fixed character universe used by `.` and negated sets.

use once_cell::sync::Lazy;

static ALPHABET: Lazy<Vec<char>> = Lazy::new(|| {
    ('A'..='Z')
        .chain('a'..='z')
        .chain('0'..='9')
        .collect()
});

/// Uppercase letters, then lowercase letters, then digits.
pub fn alphabet() -> &'static [char] {
    &ALPHABET
}

/// The alphabet minus `excluded`, in alphabet order.
pub fn without(excluded: &[char]) -> Vec<char> {
    ALPHABET
        .iter()
        .copied()
        .filter(|c| !excluded.contains(c))
        .collect()
}

pub fn is_alphabet(chars: &[char]) -> bool {
    chars == alphabet()
}
