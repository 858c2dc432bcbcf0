#![allow(dead_code)]

use num_bigint::BigUint;
use rexplode::{Sequence, compile};

/// Patterns small enough to enumerate exhaustively, covering every construct.
pub const PATTERNS: &[&str] = &[
    "a",
    "a|b",
    "ab",
    "[ab]{2}",
    "a?",
    "a*",
    "",
    "()",
    "(a|b)c?",
    "[x-z]{1,2}|q+",
    "(ab|[xy]{0,2})c?",
    "a|a|a",
    "[^A-Za-x0-9]{2,3}",
    r"\.\*(0|1){1,}",
    "(()|a){2}",
];

pub fn build(pattern: &str, max_repeat: u32) -> Sequence {
    compile(pattern, max_repeat).unwrap_or_else(|e| panic!("{pattern:?}: {e}"))
}

/// Every produced string from a fresh sequence.
pub fn enumerate(pattern: &str, max_repeat: u32) -> Vec<String> {
    build(pattern, max_repeat).values().collect()
}

pub fn count_of(sequence: &Sequence) -> usize {
    let count: &BigUint = sequence.count();
    usize::try_from(count).unwrap_or_else(|_| panic!("count {count} too large to enumerate"))
}
