//! Pattern grammar: lexing, parsing into a `Node` tree, and the bottom-up
//! `Transformer` walk that hands each production to a callback.

mod error;
pub mod lexer;
pub mod parser;
pub mod transform;

pub use error::*;
pub use parser::parse;
pub use transform::{Transformer, transform};

/// A member of a bracket set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetItem {
    /// A single character (e.g. `a`, `\]`)
    Char(char),
    /// An inclusive range (e.g. `a-z`)
    Range(char, char),
}

/// Repetition suffix of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `?`
    Optional,
    /// `*`
    ZeroOrMore,
    /// `+`
    OneOrMore,
    /// `{m}`
    Exactly(u32),
    /// `{m,}`
    AtLeast(u32),
    /// `{m,n}`
    Between(u32, u32),
}

/// Parsed pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal or escaped character
    Literal(char),
    /// `.`
    Any,
    /// `[...]`
    Set(Vec<SetItem>),
    /// `[^...]`
    NegatedSet(Vec<SetItem>),
    /// Pieces in left-to-right order; empty for `()` and the empty pattern
    Concat(Vec<Node>),
    /// `a|b|...`, at least two non-empty alternatives
    Alternation(Vec<Node>),
    /// `( ... )`
    Group(Box<Node>),
    /// A piece followed by a quantifier
    Repeat(Box<Node>, Quantifier),
}
