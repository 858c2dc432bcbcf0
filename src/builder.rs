//! Maps grammar productions onto sequence combinators.

use std::collections::HashSet;

use crate::grammar::{self, PatternParseError, SetItem, Transformer};
use crate::sequence::{
    AtomSequence, ProductSequence, RepeatSequence, Sequence, SequenceError, UnionSequence,
};

/// Default ceiling substituted for the unbounded end of `*`, `+` and `{m,}`.
pub const DEFAULT_MAX_REPEAT: u32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("pattern parse error: {0}")]
    Parse(#[from] PatternParseError),
    #[error("pattern construction error: {0}")]
    Sequence(#[from] SequenceError),
}

/// Builds a `Sequence` from the grammar's bottom-up walk.
///
/// The only state is the expansion ceiling applied to unbounded repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternBuilder {
    max_repeat: u32,
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPEAT)
    }
}

impl PatternBuilder {
    pub fn new(max_repeat: u32) -> Self {
        Self { max_repeat }
    }

    pub fn max_repeat(&self) -> u32 {
        self.max_repeat
    }

    /// Parse `pattern` and assemble its root sequence.
    pub fn build(&mut self, pattern: &str) -> Result<Sequence, CompileError> {
        let node = grammar::parse(pattern)?;
        let sequence = grammar::transform(&node, self)?;
        tracing::debug!(
            pattern,
            max_repeat = self.max_repeat,
            count = %sequence.count(),
            "compiled pattern"
        );
        Ok(sequence)
    }

    /// Upper bound for an open-ended repetition starting at `min`.
    fn ceiling(&self, min: u32) -> u32 {
        self.max_repeat.max(min)
    }
}

/// Compile `pattern` with the given expansion ceiling.
pub fn compile(pattern: &str, max_repeat: u32) -> Result<Sequence, CompileError> {
    PatternBuilder::new(max_repeat).build(pattern)
}

/// Members of a bracket set in listed order, ranges expanded ascending,
/// keeping only the first occurrence of each character.
fn expand(items: &[SetItem]) -> Vec<char> {
    let mut seen = HashSet::new();
    let mut chars = Vec::new();
    for item in items {
        let members = match *item {
            SetItem::Char(c) => c..=c,
            SetItem::Range(start, end) => start..=end,
        };
        chars.extend(members.filter(|c| seen.insert(*c)));
    }
    chars
}

impl Transformer for PatternBuilder {
    type Output = Sequence;
    type Error = SequenceError;

    fn literal(&mut self, c: char) -> Result<Sequence, SequenceError> {
        Ok(AtomSequence::literal(c).into())
    }

    fn any(&mut self) -> Result<Sequence, SequenceError> {
        Ok(AtomSequence::any().into())
    }

    fn set(&mut self, items: &[SetItem]) -> Result<Sequence, SequenceError> {
        Ok(AtomSequence::new(expand(items))?.into())
    }

    fn negated_set(&mut self, items: &[SetItem]) -> Result<Sequence, SequenceError> {
        Ok(AtomSequence::negated(&expand(items))?.into())
    }

    fn concat(&mut self, mut parts: Vec<Sequence>) -> Result<Sequence, SequenceError> {
        if parts.len() == 1 {
            return Ok(parts.remove(0));
        }
        Ok(ProductSequence::new(parts).into())
    }

    fn alternation(&mut self, branches: Vec<Sequence>) -> Result<Sequence, SequenceError> {
        Ok(UnionSequence::new(branches)?.into())
    }

    fn optional(&mut self, item: Sequence) -> Result<Sequence, SequenceError> {
        Ok(RepeatSequence::new(item, 0, 1)?.into())
    }

    fn zero_or_more(&mut self, item: Sequence) -> Result<Sequence, SequenceError> {
        Ok(RepeatSequence::new(item, 0, self.ceiling(0))?.into())
    }

    fn one_or_more(&mut self, item: Sequence) -> Result<Sequence, SequenceError> {
        Ok(RepeatSequence::new(item, 1, self.ceiling(1))?.into())
    }

    fn exactly(&mut self, item: Sequence, m: u32) -> Result<Sequence, SequenceError> {
        Ok(RepeatSequence::new(item, m, m)?.into())
    }

    fn at_least(&mut self, item: Sequence, m: u32) -> Result<Sequence, SequenceError> {
        Ok(RepeatSequence::new(item, m, self.ceiling(m))?.into())
    }

    fn between(&mut self, item: Sequence, m: u32, n: u32) -> Result<Sequence, SequenceError> {
        Ok(RepeatSequence::new(item, m, n)?.into())
    }
}
