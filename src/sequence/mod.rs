//! The enumeration algebra.
//!
//! Every sequence supports four operations that agree with each other:
//! sequential production, exact counting, direct indexing and reset. For any
//! sequence `s` and any `n < s.count()`, resetting and producing `n + 1` times
//! yields `s.index(n)`.

pub mod alphabet;
mod atom;
mod error;
mod product;
mod repeat;
mod union;

pub use atom::AtomSequence;
pub use error::*;
pub use product::ProductSequence;
pub use repeat::RepeatSequence;
pub use union::UnionSequence;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::Zero;
use rand::Rng;

/// One of the four concrete sequence kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Sequence {
    Atom(AtomSequence),
    Product(ProductSequence),
    Repeat(RepeatSequence),
    Union(UnionSequence),
}

impl Sequence {
    /// Next string in enumeration order, or `None` once exhausted.
    /// Exhaustion persists until `reset`.
    pub fn produce(&mut self) -> Option<String> {
        match self {
            Sequence::Atom(s) => s.produce(),
            Sequence::Product(s) => s.produce(),
            Sequence::Repeat(s) => s.produce(),
            Sequence::Union(s) => s.produce(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Sequence::Atom(s) => s.reset(),
            Sequence::Product(s) => s.reset(),
            Sequence::Repeat(s) => s.reset(),
            Sequence::Union(s) => s.reset(),
        }
    }

    /// Number of positions in the enumeration. Equal strings reached through
    /// different choices are counted separately.
    pub fn count(&self) -> &BigUint {
        match self {
            Sequence::Atom(s) => s.count(),
            Sequence::Product(s) => s.count(),
            Sequence::Repeat(s) => s.count(),
            Sequence::Union(s) => s.count(),
        }
    }

    /// The string at position `n`, without producing the positions before it.
    pub fn index(&self, n: impl Into<BigInt>) -> Result<String, SequenceError> {
        let index = n.into();
        let position = match index.to_biguint() {
            Some(position) if &position < self.count() => position,
            _ => return Err(self.out_of_range(index)),
        };
        match self.get(&position) {
            Some(value) => Ok(value),
            None => Err(self.out_of_range(index)),
        }
    }

    /// A uniformly chosen position, looked up with `index`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, SequenceError> {
        let count = self.count();
        if count.is_zero() {
            return Err(SequenceError::EmptyLanguage);
        }
        let position = rng.gen_biguint_below(count);
        self.index(position)
    }

    /// Pattern text that enumerates the same strings in the same order.
    pub fn to_pattern(&self) -> String {
        match self {
            Sequence::Atom(s) => s.to_pattern(),
            Sequence::Product(s) => s.to_pattern(),
            Sequence::Repeat(s) => s.to_pattern(),
            Sequence::Union(s) => s.to_pattern(),
        }
    }

    /// Iterate from the current position until exhaustion.
    pub fn values(&mut self) -> Values<'_> {
        Values { sequence: self }
    }

    pub(crate) fn get(&self, n: &BigUint) -> Option<String> {
        match self {
            Sequence::Atom(s) => s.get(n),
            Sequence::Product(s) => s.get(n),
            Sequence::Repeat(s) => s.get(n),
            Sequence::Union(s) => s.get(n),
        }
    }

    /// An independent copy positioned at the start.
    pub(crate) fn fresh(&self) -> Sequence {
        let mut copy = self.clone();
        copy.reset();
        copy
    }

    fn out_of_range(&self, index: BigInt) -> SequenceError {
        SequenceError::IndexOutOfRange {
            index,
            count: self.count().clone(),
        }
    }
}

impl From<AtomSequence> for Sequence {
    fn from(s: AtomSequence) -> Self {
        Sequence::Atom(s)
    }
}

impl From<ProductSequence> for Sequence {
    fn from(s: ProductSequence) -> Self {
        Sequence::Product(s)
    }
}

impl From<RepeatSequence> for Sequence {
    fn from(s: RepeatSequence) -> Self {
        Sequence::Repeat(s)
    }
}

impl From<UnionSequence> for Sequence {
    fn from(s: UnionSequence) -> Self {
        Sequence::Union(s)
    }
}

/// Iterator over the remaining strings of a sequence.
pub struct Values<'a> {
    sequence: &'a mut Sequence,
}

impl Iterator for Values<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.sequence.produce()
    }
}
