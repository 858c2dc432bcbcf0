use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::{ProductSequence, Sequence, SequenceError};

#[derive(Debug, Clone, PartialEq)]
enum RepeatCursor {
    /// Nothing produced yet; the length-`min` product is built on demand.
    Start,
    /// Enumerating all strings of exactly `length` repetitions.
    Length {
        length: u32,
        inner: ProductSequence,
    },
    Exhausted,
}

/// Repetition of one item between `min` and `max` times inclusive.
///
/// Strings are ordered by length, then within a length by the odometer
/// order of that many copies of the item. Each copy is an independent
/// fresh binding of the item so that every position rolls over on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatSequence {
    item: Box<Sequence>,
    min: u32,
    max: u32,
    cursor: RepeatCursor,
    count: BigUint,
}

impl RepeatSequence {
    pub fn new(item: Sequence, min: u32, max: u32) -> Result<Self, SequenceError> {
        if max < min {
            return Err(SequenceError::InvalidRepeatRange { min, max });
        }
        let count = repeat_count(item.count(), min, max);
        let mut item = Box::new(item);
        item.reset();
        Ok(Self {
            item,
            min,
            max,
            cursor: RepeatCursor::Start,
            count,
        })
    }

    pub fn item(&self) -> &Sequence {
        &self.item
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }

    pub fn produce(&mut self) -> Option<String> {
        if matches!(self.cursor, RepeatCursor::Start) {
            self.cursor = RepeatCursor::Length {
                length: self.min,
                inner: copies(&self.item, self.min),
            };
        }
        loop {
            let finished = match &mut self.cursor {
                RepeatCursor::Start | RepeatCursor::Exhausted => return None,
                RepeatCursor::Length { length, inner } => match inner.produce() {
                    Some(value) => return Some(value),
                    None => *length,
                },
            };
            self.cursor = if finished >= self.max {
                RepeatCursor::Exhausted
            } else {
                RepeatCursor::Length {
                    length: finished + 1,
                    inner: copies(&self.item, finished + 1),
                }
            };
        }
    }

    pub fn reset(&mut self) {
        self.cursor = RepeatCursor::Start;
    }

    pub fn count(&self) -> &BigUint {
        &self.count
    }

    /// Skip whole length buckets, then decode the remainder as a
    /// `length`-digit number in base `item.count()`.
    pub(crate) fn get(&self, n: &BigUint) -> Option<String> {
        if n >= &self.count {
            return None;
        }
        let radix = self.item.count();
        let mut rest = n.clone();
        for length in self.min..=self.max {
            let bucket = radix.pow(length);
            if rest < bucket {
                return self.decode(length, rest);
            }
            rest -= bucket;
        }
        None
    }

    fn decode(&self, length: u32, mut rest: BigUint) -> Option<String> {
        let radix = self.item.count();
        let mut pieces = vec![String::new(); length as usize];
        for slot in pieces.iter_mut().rev() {
            let digit = &rest % radix;
            rest /= radix;
            *slot = self.item.get(&digit)?;
        }
        Some(pieces.concat())
    }

    pub fn to_pattern(&self) -> String {
        let item = match self.item.as_ref() {
            Sequence::Atom(atom) => atom.to_pattern(),
            Sequence::Union(union) => union.to_pattern(),
            other => format!("({})", other.to_pattern()),
        };
        let quantifier = match (self.min, self.max) {
            (0, 1) => "?".to_string(),
            (min, max) if min == max => format!("{{{min}}}"),
            (min, max) => format!("{{{min},{max}}}"),
        };
        format!("{item}{quantifier}")
    }
}

/// A product of `length` fresh copies of `item`.
fn copies(item: &Sequence, length: u32) -> ProductSequence {
    ProductSequence::new((0..length).map(|_| item.fresh()).collect())
}

/// `sum(radix^L for L in min..=max)`, in closed form.
fn repeat_count(radix: &BigUint, min: u32, max: u32) -> BigUint {
    if radix.is_zero() {
        return if min == 0 { BigUint::one() } else { BigUint::zero() };
    }
    if radix.is_one() {
        return BigUint::from(max - min) + 1u32;
    }
    // (r^(max+1) - r^min) / (r - 1)
    (radix.pow(max) * radix - radix.pow(min)) / (radix - 1u32)
}
