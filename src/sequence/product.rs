use num_bigint::BigUint;
use num_traits::Zero;

use super::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Start,
    Running,
    Exhausted,
}

/// Concatenation of an ordered list of parts, enumerated in odometer order:
/// the last part varies fastest and carries into its left neighbour.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSequence {
    parts: Vec<Sequence>,
    current: Vec<String>,
    cursor: Cursor,
    count: BigUint,
}

impl ProductSequence {
    /// A product with an empty part is an empty language, not an error.
    /// A product with no parts yields the empty string once.
    pub fn new(parts: Vec<Sequence>) -> Self {
        let count = parts.iter().map(Sequence::count).product();
        Self {
            parts,
            current: Vec::new(),
            cursor: Cursor::Start,
            count,
        }
    }

    pub fn parts(&self) -> &[Sequence] {
        &self.parts
    }

    pub fn produce(&mut self) -> Option<String> {
        match self.cursor {
            Cursor::Start => self.first(),
            Cursor::Running => self.advance(),
            Cursor::Exhausted => None,
        }
    }

    /// Pull one value from every part, left to right.
    fn first(&mut self) -> Option<String> {
        let mut current = Vec::with_capacity(self.parts.len());
        for part in &mut self.parts {
            match part.produce() {
                Some(value) => current.push(value),
                None => {
                    self.cursor = Cursor::Exhausted;
                    return None;
                }
            }
        }
        self.current = current;
        self.cursor = Cursor::Running;
        Some(self.current.concat())
    }

    /// Advance the rightmost part, carrying leftwards on exhaustion.
    fn advance(&mut self) -> Option<String> {
        for i in (0..self.parts.len()).rev() {
            let part = &mut self.parts[i];
            if let Some(value) = part.produce() {
                self.current[i] = value;
                return Some(self.current.concat());
            }
            part.reset();
            match part.produce() {
                Some(value) => self.current[i] = value,
                None => break,
            }
        }
        self.cursor = Cursor::Exhausted;
        None
    }

    pub fn reset(&mut self) {
        for part in &mut self.parts {
            part.reset();
        }
        self.current.clear();
        self.cursor = Cursor::Start;
    }

    pub fn count(&self) -> &BigUint {
        &self.count
    }

    /// Decode `n` as a mixed-radix number whose least significant digit
    /// belongs to the last part.
    pub(crate) fn get(&self, n: &BigUint) -> Option<String> {
        let mut rest = n.clone();
        let mut pieces = vec![String::new(); self.parts.len()];
        for (slot, part) in pieces.iter_mut().zip(&self.parts).rev() {
            let radix = part.count();
            if radix.is_zero() {
                return None;
            }
            let digit = &rest % radix;
            rest /= radix;
            *slot = part.get(&digit)?;
        }
        rest.is_zero().then(|| pieces.concat())
    }

    pub fn to_pattern(&self) -> String {
        if self.parts.is_empty() {
            return "()".to_string();
        }
        self.parts.iter().map(Sequence::to_pattern).collect()
    }
}
