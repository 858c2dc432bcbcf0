use std::io::Write;

use num_bigint::BigInt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{Driver, DriverError};
use crate::sequence::Sequence;

/// `rexplode all`: every string in enumeration order, optionally truncated.
pub struct AllDriver {
    pattern: String,
    limit: Option<usize>,
}

impl AllDriver {
    pub fn new(pattern: impl Into<String>, limit: Option<usize>) -> Self {
        Self {
            pattern: pattern.into(),
            limit,
        }
    }
}

impl Driver for AllDriver {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn emit(&self, sequence: &mut Sequence, out: &mut dyn Write) -> Result<(), DriverError> {
        let limit = self.limit.unwrap_or(usize::MAX);
        for value in sequence.values().take(limit) {
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}

/// `rexplode count`
pub struct CountDriver {
    pattern: String,
}

impl CountDriver {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Driver for CountDriver {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn emit(&self, sequence: &mut Sequence, out: &mut dyn Write) -> Result<(), DriverError> {
        writeln!(out, "{}", sequence.count())?;
        Ok(())
    }
}

/// `rexplode random`: independent uniform draws, reproducible when seeded.
pub struct RandomDriver {
    pattern: String,
    samples: usize,
    seed: Option<u64>,
}

impl RandomDriver {
    pub fn new(pattern: impl Into<String>, samples: usize, seed: Option<u64>) -> Self {
        Self {
            pattern: pattern.into(),
            samples,
            seed,
        }
    }
}

impl Driver for RandomDriver {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn emit(&self, sequence: &mut Sequence, out: &mut dyn Write) -> Result<(), DriverError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        for _ in 0..self.samples {
            let value = sequence.sample(&mut rng)?;
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}

/// `rexplode index`: one line per requested position, stopping at the first
/// position outside the language.
pub struct IndexDriver {
    pattern: String,
    indices: Vec<BigInt>,
}

impl IndexDriver {
    pub fn new(pattern: impl Into<String>, indices: Vec<BigInt>) -> Self {
        Self {
            pattern: pattern.into(),
            indices,
        }
    }
}

impl Driver for IndexDriver {
    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn emit(&self, sequence: &mut Sequence, out: &mut dyn Write) -> Result<(), DriverError> {
        for index in &self.indices {
            let value = sequence.index(index.clone())?;
            writeln!(out, "{value}")?;
        }
        Ok(())
    }
}
