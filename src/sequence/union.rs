use num_bigint::BigUint;

use super::{Sequence, SequenceError};

/// Alternation: every branch is enumerated fully, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionSequence {
    branches: Vec<Sequence>,
    active: usize,
    count: BigUint,
}

impl UnionSequence {
    pub fn new(branches: Vec<Sequence>) -> Result<Self, SequenceError> {
        if branches.is_empty() {
            return Err(SequenceError::EmptyUnion);
        }
        let count = branches.iter().map(Sequence::count).sum();
        Ok(Self {
            branches,
            active: 0,
            count,
        })
    }

    pub fn branches(&self) -> &[Sequence] {
        &self.branches
    }

    pub fn produce(&mut self) -> Option<String> {
        while let Some(branch) = self.branches.get_mut(self.active) {
            if let Some(value) = branch.produce() {
                return Some(value);
            }
            self.active += 1;
        }
        None
    }

    pub fn reset(&mut self) {
        for branch in &mut self.branches {
            branch.reset();
        }
        self.active = 0;
    }

    pub fn count(&self) -> &BigUint {
        &self.count
    }

    pub(crate) fn get(&self, n: &BigUint) -> Option<String> {
        let mut rest = n.clone();
        for branch in &self.branches {
            if &rest < branch.count() {
                return branch.get(&rest);
            }
            rest -= branch.count();
        }
        None
    }

    pub fn to_pattern(&self) -> String {
        let branches: Vec<String> = self.branches.iter().map(Sequence::to_pattern).collect();
        format!("({})", branches.join("|"))
    }
}
