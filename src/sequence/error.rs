use num_bigint::{BigInt, BigUint};

#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("empty character set")]
    EmptyAtom,
    #[error("empty alternation")]
    EmptyUnion,
    #[error("invalid repetition range: max {max} is smaller than min {min}")]
    InvalidRepeatRange { min: u32, max: u32 },
    #[error("index {index} is out of range for a sequence of {count} strings")]
    IndexOutOfRange { index: BigInt, count: BigUint },
    #[error("cannot sample from an empty language")]
    EmptyLanguage,
}
