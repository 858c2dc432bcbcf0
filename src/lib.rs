pub mod builder;
pub mod cli;
pub mod config;
pub mod driver;
pub mod grammar;
pub mod sequence;

pub use builder::{CompileError, DEFAULT_MAX_REPEAT, PatternBuilder, compile};
pub use sequence::{Sequence, SequenceError};
