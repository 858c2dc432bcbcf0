use crate::builder::CompileError;
use crate::sequence::SequenceError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Process exit code for this failure.
    ///
    /// A pattern that cannot be compiled is a usage error (2); a well-formed
    /// request the language cannot satisfy is a plain failure (1).
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Compile(_) => 2,
            DriverError::Sequence(_) | DriverError::Io(_) => 1,
        }
    }
}
