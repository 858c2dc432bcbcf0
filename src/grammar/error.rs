#[derive(Debug, thiserror::Error)]
pub enum PatternParseError {
    #[error("unclosed square bracket at position {0}")]
    UnclosedSquareBracket(usize),
    #[error("unclosed group at position {0}")]
    UnclosedGroup(usize),
    #[error("unmatched closing parenthesis at position {0}")]
    UnmatchedParen(usize),
    #[error("empty alternation")]
    EmptyAlternation,
    #[error("nothing to repeat at position {0}")]
    DanglingQuantifier(usize),
    #[error("quantifier at position {0} follows another quantifier")]
    NestedQuantifier(usize),
    #[error("invalid repetition at position {pos}: {message}")]
    InvalidRepetition { pos: usize, message: String },
    #[error("invalid range {start}-{end}: start is after end")]
    InvalidRange { start: char, end: char },
    #[error("unsupported escape '\\{0}' at position {1}")]
    UnsupportedEscape(char, usize),
    #[error("trailing backslash at position {0}")]
    TrailingEscape(usize),
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),
}
