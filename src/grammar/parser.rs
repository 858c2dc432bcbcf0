use super::lexer::{LexToken, Lexeme, tokenize};
use super::{Node, PatternParseError};

/// Parse pattern text into a `Node` tree.
///
/// Grammar:
/// - alternation := concat (`|` concat)*
/// - concat := piece*
/// - piece := atom quantifier?
/// - atom := char | `.` | set | `(` alternation `)`
pub fn parse(pattern: &str) -> Result<Node, PatternParseError> {
    let lexemes = tokenize(pattern)?;
    let mut parser = Parser { lexemes, pos: 0 };
    let node = parser.alternation()?;
    match parser.peek() {
        None => Ok(node),
        Some(Lexeme {
            token: LexToken::CloseParen,
            pos,
        }) => Err(PatternParseError::UnmatchedParen(*pos)),
        Some(Lexeme { pos, .. }) => Err(PatternParseError::InvalidSyntax(format!(
            "unexpected token at position {pos}"
        ))),
    }
}

struct Parser {
    lexemes: Vec<Lexeme>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.pos)
    }

    fn peek_token(&self) -> Option<&LexToken> {
        self.peek().map(|l| &l.token)
    }

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.pos).cloned();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    fn alternation(&mut self) -> Result<Node, PatternParseError> {
        let mut branches = vec![self.concat()?];
        while matches!(self.peek_token(), Some(LexToken::Pipe)) {
            self.next();
            branches.push(self.concat()?);
        }

        if branches.len() == 1 {
            return Ok(branches.remove(0));
        }
        if branches
            .iter()
            .any(|b| matches!(b, Node::Concat(parts) if parts.is_empty()))
        {
            return Err(PatternParseError::EmptyAlternation);
        }
        Ok(Node::Alternation(branches))
    }

    fn concat(&mut self) -> Result<Node, PatternParseError> {
        let mut pieces = Vec::new();
        while let Some(token) = self.peek_token() {
            if matches!(token, LexToken::Pipe | LexToken::CloseParen) {
                break;
            }
            pieces.push(self.piece()?);
        }
        Ok(Node::Concat(pieces))
    }

    fn piece(&mut self) -> Result<Node, PatternParseError> {
        let atom = self.atom()?;
        let Some(Lexeme {
            token: LexToken::Quantifier(quantifier),
            ..
        }) = self.peek().cloned()
        else {
            return Ok(atom);
        };
        self.next();

        if let Some(Lexeme {
            token: LexToken::Quantifier(_),
            pos,
        }) = self.peek()
        {
            return Err(PatternParseError::NestedQuantifier(*pos));
        }
        Ok(Node::Repeat(Box::new(atom), quantifier))
    }

    fn atom(&mut self) -> Result<Node, PatternParseError> {
        let Some(Lexeme { token, pos }) = self.next() else {
            return Err(PatternParseError::InvalidSyntax(
                "unexpected end of pattern".to_string(),
            ));
        };
        match token {
            LexToken::Char(c) => Ok(Node::Literal(c)),
            LexToken::Dot => Ok(Node::Any),
            LexToken::Set {
                negated: false,
                items,
            } => Ok(Node::Set(items)),
            LexToken::Set {
                negated: true,
                items,
            } => Ok(Node::NegatedSet(items)),
            LexToken::OpenParen => {
                let inner = self.alternation()?;
                match self.next() {
                    Some(Lexeme {
                        token: LexToken::CloseParen,
                        ..
                    }) => Ok(Node::Group(Box::new(inner))),
                    _ => Err(PatternParseError::UnclosedGroup(pos)),
                }
            }
            LexToken::Quantifier(_) => Err(PatternParseError::DanglingQuantifier(pos)),
            LexToken::CloseParen => Err(PatternParseError::UnmatchedParen(pos)),
            LexToken::Pipe => Err(PatternParseError::EmptyAlternation),
        }
    }
}
