use std::iter::{Enumerate, Peekable};
use std::str::Chars as StrChars;

use super::{PatternParseError, Quantifier, SetItem};

/// Raw token produced by the pattern lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexToken {
    /// A literal character, including escaped metacharacters (e.g. `a`, `\*`)
    Char(char),
    /// The `.` wildcard
    Dot,
    /// A bracket set (e.g. `[a-c_]`, `[^0-9]`)
    Set { negated: bool, items: Vec<SetItem> },
    /// Opening parenthesis `(`
    OpenParen,
    /// Closing parenthesis `)`
    CloseParen,
    /// Alternation bar `|`
    Pipe,
    /// A quantifier: `?`, `*`, `+`, `{m}`, `{m,}`, `{m,n}`
    Quantifier(Quantifier),
}

/// A token together with the character offset it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: LexToken,
    pub pos: usize,
}

type Chars<'a> = Peekable<Enumerate<StrChars<'a>>>;

/// Tokenize a pattern string into a sequence of `Lexeme`s.
///
/// Positions are character offsets, not byte offsets.
pub fn tokenize(pattern: &str) -> Result<Vec<Lexeme>, PatternParseError> {
    let mut lexemes = Vec::new();
    let mut chars: Chars<'_> = pattern.chars().enumerate().peekable();

    while let Some((pos, ch)) = chars.next() {
        let token = match ch {
            '\\' => LexToken::Char(consume_escape(&mut chars, pos)?),
            '.' => LexToken::Dot,
            '(' => LexToken::OpenParen,
            ')' => LexToken::CloseParen,
            '|' => LexToken::Pipe,
            '?' => LexToken::Quantifier(Quantifier::Optional),
            '*' => LexToken::Quantifier(Quantifier::ZeroOrMore),
            '+' => LexToken::Quantifier(Quantifier::OneOrMore),
            '{' => LexToken::Quantifier(consume_repetition(&mut chars, pos)?),
            '[' => consume_set(&mut chars, pos)?,
            ']' | '}' => {
                return Err(PatternParseError::InvalidSyntax(format!(
                    "unexpected '{ch}' at position {pos}"
                )));
            }
            c => LexToken::Char(c),
        };
        lexemes.push(Lexeme { token, pos });
    }

    Ok(lexemes)
}

/// Consume the character after a backslash at `pos`.
/// Only non-alphanumeric characters may be escaped; `\d`, `\w` and
/// friends are character classes, which are not supported.
fn consume_escape(chars: &mut Chars<'_>, pos: usize) -> Result<char, PatternParseError> {
    match chars.next() {
        Some((at, c)) if c.is_ascii_alphanumeric() => {
            Err(PatternParseError::UnsupportedEscape(c, at))
        }
        Some((_, c)) => Ok(c),
        None => Err(PatternParseError::TrailingEscape(pos)),
    }
}

/// Consume the body of `{m}`, `{m,}` or `{m,n}` after the opening brace at `start`.
fn consume_repetition(chars: &mut Chars<'_>, start: usize) -> Result<Quantifier, PatternParseError> {
    let invalid = |message: &str| PatternParseError::InvalidRepetition {
        pos: start,
        message: message.to_string(),
    };

    let min = consume_number(chars, start)?.ok_or_else(|| invalid("expected a number after '{'"))?;
    match chars.next() {
        Some((_, '}')) => Ok(Quantifier::Exactly(min)),
        Some((_, ',')) => {
            let max = consume_number(chars, start)?;
            match chars.next() {
                Some((_, '}')) => {}
                _ => return Err(invalid("expected '}'")),
            }
            match max {
                None => Ok(Quantifier::AtLeast(min)),
                Some(max) if max < min => Err(invalid(&format!(
                    "max {max} is smaller than min {min}"
                ))),
                Some(max) => Ok(Quantifier::Between(min, max)),
            }
        }
        _ => Err(invalid("expected ',' or '}'")),
    }
}

fn consume_number(chars: &mut Chars<'_>, start: usize) -> Result<Option<u32>, PatternParseError> {
    let mut digits = String::new();
    while let Some(&(_, c)) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse::<u32>()
        .map(Some)
        .map_err(|e| PatternParseError::InvalidRepetition {
            pos: start,
            message: format!("{digits}: {e}"),
        })
}

/// Consume a bracket set after the opening bracket at `start`.
///
/// `^` right after `[` negates the set. `]` right after `[` or `[^` is a
/// literal member, as is `-` at either end of the set.
fn consume_set(chars: &mut Chars<'_>, start: usize) -> Result<LexToken, PatternParseError> {
    let negated = matches!(chars.peek(), Some(&(_, '^')));
    if negated {
        chars.next();
    }

    let mut items = Vec::new();
    let mut first = true;
    loop {
        let (_, c) = chars
            .next()
            .ok_or(PatternParseError::UnclosedSquareBracket(start))?;
        if c == ']' && !first {
            break;
        }
        first = false;

        let low = match c {
            '\\' => consume_set_escape(chars, start)?,
            c => c,
        };

        // `a-z`, unless the `-` is the last member before `]`
        let is_range = matches!(chars.peek(), Some(&(_, '-')))
            && chars.clone().nth(1).is_some_and(|(_, c)| c != ']');
        if !is_range {
            items.push(SetItem::Char(low));
            continue;
        }
        chars.next();
        let (_, c) = chars
            .next()
            .ok_or(PatternParseError::UnclosedSquareBracket(start))?;
        let high = match c {
            '\\' => consume_set_escape(chars, start)?,
            c => c,
        };
        if low > high {
            return Err(PatternParseError::InvalidRange {
                start: low,
                end: high,
            });
        }
        items.push(SetItem::Range(low, high));
    }

    Ok(LexToken::Set { negated, items })
}

/// Like `consume_escape`, but running out of input leaves the set at `start` unclosed.
fn consume_set_escape(chars: &mut Chars<'_>, start: usize) -> Result<char, PatternParseError> {
    match chars.next() {
        Some((at, c)) if c.is_ascii_alphanumeric() => {
            Err(PatternParseError::UnsupportedEscape(c, at))
        }
        Some((_, c)) => Ok(c),
        None => Err(PatternParseError::UnclosedSquareBracket(start)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tokens(pattern: &str) -> Vec<LexToken> {
        tokenize(pattern)
            .unwrap()
            .into_iter()
            .map(|l| l.token)
            .collect()
    }

    // === Literals and metacharacters ===

    #[rstest]
    #[case("ab", vec![LexToken::Char('a'), LexToken::Char('b')])]
    #[case("a.b", vec![LexToken::Char('a'), LexToken::Dot, LexToken::Char('b')])]
    #[case("(a|b)", vec![
        LexToken::OpenParen,
        LexToken::Char('a'),
        LexToken::Pipe,
        LexToken::Char('b'),
        LexToken::CloseParen,
    ])]
    #[case("a b", vec![LexToken::Char('a'), LexToken::Char(' '), LexToken::Char('b')])]
    #[case("^$", vec![LexToken::Char('^'), LexToken::Char('$')])]
    fn tokenize_literals_and_meta(#[case] input: &str, #[case] expected: Vec<LexToken>) {
        assert_eq!(tokens(input), expected);
    }

    // === Escapes ===

    #[rstest]
    #[case(r"\.", '.')]
    #[case(r"\*", '*')]
    #[case(r"\\", '\\')]
    #[case(r"\[", '[')]
    #[case(r"\{", '{')]
    #[case(r"\-", '-')]
    fn tokenize_escaped_meta(#[case] input: &str, #[case] expected: char) {
        assert_eq!(tokens(input), vec![LexToken::Char(expected)]);
    }

    #[rstest]
    #[case(r"\d", 'd', 1)]
    #[case(r"a\w", 'w', 2)]
    #[case(r"\1", '1', 1)]
    fn tokenize_class_escapes_unsupported(
        #[case] input: &str,
        #[case] c: char,
        #[case] pos: usize,
    ) {
        let result = tokenize(input);
        assert!(
            matches!(result, Err(PatternParseError::UnsupportedEscape(got, at)) if got == c && at == pos),
            "got {result:?}"
        );
    }

    #[test]
    fn tokenize_trailing_backslash() {
        assert!(matches!(
            tokenize(r"ab\"),
            Err(PatternParseError::TrailingEscape(2))
        ));
    }

    // === Quantifiers ===

    #[rstest]
    #[case("a?", Quantifier::Optional)]
    #[case("a*", Quantifier::ZeroOrMore)]
    #[case("a+", Quantifier::OneOrMore)]
    #[case("a{3}", Quantifier::Exactly(3))]
    #[case("a{2,}", Quantifier::AtLeast(2))]
    #[case("a{0,5}", Quantifier::Between(0, 5))]
    #[case("a{4,4}", Quantifier::Between(4, 4))]
    fn tokenize_quantifiers(#[case] input: &str, #[case] expected: Quantifier) {
        assert_eq!(
            tokens(input),
            vec![LexToken::Char('a'), LexToken::Quantifier(expected)]
        );
    }

    #[rstest]
    #[case("a{")]
    #[case("a{}")]
    #[case("a{,3}")]
    #[case("a{3")]
    #[case("a{3,")]
    #[case("a{3,1}")]
    #[case("a{x}")]
    #[case("a{99999999999}")]
    fn tokenize_invalid_repetition(#[case] input: &str) {
        let result = tokenize(input);
        assert!(
            matches!(result, Err(PatternParseError::InvalidRepetition { pos: 1, .. })),
            "expected InvalidRepetition for {input:?}, got {result:?}"
        );
    }

    // === Bracket sets ===

    #[rstest]
    #[case("[abc]", false, vec![SetItem::Char('a'), SetItem::Char('b'), SetItem::Char('c')])]
    #[case("[a-c]", false, vec![SetItem::Range('a', 'c')])]
    #[case("[^0-9_]", true, vec![SetItem::Range('0', '9'), SetItem::Char('_')])]
    #[case("[-a]", false, vec![SetItem::Char('-'), SetItem::Char('a')])]
    #[case("[a-]", false, vec![SetItem::Char('a'), SetItem::Char('-')])]
    #[case("[]a]", false, vec![SetItem::Char(']'), SetItem::Char('a')])]
    #[case("[^]]", true, vec![SetItem::Char(']')])]
    #[case(r"[\]\\]", false, vec![SetItem::Char(']'), SetItem::Char('\\')])]
    #[case("[.*(]", false, vec![SetItem::Char('.'), SetItem::Char('*'), SetItem::Char('(')])]
    #[case(r"[\--/]", false, vec![SetItem::Range('-', '/')])]
    fn tokenize_sets(
        #[case] input: &str,
        #[case] negated: bool,
        #[case] items: Vec<SetItem>,
    ) {
        assert_eq!(tokens(input), vec![LexToken::Set { negated, items }]);
    }

    #[test]
    fn tokenize_leading_bracket_is_member_so_bare_pair_is_unclosed() {
        assert!(matches!(
            tokenize("[]"),
            Err(PatternParseError::UnclosedSquareBracket(0))
        ));
    }

    #[rstest]
    #[case("[abc", 0)]
    #[case("x[a-", 1)]
    #[case("[^", 0)]
    #[case(r"[a\", 0)]
    fn tokenize_unclosed_set(#[case] input: &str, #[case] start: usize) {
        let result = tokenize(input);
        assert!(
            matches!(result, Err(PatternParseError::UnclosedSquareBracket(s)) if s == start),
            "got {result:?}"
        );
    }

    #[test]
    fn tokenize_inverted_range() {
        assert!(matches!(
            tokenize("[z-a]"),
            Err(PatternParseError::InvalidRange {
                start: 'z',
                end: 'a'
            })
        ));
    }

    // === Positions ===

    #[test]
    fn tokenize_records_character_positions() {
        let lexemes = tokenize("é[ab]+").unwrap();
        let positions: Vec<usize> = lexemes.iter().map(|l| l.pos).collect();
        assert_eq!(positions, vec![0, 1, 5]);
    }

    #[rstest]
    #[case("a]")]
    #[case("a}")]
    fn tokenize_stray_closer(#[case] input: &str) {
        assert!(matches!(
            tokenize(input),
            Err(PatternParseError::InvalidSyntax(_))
        ));
    }

    #[test]
    fn tokenize_empty_input() {
        assert_eq!(tokens(""), vec![]);
    }
}
