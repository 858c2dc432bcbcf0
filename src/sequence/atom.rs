use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::SequenceError;
use super::alphabet;

/// A finite, explicitly ordered list of single characters.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSequence {
    chars: Vec<char>,
    cursor: usize,
    count: BigUint,
}

impl AtomSequence {
    /// Build an atom over `chars` in the given order.
    ///
    /// An empty list is a structural error (e.g. `[^A-Za-z0-9]`), not an empty language.
    pub fn new(chars: Vec<char>) -> Result<Self, SequenceError> {
        if chars.is_empty() {
            return Err(SequenceError::EmptyAtom);
        }
        let count = BigUint::from(chars.len());
        Ok(Self {
            chars,
            cursor: 0,
            count,
        })
    }

    pub fn literal(c: char) -> Self {
        Self {
            chars: vec![c],
            cursor: 0,
            count: BigUint::from(1u32),
        }
    }

    /// The whole alphabet, used for `.`.
    pub fn any() -> Self {
        let chars = alphabet::alphabet().to_vec();
        let count = BigUint::from(chars.len());
        Self {
            chars,
            cursor: 0,
            count,
        }
    }

    /// The alphabet minus `excluded`, used for `[^...]`.
    pub fn negated(excluded: &[char]) -> Result<Self, SequenceError> {
        Self::new(alphabet::without(excluded))
    }

    /// An atom with no characters. Public constructors reject this, so it is
    /// the only way to reach zero-count sequences.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            count: BigUint::default(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn produce(&mut self) -> Option<String> {
        let c = self.chars.get(self.cursor)?;
        self.cursor += 1;
        Some(c.to_string())
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn count(&self) -> &BigUint {
        &self.count
    }

    pub(crate) fn get(&self, n: &BigUint) -> Option<String> {
        let i = n.to_usize()?;
        self.chars.get(i).map(|c| c.to_string())
    }

    pub fn to_pattern(&self) -> String {
        match self.chars.as_slice() {
            [c] => escape_literal(*c),
            chars if alphabet::is_alphabet(chars) => ".".to_string(),
            chars => format!("[{}]", set_body(chars)),
        }
    }
}

fn escape_literal(c: char) -> String {
    if matches!(
        c,
        '\\' | '.' | '[' | ']' | '(' | ')' | '|' | '*' | '+' | '?' | '{' | '}'
    ) {
        format!("\\{c}")
    } else {
        c.to_string()
    }
}

/// Render set members, folding ascending runs of three or more into ranges.
/// Folding never reorders members, so the rendered set enumerates identically.
fn set_body(chars: &[char]) -> String {
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let mut end = i;
        while end + 1 < chars.len() && chars[end + 1] as u32 == chars[end] as u32 + 1 {
            end += 1;
        }
        if end - i >= 2 {
            out.push_str(&escape_set_member(chars[i]));
            out.push('-');
            out.push_str(&escape_set_member(chars[end]));
            i = end + 1;
        } else {
            out.push_str(&escape_set_member(chars[i]));
            i += 1;
        }
    }
    out
}

fn escape_set_member(c: char) -> String {
    if matches!(c, '\\' | ']' | '[' | '^' | '-') {
        format!("\\{c}")
    } else {
        c.to_string()
    }
}
