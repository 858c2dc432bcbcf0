use super::{Node, Quantifier, SetItem};

/// One callback per grammar production.
///
/// `transform` walks a `Node` tree bottom-up: every callback receives the
/// already transformed results of its children, plus raw characters,
/// set members or repetition counts where the production carries them.
pub trait Transformer {
    type Output;
    type Error;

    fn literal(&mut self, c: char) -> Result<Self::Output, Self::Error>;
    fn any(&mut self) -> Result<Self::Output, Self::Error>;
    fn set(&mut self, items: &[SetItem]) -> Result<Self::Output, Self::Error>;
    fn negated_set(&mut self, items: &[SetItem]) -> Result<Self::Output, Self::Error>;
    fn concat(&mut self, parts: Vec<Self::Output>) -> Result<Self::Output, Self::Error>;
    fn alternation(&mut self, branches: Vec<Self::Output>) -> Result<Self::Output, Self::Error>;

    /// Grouping only affects precedence, so by default the inner result is kept.
    fn group(&mut self, inner: Self::Output) -> Result<Self::Output, Self::Error> {
        Ok(inner)
    }

    /// `?`
    fn optional(&mut self, item: Self::Output) -> Result<Self::Output, Self::Error>;
    /// `*`
    fn zero_or_more(&mut self, item: Self::Output) -> Result<Self::Output, Self::Error>;
    /// `+`
    fn one_or_more(&mut self, item: Self::Output) -> Result<Self::Output, Self::Error>;
    /// `{m}`
    fn exactly(&mut self, item: Self::Output, m: u32) -> Result<Self::Output, Self::Error>;
    /// `{m,}`
    fn at_least(&mut self, item: Self::Output, m: u32) -> Result<Self::Output, Self::Error>;
    /// `{m,n}`
    fn between(&mut self, item: Self::Output, m: u32, n: u32)
    -> Result<Self::Output, Self::Error>;
}

/// Transform `node` bottom-up, returning what the callback for the root
/// production produced.
pub fn transform<T: Transformer + ?Sized>(node: &Node, t: &mut T) -> Result<T::Output, T::Error> {
    match node {
        Node::Literal(c) => t.literal(*c),
        Node::Any => t.any(),
        Node::Set(items) => t.set(items),
        Node::NegatedSet(items) => t.negated_set(items),
        Node::Concat(nodes) => {
            let parts = transform_all(nodes, t)?;
            t.concat(parts)
        }
        Node::Alternation(nodes) => {
            let branches = transform_all(nodes, t)?;
            t.alternation(branches)
        }
        Node::Group(inner) => {
            let inner = transform(inner, t)?;
            t.group(inner)
        }
        Node::Repeat(inner, quantifier) => {
            let item = transform(inner, t)?;
            match *quantifier {
                Quantifier::Optional => t.optional(item),
                Quantifier::ZeroOrMore => t.zero_or_more(item),
                Quantifier::OneOrMore => t.one_or_more(item),
                Quantifier::Exactly(m) => t.exactly(item, m),
                Quantifier::AtLeast(m) => t.at_least(item, m),
                Quantifier::Between(m, n) => t.between(item, m, n),
            }
        }
    }
}

fn transform_all<T: Transformer + ?Sized>(
    nodes: &[Node],
    t: &mut T,
) -> Result<Vec<T::Output>, T::Error> {
    nodes.iter().map(|node| transform(node, t)).collect()
}
