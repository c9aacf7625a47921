//! AST node definitions for templates.
//!
//! Nodes reference child nodes via arena-allocated slices and strings. All
//! nodes serialize (source ranges excluded) so a host compiler can emit the
//! tree as a JSON wire format.

use serde::Serialize;
use stencil_core::text::TextRange;

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Template and blocks
// ============================================================================

/// The root of a parsed template.
#[derive(Debug, Serialize)]
pub struct Template<'a> {
    pub body: Block<'a>,
}

/// A sequence of statements that may introduce block parameters.
///
/// Used for the template root, the `program`/`inverse` of a block statement,
/// and the body of an element.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block<'a> {
    pub statements: NodeList<'a, Statement<'a>>,
    pub block_params: NodeList<'a, &'a str>,
    #[serde(skip)]
    pub range: TextRange,
}

impl<'a> Block<'a> {
    /// Whether this block declares any `as |...|` parameters.
    pub fn has_block_params(&self) -> bool {
        !self.block_params.is_empty()
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Statement<'a> {
    #[serde(rename = "MustacheStatement")]
    Mustache(MustacheStatement<'a>),
    #[serde(rename = "BlockStatement")]
    Block(BlockStatement<'a>),
    #[serde(rename = "ElementNode")]
    Element(ElementNode<'a>),
    #[serde(rename = "TextNode")]
    Text(TextNode<'a>),
    #[serde(rename = "MustacheCommentStatement")]
    MustacheComment(CommentStatement<'a>),
    #[serde(rename = "CommentStatement")]
    Comment(CommentStatement<'a>),
}

impl<'a> Statement<'a> {
    /// The source range of the statement.
    pub fn range(&self) -> TextRange {
        match self {
            Statement::Mustache(n) => n.range,
            Statement::Block(n) => n.range,
            Statement::Element(n) => n.range,
            Statement::Text(n) => n.range,
            Statement::MustacheComment(n) | Statement::Comment(n) => n.range,
        }
    }
}

/// `{{path param key=value}}`, or `{{{path}}}` when `trusting`.
#[derive(Debug, Serialize)]
pub struct MustacheStatement<'a> {
    pub path: Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    pub trusting: bool,
    #[serde(skip)]
    pub range: TextRange,
}

/// `{{#path params as |x|}}program{{else}}inverse{{/path}}`.
#[derive(Debug, Serialize)]
pub struct BlockStatement<'a> {
    pub path: Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    pub program: Block<'a>,
    pub inverse: Option<Block<'a>>,
    #[serde(skip)]
    pub range: TextRange,
}

/// `<tag attr=... {{modifier}} as |x|>body</tag>`.
///
/// Element block params are visible in `body` only.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode<'a> {
    pub tag: &'a str,
    pub attributes: NodeList<'a, AttrNode<'a>>,
    pub modifiers: NodeList<'a, ElementModifier<'a>>,
    pub body: Block<'a>,
    pub self_closing: bool,
    #[serde(skip)]
    pub range: TextRange,
}

#[derive(Debug, Serialize)]
pub struct TextNode<'a> {
    pub chars: &'a str,
    #[serde(skip)]
    pub range: TextRange,
}

/// Both `{{!-- --}}` and `<!-- -->` comments.
#[derive(Debug, Serialize)]
pub struct CommentStatement<'a> {
    pub value: &'a str,
    #[serde(skip)]
    pub range: TextRange,
}

// ============================================================================
// Element parts
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AttrNode<'a> {
    pub name: &'a str,
    pub value: AttrValue<'a>,
    #[serde(skip)]
    pub range: TextRange,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum AttrValue<'a> {
    #[serde(rename = "TextNode")]
    Text(TextNode<'a>),
    #[serde(rename = "MustacheStatement")]
    Mustache(MustacheStatement<'a>),
    #[serde(rename = "ConcatStatement")]
    Concat(ConcatStatement<'a>),
}

/// An interpolated attribute value: `class="a {{b}} c"`.
#[derive(Debug, Serialize)]
pub struct ConcatStatement<'a> {
    pub parts: NodeList<'a, ConcatPart<'a>>,
    #[serde(skip)]
    pub range: TextRange,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ConcatPart<'a> {
    #[serde(rename = "TextNode")]
    Text(TextNode<'a>),
    #[serde(rename = "MustacheStatement")]
    Mustache(MustacheStatement<'a>),
}

/// `{{modifier params}}` in element position.
#[derive(Debug, Serialize)]
pub struct ElementModifier<'a> {
    pub path: Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    #[serde(skip)]
    pub range: TextRange,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Expression<'a> {
    #[serde(rename = "PathExpression")]
    Path(PathExpression<'a>),
    #[serde(rename = "SubExpression")]
    SubExpression(SubExpression<'a>),
    #[serde(rename = "StringLiteral")]
    String(Literal<&'a str>),
    #[serde(rename = "NumberLiteral")]
    Number(Literal<f64>),
    #[serde(rename = "BooleanLiteral")]
    Boolean(Literal<bool>),
    #[serde(rename = "NullLiteral")]
    Null(Literal<()>),
    #[serde(rename = "UndefinedLiteral")]
    Undefined(Literal<()>),
}

impl<'a> Expression<'a> {
    /// The name this expression refers to when used as a callee.
    ///
    /// Only path expressions name something; literals return `None`.
    pub fn callee_name(&self) -> Option<&'a str> {
        match self {
            Expression::Path(path) => Some(path.original),
            _ => None,
        }
    }

    /// The source range of the expression.
    pub fn range(&self) -> TextRange {
        match self {
            Expression::Path(n) => n.range,
            Expression::SubExpression(n) => n.range,
            Expression::String(n) => n.range,
            Expression::Number(n) => n.range,
            Expression::Boolean(n) => n.range,
            Expression::Null(n) | Expression::Undefined(n) => n.range,
        }
    }
}

/// `foo`, `foo.bar`, `this.foo`, `@arg.foo`.
#[derive(Debug, Serialize)]
pub struct PathExpression<'a> {
    /// The path exactly as written.
    pub original: &'a str,
    /// Whether the path starts with `this`.
    pub this: bool,
    /// Whether the path starts with `@`.
    pub data: bool,
    /// Segments after any `this`/`@` head.
    pub parts: NodeList<'a, &'a str>,
    #[serde(skip)]
    pub range: TextRange,
}

/// `(path params key=value)`.
#[derive(Debug, Serialize)]
pub struct SubExpression<'a> {
    pub path: &'a Expression<'a>,
    pub params: NodeList<'a, Expression<'a>>,
    pub hash: Hash<'a>,
    #[serde(skip)]
    pub range: TextRange,
}

#[derive(Debug, Serialize)]
pub struct Literal<T> {
    pub value: T,
    #[serde(skip)]
    pub range: TextRange,
}

#[derive(Debug, Default, Serialize)]
pub struct Hash<'a> {
    pub pairs: NodeList<'a, HashPair<'a>>,
}

impl<'a> Hash<'a> {
    /// Whether the hash has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct HashPair<'a> {
    pub key: &'a str,
    pub value: Expression<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callee_name() {
        let path = Expression::Path(PathExpression {
            original: "my-helper",
            this: false,
            data: false,
            parts: &["my-helper"],
            range: TextRange::new(2, 11),
        });
        assert_eq!(path.callee_name(), Some("my-helper"));
        assert_eq!(path.range(), TextRange::new(2, 11));

        let literal = Expression::Boolean(Literal {
            value: true,
            range: TextRange::default(),
        });
        assert_eq!(literal.callee_name(), None);
    }

    #[test]
    fn test_serialize_skips_ranges() {
        let stmt = Statement::Text(TextNode {
            chars: "hello",
            range: TextRange::new(0, 5),
        });
        let json = serde_json::to_string(&stmt).unwrap();
        assert_eq!(json, r#"{"type":"TextNode","chars":"hello"}"#);
    }
}
