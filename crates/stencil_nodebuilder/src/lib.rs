//! stencil_nodebuilder: Synthetic template AST construction.
//!
//! Host parsers, fixtures and benchmarks build trees through
//! `TemplateBuilder`, which allocates every node in a `TemplateArena`.
//!
//! # Example
//! ```
//! use stencil_core::TemplateArena;
//! use stencil_nodebuilder::TemplateBuilder;
//!
//! let arena = TemplateArena::new();
//! let b = TemplateBuilder::new(&arena);
//! // {{#each items as |item|}}{{format-item item}}{{/each}}
//! let template = b.template(vec![b.block_statement(
//!     b.path("each"),
//!     vec![b.path("items")],
//!     b.block(&["item"], vec![b.mustache(b.path("format-item"), vec![b.path("item")], vec![])]),
//!     None,
//! )]);
//! assert_eq!(template.body.statements.len(), 1);
//! ```

use stencil_ast::node::*;
use stencil_core::arena::TemplateArena;
use stencil_core::text::TextRange;

/// Builds arena-allocated template nodes.
///
/// The builder is `Copy`; `at` returns a builder that stamps a source range
/// on the nodes it creates.
#[derive(Clone, Copy)]
pub struct TemplateBuilder<'a> {
    arena: &'a TemplateArena,
    range: TextRange,
}

impl<'a> TemplateBuilder<'a> {
    /// A builder allocating into `arena`, stamping empty ranges.
    pub fn new(arena: &'a TemplateArena) -> Self {
        Self {
            arena,
            range: TextRange::default(),
        }
    }

    /// A builder whose nodes carry the range `pos..end`.
    pub fn at(self, pos: u32, end: u32) -> Self {
        Self {
            arena: self.arena,
            range: TextRange::new(pos, end),
        }
    }

    /// The arena nodes are allocated in.
    pub fn arena(&self) -> &'a TemplateArena {
        self.arena
    }

    // -- Blocks --

    /// The root template around `statements`.
    pub fn template(&self, statements: Vec<Statement<'a>>) -> Template<'a> {
        Template {
            body: self.block(&[], statements),
        }
    }

    /// A block declaring `block_params`.
    pub fn block(&self, block_params: &[&str], statements: Vec<Statement<'a>>) -> Block<'a> {
        Block {
            statements: self.arena.alloc_slice(statements),
            block_params: self.arena.alloc_strs(block_params),
            range: self.range,
        }
    }

    // -- Statements --

    /// `{{path params key=value}}`.
    pub fn mustache(
        &self,
        path: Expression<'a>,
        params: Vec<Expression<'a>>,
        pairs: Vec<(&str, Expression<'a>)>,
    ) -> Statement<'a> {
        Statement::Mustache(self.mustache_node(path, params, pairs))
    }

    /// `{{{path}}}`: an unescaped mustache.
    pub fn triple_stash(&self, path: Expression<'a>) -> Statement<'a> {
        let mut node = self.mustache_node(path, vec![], vec![]);
        node.trusting = true;
        Statement::Mustache(node)
    }

    /// The mustache node itself, for attribute and concat values.
    pub fn mustache_node(
        &self,
        path: Expression<'a>,
        params: Vec<Expression<'a>>,
        pairs: Vec<(&str, Expression<'a>)>,
    ) -> MustacheStatement<'a> {
        MustacheStatement {
            path,
            params: self.arena.alloc_slice(params),
            hash: self.hash(pairs),
            trusting: false,
            range: self.range,
        }
    }

    /// `{{#path params}}program{{else}}inverse{{/path}}`.
    pub fn block_statement(
        &self,
        path: Expression<'a>,
        params: Vec<Expression<'a>>,
        program: Block<'a>,
        inverse: Option<Block<'a>>,
    ) -> Statement<'a> {
        Statement::Block(BlockStatement {
            path,
            params: self.arena.alloc_slice(params),
            hash: Hash::default(),
            program,
            inverse,
            range: self.range,
        })
    }

    /// An element without attributes, modifiers or block params.
    pub fn element(&self, tag: &str, children: Vec<Statement<'a>>) -> Statement<'a> {
        self.element_with(tag, vec![], vec![], &[], children)
    }

    /// An element whose body introduces block params: `<Tag as |x|>`.
    pub fn element_with_params(
        &self,
        tag: &str,
        block_params: &[&str],
        children: Vec<Statement<'a>>,
    ) -> Statement<'a> {
        self.element_with(tag, vec![], vec![], block_params, children)
    }

    /// An element with every part spelled out.
    pub fn element_with(
        &self,
        tag: &str,
        attributes: Vec<AttrNode<'a>>,
        modifiers: Vec<ElementModifier<'a>>,
        block_params: &[&str],
        children: Vec<Statement<'a>>,
    ) -> Statement<'a> {
        let self_closing = children.is_empty();
        Statement::Element(ElementNode {
            tag: self.arena.alloc_str(tag),
            attributes: self.arena.alloc_slice(attributes),
            modifiers: self.arena.alloc_slice(modifiers),
            body: self.block(block_params, children),
            self_closing,
            range: self.range,
        })
    }

    /// A text statement.
    pub fn text(&self, chars: &str) -> Statement<'a> {
        Statement::Text(self.text_node(chars))
    }

    /// A text node, for attribute and concat values.
    pub fn text_node(&self, chars: &str) -> TextNode<'a> {
        TextNode {
            chars: self.arena.alloc_str(chars),
            range: self.range,
        }
    }

    /// `{{!-- value --}}`.
    pub fn mustache_comment(&self, value: &str) -> Statement<'a> {
        Statement::MustacheComment(self.comment_node(value))
    }

    /// `<!-- value -->`.
    pub fn comment(&self, value: &str) -> Statement<'a> {
        Statement::Comment(self.comment_node(value))
    }

    fn comment_node(&self, value: &str) -> CommentStatement<'a> {
        CommentStatement {
            value: self.arena.alloc_str(value),
            range: self.range,
        }
    }

    // -- Element parts --

    /// An attribute `name=value`.
    pub fn attr(&self, name: &str, value: AttrValue<'a>) -> AttrNode<'a> {
        AttrNode {
            name: self.arena.alloc_str(name),
            value,
            range: self.range,
        }
    }

    /// A static attribute value.
    pub fn attr_text(&self, chars: &str) -> AttrValue<'a> {
        AttrValue::Text(self.text_node(chars))
    }

    /// An attribute value `{{path params}}`.
    pub fn attr_mustache(&self, path: Expression<'a>, params: Vec<Expression<'a>>) -> AttrValue<'a> {
        AttrValue::Mustache(self.mustache_node(path, params, vec![]))
    }

    /// A quoted attribute value mixing text and mustaches.
    pub fn concat(&self, parts: Vec<ConcatPart<'a>>) -> AttrValue<'a> {
        AttrValue::Concat(ConcatStatement {
            parts: self.arena.alloc_slice(parts),
            range: self.range,
        })
    }

    /// `{{path params}}` in element modifier position.
    pub fn modifier(&self, path: Expression<'a>, params: Vec<Expression<'a>>) -> ElementModifier<'a> {
        ElementModifier {
            path,
            params: self.arena.alloc_slice(params),
            hash: Hash::default(),
            range: self.range,
        }
    }

    // -- Expressions --

    /// A path expression; `this` and `@` heads are recognised.
    pub fn path(&self, original: &str) -> Expression<'a> {
        let original = self.arena.alloc_str(original);
        let (this, data, rest) = if original == "this" {
            (true, false, "")
        } else if let Some(rest) = original.strip_prefix("this.") {
            (true, false, rest)
        } else if let Some(rest) = original.strip_prefix('@') {
            (false, true, rest)
        } else {
            (false, false, original)
        };
        let parts: Vec<&'a str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('.').collect()
        };
        Expression::Path(PathExpression {
            original,
            this,
            data,
            parts: self.arena.alloc_slice(parts),
            range: self.range,
        })
    }

    /// `(path params key=value)`.
    pub fn sub_expr(
        &self,
        path: Expression<'a>,
        params: Vec<Expression<'a>>,
        pairs: Vec<(&str, Expression<'a>)>,
    ) -> Expression<'a> {
        Expression::SubExpression(SubExpression {
            path: self.arena.alloc(path),
            params: self.arena.alloc_slice(params),
            hash: self.hash(pairs),
            range: self.range,
        })
    }

    /// A string literal.
    pub fn string(&self, value: &str) -> Expression<'a> {
        Expression::String(Literal {
            value: self.arena.alloc_str(value),
            range: self.range,
        })
    }

    /// A number literal.
    pub fn number(&self, value: f64) -> Expression<'a> {
        Expression::Number(Literal {
            value,
            range: self.range,
        })
    }

    /// A boolean literal.
    pub fn boolean(&self, value: bool) -> Expression<'a> {
        Expression::Boolean(Literal {
            value,
            range: self.range,
        })
    }

    /// The `null` literal.
    pub fn null(&self) -> Expression<'a> {
        Expression::Null(Literal {
            value: (),
            range: self.range,
        })
    }

    /// The `undefined` literal.
    pub fn undefined(&self) -> Expression<'a> {
        Expression::Undefined(Literal {
            value: (),
            range: self.range,
        })
    }

    /// A hash from key/value pairs, in order.
    pub fn hash(&self, pairs: Vec<(&str, Expression<'a>)>) -> Hash<'a> {
        let pairs: Vec<HashPair<'a>> = pairs
            .into_iter()
            .map(|(key, value)| HashPair {
                key: self.arena.alloc_str(key),
                value,
            })
            .collect();
        Hash {
            pairs: self.arena.alloc_slice(pairs),
        }
    }
}
