//! Template visitor trait for traversing the syntax tree.
//!
//! Every `visit_*` method defaults to the matching `walk_*` function, which
//! descends into the node's children depth-first in source order. An
//! implementation that overrides a `visit_*` method decides whether, and
//! when, to call the walker; code placed before the call runs before the
//! children, code after it runs once the children are done.
//!
//! Traversal is fallible: the first `Err` returned by any callback stops
//! the walk and propagates to the caller of `visit_template`.

use crate::node::*;

pub trait TemplateVisitor<'a> {
    type Error;

    fn visit_template(&mut self, node: &Template<'a>) -> Result<(), Self::Error> {
        walk_template(self, node)
    }

    /// Called for every block, including the template root.
    fn visit_block(&mut self, node: &Block<'a>) -> Result<(), Self::Error> {
        walk_block(self, node)
    }

    fn visit_statement(&mut self, node: &Statement<'a>) -> Result<(), Self::Error> {
        walk_statement(self, node)
    }

    fn visit_mustache(&mut self, node: &MustacheStatement<'a>) -> Result<(), Self::Error> {
        walk_mustache(self, node)
    }

    fn visit_block_statement(&mut self, node: &BlockStatement<'a>) -> Result<(), Self::Error> {
        walk_block_statement(self, node)
    }

    fn visit_element(&mut self, node: &ElementNode<'a>) -> Result<(), Self::Error> {
        walk_element(self, node)
    }

    fn visit_attribute(&mut self, node: &AttrNode<'a>) -> Result<(), Self::Error> {
        walk_attribute(self, node)
    }

    fn visit_modifier(&mut self, node: &ElementModifier<'a>) -> Result<(), Self::Error> {
        walk_modifier(self, node)
    }

    fn visit_text(&mut self, _node: &TextNode<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_comment(&mut self, _node: &CommentStatement<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_expression(&mut self, node: &Expression<'a>) -> Result<(), Self::Error> {
        walk_expression(self, node)
    }

    fn visit_sub_expression(&mut self, node: &SubExpression<'a>) -> Result<(), Self::Error> {
        walk_sub_expression(self, node)
    }

    fn visit_path(&mut self, _node: &PathExpression<'a>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_hash(&mut self, node: &Hash<'a>) -> Result<(), Self::Error> {
        walk_hash(self, node)
    }
}

/// Visit the template body.
pub fn walk_template<'a, V>(visitor: &mut V, node: &Template<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    visitor.visit_block(&node.body)
}

/// Visit each statement of a block in source order.
pub fn walk_block<'a, V>(visitor: &mut V, node: &Block<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    for stmt in node.statements.iter() {
        visitor.visit_statement(stmt)?;
    }
    Ok(())
}

/// Dispatch a statement to its `visit_*` method.
pub fn walk_statement<'a, V>(visitor: &mut V, node: &Statement<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    match node {
        Statement::Mustache(n) => visitor.visit_mustache(n),
        Statement::Block(n) => visitor.visit_block_statement(n),
        Statement::Element(n) => visitor.visit_element(n),
        Statement::Text(n) => visitor.visit_text(n),
        Statement::MustacheComment(n) | Statement::Comment(n) => visitor.visit_comment(n),
    }
}

fn walk_call<'a, V>(
    visitor: &mut V,
    path: &Expression<'a>,
    params: &[Expression<'a>],
    hash: &Hash<'a>,
) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    visitor.visit_expression(path)?;
    for param in params.iter() {
        visitor.visit_expression(param)?;
    }
    visitor.visit_hash(hash)
}

/// Visit the callee, then params, then the hash.
pub fn walk_mustache<'a, V>(visitor: &mut V, node: &MustacheStatement<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    walk_call(visitor, &node.path, node.params, &node.hash)
}

/// Params and hash are evaluated outside the block, so they are visited
/// before `program` and `inverse`.
pub fn walk_block_statement<'a, V>(
    visitor: &mut V,
    node: &BlockStatement<'a>,
) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    walk_call(visitor, &node.path, node.params, &node.hash)?;
    visitor.visit_block(&node.program)?;
    if let Some(ref inverse) = node.inverse {
        visitor.visit_block(inverse)?;
    }
    Ok(())
}

/// Visit attributes, then modifiers, then the body block.
pub fn walk_element<'a, V>(visitor: &mut V, node: &ElementNode<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    for attr in node.attributes.iter() {
        visitor.visit_attribute(attr)?;
    }
    for modifier in node.modifiers.iter() {
        visitor.visit_modifier(modifier)?;
    }
    visitor.visit_block(&node.body)
}

/// Visit the text or mustache parts of an attribute value.
pub fn walk_attribute<'a, V>(visitor: &mut V, node: &AttrNode<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    match &node.value {
        AttrValue::Text(text) => visitor.visit_text(text),
        AttrValue::Mustache(mustache) => visitor.visit_mustache(mustache),
        AttrValue::Concat(concat) => {
            for part in concat.parts.iter() {
                match part {
                    ConcatPart::Text(text) => visitor.visit_text(text)?,
                    ConcatPart::Mustache(mustache) => visitor.visit_mustache(mustache)?,
                }
            }
            Ok(())
        }
    }
}

/// Visit the modifier callee, params and hash.
pub fn walk_modifier<'a, V>(visitor: &mut V, node: &ElementModifier<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    walk_call(visitor, &node.path, node.params, &node.hash)
}

/// Dispatch an expression; literals have no children.
pub fn walk_expression<'a, V>(visitor: &mut V, node: &Expression<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    match node {
        Expression::Path(n) => visitor.visit_path(n),
        Expression::SubExpression(n) => visitor.visit_sub_expression(n),
        Expression::String(_)
        | Expression::Number(_)
        | Expression::Boolean(_)
        | Expression::Null(_)
        | Expression::Undefined(_) => Ok(()),
    }
}

/// Visit the callee, then params, then the hash.
pub fn walk_sub_expression<'a, V>(visitor: &mut V, node: &SubExpression<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    walk_call(visitor, node.path, node.params, &node.hash)
}

/// Visit each pair value in order.
pub fn walk_hash<'a, V>(visitor: &mut V, node: &Hash<'a>) -> Result<(), V::Error>
where
    V: TemplateVisitor<'a> + ?Sized,
{
    for pair in node.pairs.iter() {
        visitor.visit_expression(&pair.value)?;
    }
    Ok(())
}
