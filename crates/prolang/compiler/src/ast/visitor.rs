// Prolang
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Read-only depth-first traversal of the syntax tree
//!
//! The walk order is fixed: a binary operation visits its left operand, then
//! the operator, then its right operand; blocks and function bodies visit
//! statements in stored order; a call visits the callee name before each
//! argument in order.

use super::node::{AstNode, BinaryOperator, Block, Identifier, TypeAnnotation};

/// Callbacks invoked by [`walk_node`] and [`walk_block`]
///
/// Every hook defaults to doing nothing.
pub trait AstVisitor {
    fn visit_number(&mut self, _value: i64) {}

    fn visit_identifier(&mut self, _identifier: &Identifier) {}

    fn visit_operator(&mut self, _operator: BinaryOperator) {}

    /// Called before the assigned value is walked
    fn enter_assignment(&mut self, _target: &Identifier, _type_annotation: Option<TypeAnnotation>) {}

    fn exit_assignment(&mut self, _target: &Identifier) {}

    fn enter_block(&mut self, _block: &Block) {}

    fn exit_block(&mut self, _block: &Block) {}

    /// Called before the function body is walked
    fn enter_function(&mut self, _name: &str, _parameters: &[String]) {}

    fn exit_function(&mut self, _name: &str) {}

    /// Called with the callee name before the arguments are walked
    fn enter_call(&mut self, _name: &str, _arguments: &[AstNode]) {}

    fn exit_call(&mut self, _name: &str) {}
}

/// Walk `node` and its descendants depth-first
pub fn walk_node<V: AstVisitor + ?Sized>(visitor: &mut V, node: &AstNode) {
    match node {
        AstNode::NumberLiteral(value) => visitor.visit_number(*value),
        AstNode::Identifier(identifier) => visitor.visit_identifier(identifier),
        AstNode::BinaryOp { operator, left, right } => {
            walk_node(visitor, left);
            visitor.visit_operator(*operator);
            walk_node(visitor, right);
        }
        AstNode::Assignment { target, value, type_annotation } => {
            visitor.enter_assignment(target, *type_annotation);
            walk_node(visitor, value);
            visitor.exit_assignment(target);
        }
        AstNode::Block(block) => walk_block(visitor, block),
        AstNode::FunctionDef { name, parameters, body } => {
            visitor.enter_function(name, parameters);
            walk_block(visitor, body);
            visitor.exit_function(name);
        }
        AstNode::FunctionCall { name, arguments } => {
            visitor.enter_call(name, arguments);
            for argument in arguments {
                walk_node(visitor, argument);
            }
            visitor.exit_call(name);
        }
    }
}

/// Walk every statement of `block` in stored order
pub fn walk_block<V: AstVisitor + ?Sized>(visitor: &mut V, block: &Block) {
    visitor.enter_block(block);
    for statement in block {
        walk_node(visitor, statement);
    }
    visitor.exit_block(block);
}
