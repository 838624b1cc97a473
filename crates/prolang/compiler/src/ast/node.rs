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

//! Abstract syntax tree for Prolang programs
//!
//! Every parent owns its children outright, so a tree is finite and acyclic
//! by construction.

use serde::Serialize;
use std::fmt;

/// A node of the syntax tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AstNode {
    NumberLiteral(i64),
    Identifier(Identifier),
    BinaryOp {
        operator: BinaryOperator,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    Assignment {
        target: Identifier,
        value: Box<AstNode>,
        /// Present for `int x = ...` declarations when annotations are kept
        type_annotation: Option<TypeAnnotation>,
    },
    Block(Block),
    FunctionDef {
        name: String,
        parameters: Vec<String>,
        body: Block,
    },
    FunctionCall {
        name: String,
        arguments: Vec<AstNode>,
    },
}

impl AstNode {
    /// Build an identifier reference
    pub fn identifier(name: impl Into<String>) -> Self {
        AstNode::Identifier(Identifier::new(name))
    }

    /// Build a binary operation from its operands
    pub fn binary(operator: BinaryOperator, left: AstNode, right: AstNode) -> Self {
        AstNode::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build an assignment without a type annotation
    pub fn assignment(target: impl Into<String>, value: AstNode) -> Self {
        AstNode::Assignment {
            target: Identifier::new(target),
            value: Box::new(value),
            type_annotation: None,
        }
    }

    /// Name of the variant, for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            AstNode::NumberLiteral(_) => "NumberLiteral",
            AstNode::Identifier(_) => "Identifier",
            AstNode::BinaryOp { .. } => "BinaryOp",
            AstNode::Assignment { .. } => "Assignment",
            AstNode::Block(_) => "Block",
            AstNode::FunctionDef { .. } => "FunctionDef",
            AstNode::FunctionCall { .. } => "FunctionCall",
        }
    }
}

/// A named value reference, also used as an assignment target
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An ordered sequence of statements
///
/// Used both for a whole program and for function bodies; the owner decides
/// which one it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Block {
    statements: Vec<AstNode>,
}

impl Block {
    /// Create an empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement; insertion order is execution order
    pub fn add_statement(&mut self, statement: AstNode) {
        self.statements.push(statement);
    }

    pub fn statements(&self) -> &[AstNode] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AstNode> {
        self.statements.iter()
    }
}

impl From<Vec<AstNode>> for Block {
    fn from(statements: Vec<AstNode>) -> Self {
        Self { statements }
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a AstNode;
    type IntoIter = std::slice::Iter<'a, AstNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Binary operators, all sharing a single precedence tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOperator {
    /// Source spelling of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a typed declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeAnnotation {
    Int,
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::Int => f.write_str("int"),
        }
    }
}
