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

//! Indented debug rendering of a syntax tree

use super::node::{AstNode, BinaryOperator, Block, Identifier, TypeAnnotation};
use super::visitor::{AstVisitor, walk_block, walk_node};

/// Renders one line per construct, indenting two spaces per nesting level
#[derive(Debug, Default)]
pub struct TreePrinter {
    output: String,
    depth: usize,
    in_function: bool,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the printer and return the rendered text
    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }
}

impl AstVisitor for TreePrinter {
    fn visit_number(&mut self, value: i64) {
        self.line(&format!("Number: {}", value));
    }

    fn visit_identifier(&mut self, identifier: &Identifier) {
        self.line(&format!("Identifier: {}", identifier));
    }

    fn visit_operator(&mut self, operator: BinaryOperator) {
        self.line(&format!("Operator: {}", operator));
    }

    fn enter_assignment(&mut self, target: &Identifier, type_annotation: Option<TypeAnnotation>) {
        match type_annotation {
            Some(annotation) => self.line(&format!("Assignment: {} ({})", target, annotation)),
            None => self.line(&format!("Assignment: {}", target)),
        }
        self.depth += 1;
    }

    fn exit_assignment(&mut self, _target: &Identifier) {
        self.depth -= 1;
    }

    fn enter_block(&mut self, _block: &Block) {
        let label = if std::mem::take(&mut self.in_function) { "Body" } else { "Block" };
        self.line(label);
        self.depth += 1;
    }

    fn exit_block(&mut self, _block: &Block) {
        self.depth -= 1;
    }

    fn enter_function(&mut self, name: &str, parameters: &[String]) {
        self.line(&format!("Function: {}({})", name, parameters.join(", ")));
        self.depth += 1;
        self.in_function = true;
    }

    fn exit_function(&mut self, _name: &str) {
        self.depth -= 1;
    }

    fn enter_call(&mut self, name: &str, _arguments: &[AstNode]) {
        self.line(&format!("Function Call: {}", name));
        self.depth += 1;
    }

    fn exit_call(&mut self, _name: &str) {
        self.depth -= 1;
    }
}

/// Render a whole program
pub fn print_tree(program: &Block) -> String {
    let mut printer = TreePrinter::new();
    walk_block(&mut printer, program);
    printer.finish()
}

/// Render a single node
pub fn print_node(node: &AstNode) -> String {
    let mut printer = TreePrinter::new();
    walk_node(&mut printer, node);
    printer.finish()
}
