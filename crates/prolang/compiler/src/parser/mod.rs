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

//! Parser module for the Prolang compiler
//!
//! This module turns source text into a syntax tree in two stages:
//! - Lexical analysis (tokenization)
//! - Syntax analysis (AST generation)
//!
//! # Architecture
//!
//! - **Common**: Tokens, configuration and error handling
//! - **Traits**: Interfaces for parser components
//! - **Prolang**: Language-specific lexing and parsing logic
//!
//! # Example Usage
//!
//! ```rust
//! use prolang_compiler::parser::{ParserConfig, ProlangParser};
//!
//! let parser = ProlangParser::new(ParserConfig::new().with_max_recursion_depth(64));
//! let program = parser.parse_program("def f ( a ) { x = a ; } f ( 1 ) ;").unwrap();
//! assert_eq!(program.len(), 2);
//! ```

pub mod common;
pub mod prolang;
pub mod traits;

// Re-export commonly used types
pub use common::{Keyword, ParseError, ParseErrorKind, ParseResult, ParserConfig, Token, TokenKind, format_tokens};
pub use prolang::{Lexer, ProlangParser, SyntaxParser, parse, tokenize, tokenize_strict};
pub use traits::Parser;

/// Create a default parser configuration
pub fn default_config() -> ParserConfig {
    ParserConfig::new()
}

/// Create a strict parser configuration that rejects unknown characters
pub fn strict_config() -> ParserConfig {
    ParserConfig::new().with_reject_unknown_characters(true)
}

/// Tokenize and parse `source` with the default configuration
pub fn parse_source(source: &str) -> ParseResult<crate::ast::Block> {
    ProlangParser::default().parse_program(source)
}
