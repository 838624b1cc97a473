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

//! Parser error types and handling

use super::Token;
use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Main error type for parsing operations
///
/// `position` is the index of the offending token for errors raised by the
/// parser, and the byte offset into the source for lexical errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (position {position})")]
pub struct ParseError {
    /// The kind of error
    pub kind: ParseErrorKind,
    /// Where the error occurred
    pub position: usize,
    /// Additional context, such as the construct being parsed
    pub context: Option<String>,
}

impl ParseError {
    /// Create a new parse error
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position, context: None }
    }

    /// Create an error with context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Check if parsing hit a resource limit rather than a grammar violation
    pub fn is_limit_exceeded(&self) -> bool {
        matches!(self.kind, ParseErrorKind::RecursionLimitExceeded { .. })
    }

    /// Check if the input ended in the middle of a construct
    pub fn is_incomplete(&self) -> bool {
        matches!(&self.kind, ParseErrorKind::SyntaxError { found, .. } if found.is_eof())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        let location = match self.kind {
            ParseErrorKind::LexicalError { .. } => "offset",
            _ => "token",
        };
        format!("{} at {} {}: {}", self.kind.description(), location, self.position, self.kind)
    }

    /// Get detailed error information for debugging
    pub fn debug_message(&self) -> String {
        let mut msg = format!("[{}] {}", self.kind.code(), self.user_message());

        if let Some(context) = &self.context {
            msg.push_str(&format!("\nContext: {}", context));
        }

        msg
    }
}

/// Categories of parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A token did not match what the grammar requires at this point
    #[error("expected {expected}, found {found}")]
    SyntaxError { expected: String, found: Token },

    /// A character outside every lexical class (strict lexing only)
    #[error("unexpected character {character:?}")]
    LexicalError { character: char },

    /// A number literal outside the 64-bit signed range
    #[error("number literal '{literal}' is out of range")]
    InvalidNumber { literal: String },

    /// Nesting deeper than the configured limit
    #[error("maximum nesting depth of {limit} exceeded")]
    RecursionLimitExceeded { limit: usize },
}

impl ParseErrorKind {
    /// Get a short error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::LexicalError { .. } => "E001",
            ParseErrorKind::SyntaxError { .. } => "E002",
            ParseErrorKind::InvalidNumber { .. } => "E003",
            ParseErrorKind::RecursionLimitExceeded { .. } => "E004",
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ParseErrorKind::LexicalError { .. } => "Lexical error",
            ParseErrorKind::SyntaxError { found, .. } if found.is_eof() => "Unexpected end of input",
            ParseErrorKind::SyntaxError { .. } => "Syntax error",
            ParseErrorKind::InvalidNumber { .. } => "Invalid number",
            ParseErrorKind::RecursionLimitExceeded { .. } => "Recursion limit exceeded",
        }
    }
}

/// Helper functions for creating common errors
impl ParseError {
    /// Create a syntax error for `found` at token index `position`
    pub fn syntax_error(position: usize, expected: impl Into<String>, found: Token) -> Self {
        Self::new(ParseErrorKind::SyntaxError { expected: expected.into(), found }, position)
    }

    /// Create a lexical error for `character` at byte offset `offset`
    pub fn lexical_error(offset: usize, character: char) -> Self {
        Self::new(ParseErrorKind::LexicalError { character }, offset)
    }

    /// Create an out-of-range number error
    pub fn invalid_number(position: usize, literal: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidNumber { literal: literal.into() }, position)
    }

    /// Create a recursion limit error
    pub fn recursion_limit(position: usize, limit: usize) -> Self {
        Self::new(ParseErrorKind::RecursionLimitExceeded { limit }, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::common::TokenKind;

    #[test]
    fn test_parse_error_creation() {
        let error = ParseError::syntax_error(3, "';'", Token::new(TokenKind::Symbol, "}"));

        assert_eq!(error.position, 3);
        assert!(error.context.is_none());
        assert_eq!(
            error.kind,
            ParseErrorKind::SyntaxError {
                expected: "';'".to_string(),
                found: Token::new(TokenKind::Symbol, "}"),
            }
        );
        assert!(!error.is_incomplete());
    }

    #[test]
    fn test_error_with_context() {
        let error = ParseError::syntax_error(0, "'('", Token::eof()).with_context("function definition");

        assert_eq!(error.context, Some("function definition".to_string()));
        assert!(error.debug_message().contains("Context: function definition"));
    }

    #[test]
    fn test_incomplete_input() {
        let error = ParseError::syntax_error(12, "'}'", Token::eof());
        assert!(error.is_incomplete());
        assert_eq!(error.kind.description(), "Unexpected end of input");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ParseError::lexical_error(0, '@').kind.code(), "E001");
        assert_eq!(ParseError::syntax_error(0, "x", Token::eof()).kind.code(), "E002");
        assert_eq!(ParseError::invalid_number(0, "99999999999999999999").kind.code(), "E003");
        assert_eq!(ParseError::recursion_limit(0, 8).kind.code(), "E004");
    }

    #[test]
    fn test_limit_errors() {
        assert!(ParseError::recursion_limit(4, 8).is_limit_exceeded());
        assert!(!ParseError::syntax_error(4, "x", Token::eof()).is_limit_exceeded());
    }

    #[test]
    fn test_error_messages() {
        let error = ParseError::syntax_error(5, "')'", Token::new(TokenKind::Symbol, ";"));

        assert_eq!(error.to_string(), "expected ')', found symbol ';' (position 5)");
        assert_eq!(error.user_message(), "Syntax error at token 5: expected ')', found symbol ';'");
        assert!(error.debug_message().starts_with("[E002]"));

        let lexical = ParseError::lexical_error(7, '@');
        assert_eq!(lexical.user_message(), "Lexical error at offset 7: unexpected character '@'");
    }
}
