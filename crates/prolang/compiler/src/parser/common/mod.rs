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

//! Common parsing utilities and types

pub mod error;
pub mod token;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use token::{Keyword, Token, TokenKind, format_tokens};

use serde::{Deserialize, Serialize};

/// Configuration for parsers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum nesting depth of statements and expressions
    pub max_recursion_depth: usize,
    /// Fail on characters outside every lexical class instead of skipping them
    pub reject_unknown_characters: bool,
    /// Keep the `int` annotation of typed declarations in the tree
    pub preserve_type_annotations: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: 256,
            reject_unknown_characters: false,
            preserve_type_annotations: true,
        }
    }
}

impl ParserConfig {
    /// Create a new parser configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum recursion depth
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Enable or disable strict lexing
    pub fn with_reject_unknown_characters(mut self, reject: bool) -> Self {
        self.reject_unknown_characters = reject;
        self
    }

    /// Enable or disable type annotations in the tree
    pub fn with_type_annotations(mut self, preserve: bool) -> Self {
        self.preserve_type_annotations = preserve;
        self
    }
}

/// Character classes recognised by the lexer
///
/// Classification is ASCII only; everything else is unknown.
pub mod chars {
    /// Check if a character is whitespace
    pub fn is_whitespace(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
    }

    /// Check if a character starts an identifier or keyword
    pub fn is_word_start(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    /// Check if a character continues an identifier or keyword
    pub fn is_word_continue(c: char) -> bool {
        c.is_ascii_alphanumeric()
    }

    /// Check if a character is a decimal digit
    pub fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    /// Check if a character is a single-character symbol
    pub fn is_symbol(c: char) -> bool {
        c.is_ascii_punctuation()
    }
}
