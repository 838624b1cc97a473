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

//! Prolang-specific parsing implementation

pub mod lexer;
pub mod syntax_parser;

pub use lexer::{Lexer, SkippedChar, tokenize, tokenize_strict};
pub use syntax_parser::{SyntaxParser, parse};

use super::common::{ParseResult, ParserConfig, Token};
use super::traits::Parser;
use crate::ast::Block;
use tracing::debug;

/// Main Prolang parser that runs lexical and syntax analysis in sequence
#[derive(Debug, Clone, Default)]
pub struct ProlangParser {
    config: ParserConfig,
}

impl ProlangParser {
    /// Create a new Prolang parser
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Split `input` into tokens according to the lexing mode
    pub fn tokenize(&self, input: &str) -> ParseResult<Vec<Token>> {
        if self.config.reject_unknown_characters { tokenize_strict(input) } else { Ok(tokenize(input)) }
    }

    /// Parse Prolang source code into a program tree
    pub fn parse_program(&self, input: &str) -> ParseResult<Block> {
        // Step 1: Lexical analysis
        let tokens = self.tokenize(input)?;

        // Step 2: Syntax analysis
        let program = SyntaxParser::with_config(&tokens, self.config.clone()).parse_program()?;

        debug!(bytes = input.len(), statements = program.len(), "parsed source");
        Ok(program)
    }

    /// Get the parser configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl Parser<Block> for ProlangParser {
    fn parse(&mut self, input: &str) -> ParseResult<Block> {
        self.parse_program(input)
    }

    fn name(&self) -> &'static str {
        "ProlangParser"
    }
}

#[cfg(test)]
mod tests {
    mod lexer_tests;
    mod parser_tests;

    use super::*;
    use crate::parser::common::ParseErrorKind;

    #[test]
    fn test_prolang_parser_creation() {
        let parser = ProlangParser::default();
        assert_eq!(parser.name(), "ProlangParser");
        assert_eq!(parser.config(), &ParserConfig::default());
    }

    #[test]
    fn test_prolang_parser_empty_input() {
        let mut parser = ProlangParser::default();

        // Empty input is an empty program
        let result = parser.parse("");
        assert_eq!(result, Ok(Block::new()));
    }

    #[test]
    fn test_prolang_parser_strict_mode() {
        let source = "x = 1 ; # comment-like noise is not a character class";
        assert!(ProlangParser::default().parse_program("x = 1 ; \u{b5}").is_ok());

        let strict = ProlangParser::new(ParserConfig::new().with_reject_unknown_characters(true));
        let error = strict.parse_program("x = 1 ; \u{b5}").unwrap_err();
        assert_eq!(error.kind, ParseErrorKind::LexicalError { character: '\u{b5}' });
        assert_eq!(error.position, 8);

        // '#' is punctuation, so strict lexing accepts it and the parser rejects it
        let error = strict.parse_program(source).unwrap_err();
        assert!(matches!(error.kind, ParseErrorKind::SyntaxError { .. }));
    }
}
