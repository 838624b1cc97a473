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

//! Prolang lexical analyzer (tokenizer)
//!
//! A single left-to-right pass over the source. Words are maximal runs of
//! alphanumerics starting with a letter, numbers are maximal runs of digits,
//! and every punctuation character is a symbol of its own. Operators spanning
//! several characters are left for the parser to reassemble.

use crate::parser::common::{Keyword, ParseError, ParseResult, Token, TokenKind, chars};
use std::iter::Peekable;
use std::str::CharIndices;
use tracing::{debug, trace};

/// A character the lexer could not classify
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedChar {
    /// Byte offset into the source
    pub offset: usize,
    /// The character itself
    pub character: char,
}

/// Prolang lexical analyzer
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    skipped: Vec<SkippedChar>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            skipped: Vec::new(),
        }
    }

    /// Tokenize the remaining input
    ///
    /// The result always ends with exactly one end-of-file token. Unknown
    /// characters are skipped and recorded in [`Lexer::skipped`].
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(&(offset, ch)) = self.chars.peek() {
            if chars::is_whitespace(ch) {
                self.chars.next();
            } else if chars::is_word_start(ch) {
                tokens.push(self.scan_word(offset));
            } else if chars::is_digit(ch) {
                tokens.push(self.scan_number(offset));
            } else if chars::is_symbol(ch) {
                self.chars.next();
                tokens.push(Token::new(TokenKind::Symbol, ch.to_string()));
            } else {
                trace!(offset, character = ?ch, "skipping unknown character");
                self.skipped.push(SkippedChar { offset, character: ch });
                self.chars.next();
            }
        }

        tokens.push(Token::eof());
        debug!(tokens = tokens.len(), skipped = self.skipped.len(), "tokenized source");
        tokens
    }

    /// Characters skipped so far, in source order
    pub fn skipped(&self) -> &[SkippedChar] {
        &self.skipped
    }

    /// Scan an identifier or keyword
    fn scan_word(&mut self, start: usize) -> Token {
        let lexeme = self.scan_while(start, chars::is_word_continue);
        let kind = if Keyword::from_str(lexeme).is_some() { TokenKind::Keyword } else { TokenKind::Identifier };
        Token::new(kind, lexeme)
    }

    /// Scan an unsigned integer literal
    fn scan_number(&mut self, start: usize) -> Token {
        let lexeme = self.scan_while(start, chars::is_digit);
        Token::new(TokenKind::Number, lexeme)
    }

    /// Consume characters while `accept` holds and return the consumed slice
    fn scan_while(&mut self, start: usize, accept: fn(char) -> bool) -> &'a str {
        while self.chars.next_if(|&(_, ch)| accept(ch)).is_some() {}
        let end = self.chars.peek().map_or(self.source.len(), |&(offset, _)| offset);
        &self.source[start..end]
    }
}

/// Tokenize `source`, silently skipping unknown characters
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

/// Tokenize `source`, failing on the first unknown character
pub fn tokenize_strict(source: &str) -> ParseResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();

    match lexer.skipped().first() {
        Some(skipped) => Err(ParseError::lexical_error(skipped.offset, skipped.character)),
        None => Ok(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexer_records_skipped_characters() {
        let mut lexer = Lexer::new("a\u{e9}b ~ c\u{1F600}");
        let tokens = lexer.tokenize();

        assert_eq!(tokens.len(), 5); // a b ~ c EOF
        assert_eq!(
            lexer.skipped(),
            &[SkippedChar { offset: 1, character: '\u{e9}' }, SkippedChar { offset: 8, character: '\u{1F600}' }]
        );
    }

    #[test]
    fn test_scan_word_stops_at_symbol() {
        let tokens = tokenize("abc(");
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "abc"));
        assert_eq!(tokens[1], Token::new(TokenKind::Symbol, "("));
    }

    #[test]
    fn test_strict_tokenize() {
        assert!(tokenize_strict("x = 1 ;").is_ok());

        let error = tokenize_strict("x = 1 \u{a7};").unwrap_err();
        assert_eq!(error, ParseError::lexical_error(6, '\u{a7}'));
    }
}
