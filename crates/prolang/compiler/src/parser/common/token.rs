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

//! Token definitions for the Prolang language

use serde::Serialize;
use std::fmt;

/// A token in the source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The class of the token
    pub kind: TokenKind,
    /// The exact source text that produced this token (empty for end of file)
    pub text: String,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// Create the end-of-file sentinel
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfFile, String::new())
    }

    /// Check if this token is the end-of-file sentinel
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Check if this token is the given punctuation symbol
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == symbol
    }

    /// Check if this token is the given reserved word
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.as_keyword() == Some(keyword)
    }

    /// Get the keyword if this token is a keyword
    pub fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_str(&self.text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => write!(f, "end of file"),
            TokenKind::Keyword => write!(f, "keyword '{}'", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number '{}'", self.text),
            TokenKind::Symbol => write!(f, "symbol '{}'", self.text),
        }
    }
}

/// Classes of tokens in the Prolang language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Symbol,
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::EndOfFile => "END_OF_FILE",
        };
        f.write_str(name)
    }
}

/// Reserved words of the Prolang language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Def,
    Int,
    If,
    Else,
    Elif,
    Return,
    While,
}

impl Keyword {
    /// Every reserved word, in declaration order
    pub const ALL: [Keyword; 7] = [Keyword::Def, Keyword::Int, Keyword::If, Keyword::Else, Keyword::Elif, Keyword::Return, Keyword::While];

    /// Look up a keyword by its exact spelling
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "def" => Some(Keyword::Def),
            "int" => Some(Keyword::Int),
            "if" => Some(Keyword::If),
            "else" => Some(Keyword::Else),
            "elif" => Some(Keyword::Elif),
            "return" => Some(Keyword::Return),
            "while" => Some(Keyword::While),
            _ => None,
        }
    }

    /// Get the source spelling of the keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Def => "def",
            Keyword::Int => "int",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Elif => "elif",
            Keyword::Return => "return",
            Keyword::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a token sequence one token per line
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("Token: {}, Value: {}\n", token.kind, token.text)).collect()
}
