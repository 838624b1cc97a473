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

//! Prolang syntax analysis
//!
//! Recursive descent over a token slice with one cursor. Grammar:
//!
//! ```text
//! Program             := Statement* EndOfFile
//! Statement           := FunctionDef | ExpressionStatement
//! ExpressionStatement := Expression ';'
//! FunctionDef         := 'def' Identifier '(' ParamList? ')' '{' Statement* '}'
//! ParamList           := Identifier (',' Identifier)*
//! Expression          := Primary (BinOp Primary)*
//! Primary             := Number | Identifier | FunctionCall | Assignment | TypedDecl
//! Assignment          := Identifier '=' Expression
//! TypedDecl           := 'int' Identifier '=' Expression
//! FunctionCall        := Identifier '(' ArgList? ')'
//! ArgList             := Expression (',' Expression)*
//! BinOp               := '+' | '-' | '*' | '/' | '<' '<' | '>' '>'
//! ```
//!
//! All binary operators share one precedence tier and fold to the left.

use crate::ast::{AstNode, BinaryOperator, Block, Identifier, TypeAnnotation};
use crate::parser::common::{Keyword, ParseError, ParseResult, ParserConfig, Token, TokenKind};
use tracing::{debug, trace};

/// Returned by the cursor once it runs past the end of a slice that lacks a
/// trailing end-of-file token.
static EOF: Token = Token {
    kind: TokenKind::EndOfFile,
    text: String::new(),
};

/// Prolang syntax parser
pub struct SyntaxParser<'t> {
    tokens: &'t [Token],
    current: usize,
    depth: usize,
    config: ParserConfig,
}

impl<'t> SyntaxParser<'t> {
    /// Create a parser over `tokens` with the default configuration
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    /// Create a parser over `tokens` with a custom configuration
    pub fn with_config(tokens: &'t [Token], config: ParserConfig) -> Self {
        Self { tokens, current: 0, depth: 0, config }
    }

    /// Index of the token under the cursor
    pub fn position(&self) -> usize {
        self.current
    }

    /// Check if the cursor rests on the end-of-file token
    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    /// Move the cursor back to the first token
    pub fn reset(&mut self) {
        self.current = 0;
        self.depth = 0;
    }

    /// Parse the whole token sequence as a program
    pub fn parse_program(&mut self) -> ParseResult<Block> {
        let mut program = Block::new();

        while !self.is_at_end() {
            program.add_statement(self.parse_statement()?);
        }

        debug!(statements = program.len(), tokens = self.current + 1, "parsed program");
        Ok(program)
    }

    /// Parse a single statement
    pub fn parse_statement(&mut self) -> ParseResult<AstNode> {
        self.nested(|parser| {
            if parser.peek().is_keyword(Keyword::Def) {
                parser.parse_function_def()
            } else {
                let expression = parser.parse_expression()?;
                parser.expect(";")?;
                Ok(expression)
            }
        })
    }

    /// Parse an expression: a primary followed by any number of operator/primary pairs
    pub fn parse_expression(&mut self) -> ParseResult<AstNode> {
        self.nested(|parser| {
            let left = parser.parse_primary()?;
            parser.parse_binary_tail(left)
        })
    }

    fn parse_function_def(&mut self) -> ParseResult<AstNode> {
        self.expect_keyword(Keyword::Def)?;
        let name = self.expect_identifier("function name")?;
        trace!(%name, "function definition");

        self.expect("(")?;
        let mut parameters = Vec::new();
        if !self.peek().is_symbol(")") {
            parameters.push(self.expect_identifier("parameter name")?);
            while self.peek().is_symbol(",") {
                self.advance();
                parameters.push(self.expect_identifier("parameter name")?);
            }
        }
        self.expect(")")?;

        let body = self.parse_body().map_err(|error| within(error, || format!("body of function '{}'", name)))?;
        Ok(AstNode::FunctionDef { name, parameters, body })
    }

    /// Parse `'{' Statement* '}'`
    fn parse_body(&mut self) -> ParseResult<Block> {
        self.expect("{")?;
        let mut body = Block::new();
        while !self.peek().is_symbol("}") && !self.is_at_end() {
            body.add_statement(self.parse_statement()?);
        }
        self.expect("}")?;
        Ok(body)
    }

    /// Fold `(BinOp Primary)*` onto `left`
    fn parse_binary_tail(&mut self, mut left: AstNode) -> ParseResult<AstNode> {
        while let Some((operator, width)) = self.peek_binary_operator() {
            for _ in 0..width {
                self.advance();
            }
            let right = self.parse_primary()?;
            left = AstNode::binary(operator, left, right);
        }
        Ok(left)
    }

    /// Recognise the operator under the cursor and the number of tokens it spans
    fn peek_binary_operator(&self) -> Option<(BinaryOperator, usize)> {
        let token = self.peek();
        if token.kind != TokenKind::Symbol {
            return None;
        }

        match token.text.as_str() {
            "+" => Some((BinaryOperator::Add, 1)),
            "-" => Some((BinaryOperator::Subtract, 1)),
            "*" => Some((BinaryOperator::Multiply, 1)),
            "/" => Some((BinaryOperator::Divide, 1)),
            "<" if self.peek_at(1).is_symbol("<") => Some((BinaryOperator::ShiftLeft, 2)),
            ">" if self.peek_at(1).is_symbol(">") => Some((BinaryOperator::ShiftRight, 2)),
            _ => None,
        }
    }

    fn parse_primary(&mut self) -> ParseResult<AstNode> {
        let token = self.peek();

        match token.kind {
            TokenKind::Identifier => {
                let next = self.peek_at(1);
                if next.is_symbol("(") {
                    self.parse_function_call()
                } else if next.is_symbol("=") {
                    self.parse_assignment(None)
                } else {
                    self.advance();
                    Ok(AstNode::identifier(token.text.as_str()))
                }
            }
            TokenKind::Number => {
                let value = token.text.parse::<i64>().map_err(|_| ParseError::invalid_number(self.current, token.text.as_str()))?;
                self.advance();
                Ok(AstNode::NumberLiteral(value))
            }
            TokenKind::Keyword if token.is_keyword(Keyword::Int) => {
                self.advance();
                let annotation = self.config.preserve_type_annotations.then_some(TypeAnnotation::Int);
                self.parse_assignment(annotation)
            }
            _ => Err(self.error("expression")),
        }
    }

    /// Parse `Identifier '=' Expression`
    fn parse_assignment(&mut self, type_annotation: Option<TypeAnnotation>) -> ParseResult<AstNode> {
        let target = self.expect_identifier("variable name")?;
        self.expect("=")?;
        trace!(%target, "assignment");
        let value = self.parse_expression()?;

        Ok(AstNode::Assignment {
            target: Identifier::new(target),
            value: Box::new(value),
            type_annotation,
        })
    }

    /// Parse `Identifier '(' ArgList? ')'`
    fn parse_function_call(&mut self) -> ParseResult<AstNode> {
        let name = self.expect_identifier("function name")?;
        trace!(%name, "function call");
        self.expect("(")?;

        let mut arguments = Vec::new();
        if !self.peek().is_symbol(")") {
            arguments.push(self.parse_expression()?);
            while self.peek().is_symbol(",") {
                self.advance();
                arguments.push(self.parse_expression()?);
            }
        }
        self.expect(")").map_err(|error| within(error, || format!("arguments of call to '{}'", name)))?;

        Ok(AstNode::FunctionCall { name, arguments })
    }

    /// Consume the symbol `symbol` or fail without moving the cursor
    fn expect(&mut self, symbol: &str) -> ParseResult<()> {
        if self.peek().is_symbol(symbol) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("'{}'", symbol)))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        if self.peek().is_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(format!("keyword '{}'", keyword)))
        }
    }

    /// Consume an identifier and return its name
    fn expect_identifier(&mut self, what: &str) -> ParseResult<String> {
        let token = self.peek();
        if token.kind == TokenKind::Identifier {
            self.advance();
            Ok(token.text.clone())
        } else {
            Err(self.error(what))
        }
    }

    /// Syntax error for the token under the cursor
    fn error(&self, expected: impl Into<String>) -> ParseError {
        ParseError::syntax_error(self.current, expected, self.peek().clone())
    }

    /// Run `rule` one nesting level deeper, failing past the configured limit
    fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.config.max_recursion_depth {
            return Err(ParseError::recursion_limit(self.current, self.config.max_recursion_depth));
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    fn peek(&self) -> &'t Token {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> &'t Token {
        let tokens: &'t [Token] = self.tokens;
        // Nothing past the first end-of-file token is visible
        match tokens[self.current.min(tokens.len())..].iter().take(offset + 1).position(Token::is_eof) {
            Some(eof) => &tokens[self.current + eof],
            None => tokens.get(self.current + offset).unwrap_or(&EOF),
        }
    }

    /// Step past the current token; the cursor never moves beyond end of file
    fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }
}

/// Attach `context` to an error that has none yet
fn within(error: ParseError, context: impl FnOnce() -> String) -> ParseError {
    if error.context.is_some() { error } else { error.with_context(context()) }
}

/// Parse a token sequence with the default configuration
pub fn parse(tokens: &[Token]) -> ParseResult<Block> {
    SyntaxParser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::prolang::lexer::tokenize;

    #[test]
    fn test_cursor_stops_at_eof() {
        let tokens = tokenize("x");
        let mut parser = SyntaxParser::new(&tokens);

        parser.advance();
        parser.advance();
        parser.advance();
        assert_eq!(parser.position(), 1);
        assert!(parser.is_at_end());
    }

    #[test]
    fn test_missing_eof_sentinel_is_tolerated() {
        let tokens = vec![Token::new(TokenKind::Identifier, "x"), Token::new(TokenKind::Symbol, "=")];
        let error = parse(&tokens).unwrap_err();

        assert!(error.is_incomplete());
        assert_eq!(error.position, 2);
    }

    #[test]
    fn test_lookahead_does_not_cross_eof() {
        // A stray token after the sentinel must not turn `f` into a call
        let tokens = vec![Token::new(TokenKind::Identifier, "f"), Token::eof(), Token::new(TokenKind::Symbol, "(")];
        let parser = SyntaxParser::new(&tokens);

        assert!(parser.peek_at(1).is_eof());
        assert!(parser.peek_at(2).is_eof());
    }

    #[test]
    fn test_expect_does_not_advance_on_mismatch() {
        let tokens = tokenize("( x");
        let mut parser = SyntaxParser::new(&tokens);

        assert!(parser.expect(")").is_err());
        assert_eq!(parser.position(), 0);
        assert!(parser.expect("(").is_ok());
        assert_eq!(parser.position(), 1);
    }

    #[test]
    fn test_reset() {
        let tokens = tokenize("x ;");
        let mut parser = SyntaxParser::new(&tokens);
        assert!(parser.parse_program().is_ok());
        assert!(parser.is_at_end());

        parser.reset();
        assert_eq!(parser.position(), 0);
        assert_eq!(parser.parse_program().map(|program| program.len()), Ok(1));
    }
}
