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

#[cfg(test)]
mod tests {
    use crate::parser::common::{Token, TokenKind};
    use crate::parser::prolang::lexer::tokenize;

    fn keyword(text: &str) -> Token {
        Token::new(TokenKind::Keyword, text)
    }

    fn identifier(text: &str) -> Token {
        Token::new(TokenKind::Identifier, text)
    }

    fn number(text: &str) -> Token {
        Token::new(TokenKind::Number, text)
    }

    fn symbol(text: &str) -> Token {
        Token::new(TokenKind::Symbol, text)
    }

    #[test]
    fn test_tokenize_empty_input() {
        let input = "";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![Token::eof()]);
    }

    #[test]
    fn test_tokenize_whitespace() {
        let input = "   \t\n\r\x0b\x0c  ";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![Token::eof()]);
    }

    #[test]
    fn test_tokenize_single_char_symbols() {
        let input = "+ - * / ; ( ) { } , =";
        let tokens = tokenize(input);
        let expected: Vec<Token> = input.split_whitespace().map(symbol).chain([Token::eof()]).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_tokenize_multi_char_operators_are_split() {
        let tokens = tokenize("a<<b>>=c");
        assert_eq!(
            tokens,
            vec![
                identifier("a"),
                symbol("<"),
                symbol("<"),
                identifier("b"),
                symbol(">"),
                symbol(">"),
                symbol("="),
                identifier("c"),
                Token::eof()
            ]
        );
    }

    #[test]
    fn test_tokenize_numbers() {
        let input = "123 456 007";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![number("123"), number("456"), number("007"), Token::eof()]);
    }

    #[test]
    fn test_tokenize_number_then_word() {
        // A word cannot start with a digit
        let tokens = tokenize("12abc 3.5");
        assert_eq!(
            tokens,
            vec![number("12"), identifier("abc"), number("3"), symbol("."), number("5"), Token::eof()]
        );
    }

    #[test]
    fn test_tokenize_identifiers() {
        let input = "abc x1y2 A";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![identifier("abc"), identifier("x1y2"), identifier("A"), Token::eof()]);
    }

    #[test]
    fn test_underscore_is_a_symbol() {
        let tokens = tokenize("x_y");
        assert_eq!(tokens, vec![identifier("x"), symbol("_"), identifier("y"), Token::eof()]);
    }

    #[test]
    fn test_tokenize_keywords() {
        let input = "def int if else return while elif";
        let tokens = tokenize(input);
        let expected: Vec<Token> = input.split_whitespace().map(keyword).chain([Token::eof()]).collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_keyword_prefixes_are_identifiers() {
        let tokens = tokenize("define integer If returned");
        assert_eq!(
            tokens,
            vec![identifier("define"), identifier("integer"), identifier("If"), identifier("returned"), Token::eof()]
        );
    }

    #[test]
    fn test_tokenize_mixed_input() {
        let input = "int x = 10 + 20; if (x > 10) return x;";
        let tokens = tokenize(input);
        assert_eq!(
            tokens,
            vec![
                keyword("int"),
                identifier("x"),
                symbol("="),
                number("10"),
                symbol("+"),
                number("20"),
                symbol(";"),
                keyword("if"),
                symbol("("),
                identifier("x"),
                symbol(">"),
                number("10"),
                symbol(")"),
                keyword("return"),
                identifier("x"),
                symbol(";"),
                Token::eof()
            ]
        );
    }

    #[test]
    fn test_tokenize_ignore_invalid_chars() {
        let input = "abc\u{e9}xyz\u{7f}12";
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![identifier("abc"), identifier("xyz"), number("12"), Token::eof()]);

        // Skipped characters still split words, so a reserved word stays a keyword
        let tokens = tokenize("abc\u{e9}def");
        assert_eq!(tokens, vec![identifier("abc"), keyword("def"), Token::eof()]);
    }
}
