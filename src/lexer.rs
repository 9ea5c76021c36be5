//! Byte-at-a-time scanner producing [`Token`]s.
//!
//! The lexer is infallible: anything it can't classify becomes a
//! [`TokenKind::Unknown`] token and the parser is left to reject it.

use crate::token::{lookup_identifier, Token, TokenKind};

pub struct Lexer {
    input: Vec<u8>,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.as_bytes().to_vec(),
            position: 0,
            read_position: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> u8 {
        if self.read_position >= self.input.len() {
            0
        } else {
            self.input[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_identifier_byte(self.ch) {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Reads a string literal's inner content. No escape processing is
    /// defined: the bytes between the quotes are copied verbatim.
    fn read_string(&mut self) -> String {
        let start = self.position + 1;
        loop {
            self.read_char();
            if self.ch == b'"' || self.ch == 0 {
                break;
            }
        }
        String::from_utf8_lossy(&self.input[start..self.position]).into_owned()
    }

    /// Produces the next token, advancing past whatever it consumed.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::EqualsInfix, "==")
                } else {
                    Token::new(TokenKind::Equals, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEquals, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b';' => Token::new(TokenKind::SemiColon, ";"),
            b'(' => Token::new(TokenKind::LeftParen, "("),
            b')' => Token::new(TokenKind::RightParen, ")"),
            b'{' => Token::new(TokenKind::LeftBrace, "{"),
            b'}' => Token::new(TokenKind::RightBrace, "}"),
            b'[' => Token::new(TokenKind::LeftBracket, "["),
            b']' => Token::new(TokenKind::RightBracket, "]"),
            b',' => Token::new(TokenKind::Comma, ","),
            b'+' => Token::new(TokenKind::Plus, "+"),
            b'-' => Token::new(TokenKind::Minus, "-"),
            b'*' => Token::new(TokenKind::Asterisk, "*"),
            b'/' => Token::new(TokenKind::Slash, "/"),
            b'<' => Token::new(TokenKind::LessThan, "<"),
            b'>' => Token::new(TokenKind::GreaterThan, ">"),
            b':' => Token::new(TokenKind::Colon, ":"),
            b'"' => {
                let literal = self.read_string();
                Token::new(TokenKind::String, literal)
            }
            0 => Token::eof(),
            ch if is_identifier_start(ch) => {
                // read_identifier already advances past the whole run,
                // so we return early to skip the trailing read_char().
                let literal = self.read_identifier();
                let kind = lookup_identifier(&literal);
                return Token::new(kind, literal);
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Number, literal);
            }
            ch => Token::new(TokenKind::Unknown, (ch as char).to_string()),
        };

        self.read_char();
        token
    }
}

fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_identifier_byte(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = vec![];
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    #[test]
    fn lexes_punctuation_and_operators() {
        let tokens = lex_all("=+(){},;![]:");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Equals,
                TokenKind::Plus,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::SemiColon,
                TokenKind::Bang,
                TokenKind::LeftBracket,
                TokenKind::RightBracket,
                TokenKind::Colon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_multi_char_operators() {
        let tokens = lex_all("== != = !");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::EqualsInfix,
                TokenKind::NotEquals,
                TokenKind::Equals,
                TokenKind::Bang,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_keywords_and_identifiers() {
        let tokens = lex_all("var x = func while true false if else return");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::VariableDeclaration,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Function,
                TokenKind::While,
                TokenKind::True,
                TokenKind::False,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Return,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_numbers_and_strings() {
        let tokens = lex_all(r#"5 "hello world""#);
        assert_eq!(tokens[0], Token::new(TokenKind::Number, "5"));
        assert_eq!(tokens[1], Token::new(TokenKind::String, "hello world"));
        assert_eq!(tokens[2], Token::eof());
    }

    #[test]
    fn unterminated_string_reads_to_eof_without_panicking() {
        let tokens = lex_all(r#""unterminated"#);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].literal, "unterminated");
    }

    #[test]
    fn unrecognized_bytes_become_unknown_tokens() {
        let tokens = lex_all("@");
        assert_eq!(tokens[0], Token::new(TokenKind::Unknown, "@"));
    }

    #[test]
    fn lexing_is_total_and_always_ends_in_eof() {
        for input in ["", "   \t\n", "var", "\"", "@#$"] {
            let tokens = lex_all(input);
            assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
        }
    }
}
