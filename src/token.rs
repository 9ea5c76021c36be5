//! Token model: the closed set of lexical categories the lexer can
//! produce, plus the keyword lookup table.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// The kind of a single token. Closed enumeration — the parser treats
/// any kind not explicitly handled as a syntax error rather than
/// guessing at intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Unknown,
    Number,
    Identifier,
    Equals,
    EqualsInfix,
    NotEquals,
    SemiColon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Bang,
    LessThan,
    GreaterThan,
    String,
    VariableDeclaration,
    Function,
    Return,
    True,
    False,
    If,
    Else,
    While,
    Colon,
    Eof,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A single lexed token: its kind plus the exact source text it came
/// from (the lexeme). AST nodes keep a copy of the token that produced
/// them so their `Display` impl and diagnostics can recover the
/// original surface syntax without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("var", TokenKind::VariableDeclaration);
    m.insert("func", TokenKind::Function);
    m.insert("return", TokenKind::Return);
    m.insert("true", TokenKind::True);
    m.insert("false", TokenKind::False);
    m.insert("if", TokenKind::If);
    m.insert("else", TokenKind::Else);
    m.insert("while", TokenKind::While);
    m
});

/// Looks up `ident` in the keyword table, falling back to a plain
/// identifier when it isn't a reserved word.
pub fn lookup_identifier(ident: &str) -> TokenKind {
    KEYWORDS.get(ident).copied().unwrap_or(TokenKind::Identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_resolve_to_their_kind() {
        assert_eq!(lookup_identifier("var"), TokenKind::VariableDeclaration);
        assert_eq!(lookup_identifier("func"), TokenKind::Function);
        assert_eq!(lookup_identifier("while"), TokenKind::While);
    }

    #[test]
    fn unknown_words_are_plain_identifiers() {
        assert_eq!(lookup_identifier("triple"), TokenKind::Identifier);
        assert_eq!(lookup_identifier("x"), TokenKind::Identifier);
    }
}
