use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Int,

    OpenParen,
    CloseParen,

    Assign,    // =
    Equals,    // ==
    Bang,      // !
    NotEquals, // !=

    Less,
    Greater,

    Semicolon,

    Plus,
    Minus,
    Slash,
    Asterisk,

    // Reserved
    Let,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical token: its kind and the literal text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::EOF, "")
    }
}

/// Anything that hands out tokens one at a time.
///
/// Implementations must be total: once the input is exhausted every further
/// call returns an `EOF` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Adapts an already tokenized buffer into a [`TokenSource`].
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        self.tokens.next().unwrap_or_else(Token::eof)
    }
}

/// Reads tokens from a borrowed buffer without taking ownership of it.
#[derive(Debug, Clone)]
pub struct TokenSlice<'a> {
    tokens: std::slice::Iter<'a, Token>,
}

impl<'a> TokenSlice<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice {
            tokens: tokens.iter(),
        }
    }
}

impl TokenSource for TokenSlice<'_> {
    fn next_token(&mut self) -> Token {
        self.tokens.next().cloned().unwrap_or_else(Token::eof)
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Token {
        (**self).next_token()
    }
}
