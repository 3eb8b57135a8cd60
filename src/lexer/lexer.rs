use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenSource, RESERVED_LOOKUP};

/// Turns the matched text into a token, or `None` when the text is skipped.
pub type RegexHandler = fn(&str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        // Every pattern is anchored so a match always starts at the cursor.
        regex: Regex::new(&format!("^(?:{})", regex)).expect("lexer pattern must compile"),
        handler,
    }
}

lazy_static! {
    // Order matters: two-character operators must be tried before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("[0-9]+", number_handler),
        pattern("\\s+", skip_handler),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("!", MK_DEFAULT_HANDLER!(TokenKind::Bang, "!")),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Assign, "=")),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Asterisk, "*")),
    ];
}

/// Pull-based lexer over an owned source string.
///
/// Tokens are produced lazily through [`TokenSource::next_token`]. Characters
/// that no pattern recognises come out as single `Illegal` tokens so the
/// stream never stalls.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        loop {
            let remaining = self.remainder();
            let Some(first) = remaining.chars().next() else {
                return MK_TOKEN!(TokenKind::EOF, "");
            };

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .map(|found| (pattern.handler, found.as_str().to_string()))
            });

            match matched {
                Some((handler, text)) => {
                    self.advance_n(text.len());
                    if let Some(token) = handler(&text) {
                        trace!(kind = %token.kind, value = %token.value, "lexed token");
                        return token;
                    }
                }
                None => {
                    self.advance_n(first.len_utf8());
                    trace!(value = %first, "illegal character");
                    return MK_TOKEN!(TokenKind::Illegal, first.to_string());
                }
            }
        }
    }
}

fn number_handler(matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Int, matched))
}

fn skip_handler(_matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, matched))
}

/// Lexes a whole source string up front.
///
/// The returned vector always ends with exactly one `EOF` token. The first
/// unrecognised character aborts with `UnrecognisedToken`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        match token.kind {
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            TokenKind::Illegal => {
                return Err(Error::new(ErrorImpl::UnrecognisedToken {
                    token: token.value,
                }));
            }
            _ => tokens.push(token),
        }
    }
}
