//! Parser state and entry points.
//!
//! The `Parser` owns a two-token window (`current`, `peek`) over a
//! `TokenSource`, the diagnostics recorded so far and a reference to the
//! shared handler tables. Statement and expression parsing live in the
//! sibling `stmt` and `expr` modules as free functions over `&mut Parser`.

use std::mem;

use tracing::{debug, trace};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSource},
};

use super::{
    lookups::{BindingPower, Lookups, LOOKUPS},
    stmt::parse_stmt,
};

/// Default bound on expression nesting before the parser gives up on an
/// expression with `NestingTooDeep`.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Tunables for a parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

pub struct Parser<'a> {
    /// Where tokens are pulled from
    source: Box<dyn TokenSource + 'a>,
    /// Token under the cursor
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Shared statement, NUD, LED and binding power tables
    lookups: &'static Lookups,
    options: ParserOptions,
    /// Current expression nesting depth
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes the lookahead window so that `current`
    /// holds the first token of the source.
    pub fn new(source: impl TokenSource + 'a) -> Self {
        Parser::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: impl TokenSource + 'a, options: ParserOptions) -> Self {
        let mut parser = Parser {
            source: Box::new(source),
            current: Token::eof(),
            peek: Token::eof(),
            errors: vec![],
            lookups: &*LOOKUPS,
            options,
            depth: 0,
        };

        parser.advance();
        parser.advance();

        parser
    }

    /// Parses statements until the end marker.
    ///
    /// The cursor is advanced after every statement whether or not it
    /// parsed, which guarantees progress on malformed input. Diagnostics from
    /// earlier calls are discarded.
    pub fn parse_program(&mut self) -> Program {
        self.errors.clear();
        let mut program = Program::new();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    /// Diagnostics from the most recent `parse_program`, rendered as text.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Diagnostics from the most recent `parse_program`.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek` from the source.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = mem::replace(&mut self.peek, next);
        trace!(kind = %self.current.kind, value = %self.current.value, "advance");
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances only if `peek` is `kind`; otherwise records an
    /// `UnexpectedToken` and leaves the cursor alone.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.record(ErrorImpl::UnexpectedToken {
                expected: kind,
                found: self.peek.kind,
            });
            false
        }
    }

    pub fn current_precedence(&self) -> BindingPower {
        self.lookups.binding_power(self.current.kind)
    }

    pub fn peek_precedence(&self) -> BindingPower {
        self.lookups.binding_power(self.peek.kind)
    }

    pub fn lookups(&self) -> &'static Lookups {
        self.lookups
    }

    pub fn record(&mut self, error: ErrorImpl) {
        debug!(error = %error, "diagnostic");
        self.errors.push(Error::new(error));
    }

    /// Enters one level of expression nesting. Returns `false` (after
    /// recording `NestingTooDeep`) when the configured limit is reached.
    ///
    /// Both nested `parse_expr` calls and infix nodes folded into a left
    /// operand count as a level, so the limit bounds the height of the tree.
    pub(crate) fn enter_nesting(&mut self) -> bool {
        if self.depth >= self.options.max_nesting_depth {
            self.record(ErrorImpl::NestingTooDeep {
                limit: self.options.max_nesting_depth,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn exit_nesting(&mut self, levels: usize) {
        self.depth -= levels;
    }
}

/// Parses everything `source` produces.
///
/// Returns the parser (for its diagnostics) alongside the program, which is
/// always present but may be incomplete when diagnostics were recorded.
pub fn parse<'a>(source: impl TokenSource + 'a) -> (Parser<'a>, Program) {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    (parser, program)
}
