#![allow(clippy::module_inception)]

//! Front end for a small expression language.
//!
//! Source text is turned into tokens by [`lexer`], then into a
//! [`ast::ast::Program`] by the Pratt parser in [`parser`]. Malformed input
//! never aborts the parse; problems are collected as [`errors`] diagnostics
//! and handed back alongside the (possibly partial) program.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

use crate::{ast::ast::Program, errors::errors::Error, lexer::lexer::Lexer};

/// Lexes and parses `source` in one go.
pub fn parse_source(source: &str) -> (Program, Vec<Error>) {
    let (parser, program) = parser::parser::parse(Lexer::new(source));

    (program, parser.diagnostics().to_vec())
}
