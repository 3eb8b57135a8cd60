//! Lexical analysis module.
//!
//! This module contains the lexer that turns source text into tokens for
//! the parser. It handles:
//!
//! - Tokenization using anchored regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - The `TokenSource` abstraction the parser pulls tokens through

pub mod lexer;
pub mod tokens;
