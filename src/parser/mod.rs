//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses a Pratt parser for expressions with operator
//! precedence and handles:
//!
//! - Statement dispatch (`let`, `return`, expression statements)
//! - Prefix and infix expressions, grouped with parentheses
//! - Diagnostics that are recorded instead of aborting the parse
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
