//! Error types for the front end.
//!
//! Lexing and parsing problems are described by an `ErrorImpl` variant
//! wrapped in an `Error`. The parser never returns these eagerly; it
//! records them as diagnostics and keeps going.

pub mod errors;

#[cfg(test)]
mod tests;
