//! Front end for the collver stack language.
//!
//! Turns raw source bytes into an ordered stream of typed tokens:
//! a growable vector container, a newline line splitter, and a
//! character-level tokenizer that classifies each run of bytes as an
//! integer, a quoted string, or a bare word.
//!
//! # Quick start
//!
//! ```
//! use collver::{TokenValue, tokenize};
//!
//! let tokens = tokenize(b"42 \"hi there\" foo", "demo.collver");
//!
//! // Every source starts with `include "intrinsics.collver"`.
//! assert_eq!(tokens[0].value, TokenValue::Word("include".into()));
//! assert_eq!(tokens[2].value, TokenValue::Integer(42));
//! assert_eq!(tokens[3].value, TokenValue::String("hi there".into()));
//! assert_eq!(tokens[4].span.col, 14);
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
pub mod lines;
pub mod source;
pub mod token;
pub mod vector;

use std::path::Path;

pub use lexer::{DEFAULT_PRELUDE, LexOptions, Lexer, tokenize};
pub use lines::split_lines;
pub use source::{SourceError, read_source};
pub use token::{Span, Token, TokenKind, TokenValue};
pub use vector::{GrowVec, VectorError};

/// Unified error type for the front end.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the source file failed.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// A checked vector access failed.
    ///
    /// The library itself never produces this; it lets callers chain
    /// [`GrowVec::pop`] and [`GrowVec::elem_cloned`] with `?` alongside
    /// source errors.
    #[error(transparent)]
    Vector(#[from] VectorError),
}

/// A lexed source file: its lines and its token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexedFile {
    pub lines: GrowVec<Vec<u8>>,
    pub tokens: GrowVec<Token>,
}

/// Read, split, and tokenize the file at `path` in one step.
///
/// Tokens carry `path` as their file name.
pub fn lex_file(path: &Path, options: &LexOptions) -> Result<LexedFile, Error> {
    let bytes = read_source(path)?;
    let lines = split_lines(&bytes);
    let file = path.to_string_lossy();
    let tokens = Lexer::new(&file, options).lex_lines(&lines);
    Ok(LexedFile { lines, tokens })
}
