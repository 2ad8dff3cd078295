#![allow(dead_code)]

use collver::{GrowVec, LexOptions, Lexer, Token, TokenValue, split_lines, tokenize};

pub const FILE: &str = "test.collver";

/// Tokenize `input` and drop the two bootstrap tokens.
pub fn lex_body(input: &str) -> Vec<Token> {
    let tokens = tokenize(input.as_bytes(), FILE);
    tokens.iter().skip(2).cloned().collect()
}

/// Tokenize with custom options, bootstrap tokens included.
pub fn lex_with(input: &str, options: &LexOptions) -> GrowVec<Token> {
    let lines = split_lines(input.as_bytes());
    Lexer::new(FILE, options).lex_lines(&lines)
}

/// `(value, row, col)` triples for compact assertions.
pub fn triples(tokens: &[Token]) -> Vec<(TokenValue, usize, usize)> {
    tokens
        .iter()
        .map(|t| (t.value.clone(), t.span.row, t.span.col))
        .collect()
}

pub fn int(n: i64) -> TokenValue {
    TokenValue::Integer(n)
}

pub fn string(s: &str) -> TokenValue {
    TokenValue::String(s.to_string())
}

pub fn word(s: &str) -> TokenValue {
    TokenValue::Word(s.to_string())
}
