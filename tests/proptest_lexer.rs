//! Property-based tests for the tokenizer.

mod common;

use collver::{TokenKind, TokenValue, tokenize};
use common::{FILE, lex_body};
use proptest::prelude::*;

/// Bare word: no spaces, no quotes, not all digits.
fn bare_word() -> impl Strategy<Value = String> {
    "[a-z+*<>=!-][a-z0-9_+*<>=!-]{0,10}"
}

/// String body: printable ASCII without quotes.
fn string_body() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:;!?/-]{0,16}"
}

#[derive(Debug, Clone)]
enum Atom {
    Int(u32),
    Str(String),
    Word(String),
}

impl Atom {
    fn render(&self) -> String {
        match self {
            Self::Int(n) => n.to_string(),
            Self::Str(s) => format!("\"{s}\""),
            Self::Word(w) => w.clone(),
        }
    }

    fn expected(&self) -> TokenValue {
        match self {
            Self::Int(n) => TokenValue::Integer(i64::from(*n)),
            Self::Str(s) => TokenValue::String(s.clone()),
            Self::Word(w) => TokenValue::Word(w.clone()),
        }
    }
}

fn atom() -> impl Strategy<Value = Atom> {
    prop_oneof![
        any::<u32>().prop_map(Atom::Int),
        string_body().prop_map(Atom::Str),
        bare_word().prop_map(Atom::Word),
    ]
}

proptest! {
    /// Space-separated atoms come back as one token each, in order,
    /// with columns pointing at their first byte.
    #[test]
    fn atoms_lex_in_order(atoms in prop::collection::vec(atom(), 0..12)) {
        let rendered: Vec<String> = atoms.iter().map(Atom::render).collect();
        let line = rendered.join(" ");
        let tokens = lex_body(&line);

        prop_assert_eq!(tokens.len(), atoms.len());
        let mut col = 0;
        for ((tok, atom), text) in tokens.iter().zip(&atoms).zip(&rendered) {
            prop_assert_eq!(&tok.value, &atom.expected());
            prop_assert_eq!(tok.span.col, col);
            prop_assert_eq!(tok.span.row, 0);
            col += text.len() + 1;
        }
    }

    /// Digit runs are integers; adding any non-digit byte makes a word.
    #[test]
    fn integer_narrows_to_word(n in any::<u32>(), suffix in "[a-z_+-]{1,4}") {
        let tokens = lex_body(&n.to_string());
        prop_assert_eq!(tokens[0].kind(), TokenKind::Integer);

        let tokens = lex_body(&format!("{n}{suffix}"));
        prop_assert_eq!(tokens[0].kind(), TokenKind::Word);
    }

    /// The tokenizer accepts arbitrary bytes and always starts with the
    /// bootstrap tokens.
    #[test]
    fn never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let tokens = tokenize(&bytes, FILE);
        prop_assert!(tokens.count() >= 2);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Word);
        prop_assert_eq!(tokens[1].kind(), TokenKind::String);
    }

    /// Each emitted token lies on an existing line.
    #[test]
    fn rows_are_within_source(lines in prop::collection::vec("[a-z0-9 \"]{0,12}", 1..8)) {
        let src = lines.join("\n");
        for tok in lex_body(&src) {
            prop_assert!(tok.span.row < lines.len());
            prop_assert!(tok.span.col < lines[tok.span.row].len());
        }
    }
}
