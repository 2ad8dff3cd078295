use std::rc::Rc;

use crate::lines::split_lines;
use crate::token::{Span, Token, TokenValue};
use crate::vector::GrowVec;

/// Support library pulled in ahead of every source file.
pub const DEFAULT_PRELUDE: &str = "intrinsics.collver";

/// Lexer configuration.
///
/// ```
/// use collver::LexOptions;
///
/// let opts = LexOptions::new()
///     .prelude("core.collver")
///     .line_comments(true)
///     .escapes(true);
/// assert_eq!(opts.prelude_name(), "core.collver");
/// assert!(opts.has_escapes());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexOptions {
    prelude: String,
    line_comments: bool,
    escapes: bool,
}

impl LexOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file named by the bootstrap `include`.
    #[must_use]
    pub fn prelude(mut self, name: impl Into<String>) -> Self {
        self.prelude = name.into();
        self
    }

    /// Drop everything after `//` outside of strings.
    #[must_use]
    pub const fn line_comments(mut self, enabled: bool) -> Self {
        self.line_comments = enabled;
        self
    }

    /// Translate `\n` and `\r` inside strings to LF and CR.
    #[must_use]
    pub const fn escapes(mut self, enabled: bool) -> Self {
        self.escapes = enabled;
        self
    }

    #[must_use]
    pub fn prelude_name(&self) -> &str {
        &self.prelude
    }

    #[must_use]
    pub const fn has_line_comments(&self) -> bool {
        self.line_comments
    }

    #[must_use]
    pub const fn has_escapes(&self) -> bool {
        self.escapes
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            prelude: DEFAULT_PRELUDE.to_string(),
            line_comments: false,
            escapes: false,
        }
    }
}

/// Tokenize a collver source buffer with the default options.
///
/// The result always starts with the two bootstrap tokens
/// `include "intrinsics.collver"`.
///
/// ```
/// use collver::{TokenKind, tokenize};
///
/// let tokens = tokenize(b"1 2 +", "add.collver");
/// assert_eq!(tokens.count(), 5);
/// assert_eq!(tokens[2].kind(), TokenKind::Integer);
/// ```
#[must_use]
pub fn tokenize(source: &[u8], file: &str) -> GrowVec<Token> {
    let lines = split_lines(source);
    Lexer::new(file, &LexOptions::default()).lex_lines(&lines)
}

/// Line-oriented tokenizer for one source file.
pub struct Lexer<'o> {
    file: Rc<str>,
    options: &'o LexOptions,
}

impl<'o> Lexer<'o> {
    #[must_use]
    pub fn new(file: &str, options: &'o LexOptions) -> Self {
        Self {
            file: Rc::from(file),
            options,
        }
    }

    /// Lex every line, preceded by the bootstrap tokens.
    #[must_use]
    pub fn lex_lines(&self, lines: &GrowVec<Vec<u8>>) -> GrowVec<Token> {
        let mut tokens = GrowVec::new();
        self.push_bootstrap(&mut tokens);

        for (row, line) in lines.iter().enumerate() {
            self.lex_line(row, line, &mut tokens);
        }

        log::debug!(
            "{}: {} line(s), {} token(s)",
            self.file,
            lines.count(),
            tokens.count()
        );
        tokens
    }

    /// Lex a single line, appending its tokens to `out`.
    ///
    /// Columns are byte offsets into `line`.
    pub fn lex_line(&self, row: usize, line: &[u8], out: &mut GrowVec<Token>) {
        let mut scan = Pending::new();

        for (col, &byte) in line.iter().enumerate() {
            if scan.is_string {
                if byte == b'"' {
                    out.push(self.make_token(scan.take(), row));
                } else if self.options.escapes && scan.ends_with_backslash() {
                    scan.append_escaped(byte);
                } else {
                    scan.append(byte, col);
                }
                continue;
            }

            match byte {
                b' ' => {
                    if !scan.is_empty() {
                        out.push(self.make_token(scan.take(), row));
                    }
                }
                b'"' if scan.is_empty() => scan.open_string(col),
                b'/' if self.options.line_comments && scan.buf == b"/" => {
                    scan = Pending::new();
                    break;
                }
                _ => scan.append(byte, col),
            }
        }

        if !scan.is_empty() {
            out.push(self.make_token(scan.take(), row));
        }
    }

    fn push_bootstrap(&self, out: &mut GrowVec<Token>) {
        out.push(Token {
            value: TokenValue::Word("include".to_string()),
            span: self.span(0, 0),
        });
        out.push(Token {
            value: TokenValue::String(self.options.prelude.clone()),
            span: self.span(0, 0),
        });
    }

    fn make_token(&self, lexeme: Lexeme, row: usize) -> Token {
        let token = Token {
            value: lexeme.value,
            span: self.span(row, lexeme.col),
        };
        log::trace!("{token}");
        token
    }

    fn span(&self, row: usize, col: usize) -> Span {
        Span {
            file: Rc::clone(&self.file),
            row,
            col,
        }
    }
}

/// Classified text of a finished token and the column it started at.
struct Lexeme {
    value: TokenValue,
    col: usize,
}

/// Bytes of the token being scanned plus its classification flags.
struct Pending {
    buf: Vec<u8>,
    col: usize,
    is_int: bool,
    is_string: bool,
}

impl Pending {
    const fn new() -> Self {
        Self {
            buf: Vec::new(),
            col: 0,
            is_int: true,
            is_string: false,
        }
    }

    fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    const fn open_string(&mut self, col: usize) {
        self.is_string = true;
        self.col = col;
    }

    fn ends_with_backslash(&self) -> bool {
        self.buf.last() == Some(&b'\\')
    }

    /// Byte following a backslash inside a string.
    fn append_escaped(&mut self, byte: u8) {
        let translated = match byte {
            b'n' => b'\n',
            b'r' => b'\r',
            other => {
                self.buf.push(other);
                return;
            }
        };
        self.buf.pop();
        self.buf.push(translated);
    }

    fn append(&mut self, byte: u8, col: usize) {
        if self.buf.is_empty() && !self.is_string {
            self.col = col;
        }
        if !self.is_string && !byte.is_ascii_digit() {
            self.is_int = false;
        }
        self.buf.push(byte);
    }

    /// Classify the buffered bytes and reset for the next token.
    fn take(&mut self) -> Lexeme {
        let done = std::mem::replace(self, Self::new());
        let value = if done.is_string {
            TokenValue::String(String::from_utf8_lossy(&done.buf).into_owned())
        } else if done.is_int {
            TokenValue::Integer(parse_decimal(&done.buf))
        } else {
            TokenValue::Word(String::from_utf8_lossy(&done.buf).into_owned())
        };
        Lexeme {
            value,
            col: done.col,
        }
    }
}

/// Unsigned decimal accumulation; wraps on overflow.
fn parse_decimal(digits: &[u8]) -> i64 {
    digits.iter().fold(0_i64, |acc, &d| {
        acc.wrapping_mul(10).wrapping_add(i64::from(d - b'0'))
    })
}
