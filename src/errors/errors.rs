use std::fmt::{self, Display};

use thiserror::Error;

const TAB_SIZE: usize = 4;

/// The specific lexical fault that was found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("unterminated string")]
    UnterminatedString,
    #[error("unterminated char literal")]
    UnterminatedChar,
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("invalid escape sequence: \\{0}")]
    InvalidEscape(char),
    #[error("unexpected character: {0}")]
    UnexpectedCharacter(char),
}

/// A lexical error with the position of the fault and the full text of
/// the source line containing it, so the rendered message can place a
/// caret under the offending character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    kind: LexErrorKind,
    line: u32,
    col: u32,
    source_line: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, col: u32, source_line: String) -> Self {
        LexError {
            kind,
            line,
            col,
            source_line,
        }
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn col(&self) -> u32 {
        self.col
    }
}

/// Expands each tab in `line` to its next multiple-of-`TAB_SIZE` stop
/// for display. Uses the same stop rule as `visual_column` so the caret
/// line and the displayed line never disagree.
fn expand_tabs(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut visual = 0usize;
    for c in line.chars() {
        if c == '\t' {
            let width = TAB_SIZE - (visual % TAB_SIZE);
            for _ in 0..width {
                result.push(' ');
            }
            visual += width;
        } else {
            result.push(c);
            visual += 1;
        }
    }
    result
}

/// Maps a 1-based source column to the 0-based visual column in the
/// expanded line. Walks the original line up to (but excluding) the
/// target column, advancing each tab to its stop, so the caret lines up
/// with the display expansion even when the line mixes tabs and spaces.
fn visual_column(line: &str, col: u32) -> usize {
    let mut visual = 0usize;
    let mut source_col = 1u32;
    for c in line.chars() {
        if source_col >= col {
            break;
        }
        if c == '\t' {
            let width = TAB_SIZE - (visual % TAB_SIZE);
            visual += width;
            source_col += width as u32;
        } else {
            visual += 1;
            source_col += 1;
        }
    }
    visual
}

impl Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lexer error at line {}, col {}: {}",
            self.line, self.col, self.kind
        )?;

        if !self.source_line.is_empty() {
            let caret = visual_column(&self.source_line, self.col);
            write!(f, "\n{}", expand_tabs(&self.source_line))?;
            write!(f, "\n{}^", " ".repeat(caret))?;
        }
        Ok(())
    }
}

impl std::error::Error for LexError {}

/// A token sequence that does not match the grammar. Carries a message
/// only; the parse aborts at the first failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {0}")]
    Expected(String),
    #[error("unknown type: {0}")]
    UnknownType(String),
    #[error("unexpected token in expression: {0:?}")]
    UnexpectedToken(String),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("empty char literal")]
    EmptyCharLiteral,
}

/// Any failure the front end can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Lex(#[from] LexError),
    #[error("{0}")]
    Parse(#[from] ParseError),
}
