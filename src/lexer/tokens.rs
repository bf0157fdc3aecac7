use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Fixed lookup for every identifier-shaped word the language reserves:
    /// keywords, the six primitive type names, and the bool literals.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map.insert("Int", TokenKind::IntType);
        map.insert("Float", TokenKind::FloatType);
        map.insert("String", TokenKind::StringType);
        map.insert("Char", TokenKind::CharType);
        map.insert("Bool", TokenKind::BoolType);
        map.insert("Void", TokenKind::VoidType);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,

    // Literals
    Identifier,
    Integer,
    Float,
    String,
    Char,
    Bool,

    // Primitive type names
    IntType,
    FloatType,
    StringType,
    CharType,
    BoolType,
    VoidType,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    Semicolon,
    Colon,
    Comma,
    Arrow,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Star,
    Slash,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,

    // Reserved
    Fn,
    Let,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A single lexical unit: its kind, the literal source text it was
/// scanned from, and the 1-based line/column of its first character.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub col: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, col: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            col,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Integer | TokenKind::Float | TokenKind::String => {
                write!(f, "{} ({})", self.kind, self.lexeme)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
