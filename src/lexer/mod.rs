//! Lexical analysis for the front end.
//!
//! The lexer is pull-based: the parser asks for one token at a time via
//! [`lexer::Lexer::next_token`], and can probe ahead with
//! [`lexer::Lexer::peek_token`] without consuming. It tracks 1-based
//! line/column positions (tab stop 4), classifies reserved words, scans
//! numeric/string/char literals, and skips whitespace and both comment
//! styles.

pub mod lexer;
pub mod tokens;
