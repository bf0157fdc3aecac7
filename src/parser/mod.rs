//! Recursive-descent parser.
//!
//! The parser pulls tokens from the lexer one at a time, holding exactly
//! one current token of lookahead, and builds the AST bottom-up. Each
//! grammar rule is one function; operator precedence is encoded as a
//! chain of mutually recursive functions in `expr`, one per level, each
//! folding repeated same-level operators leftward. The first malformed
//! construct aborts the whole parse.

pub mod expr;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
