#![allow(clippy::module_inception)]

//! Front end for a minimal statically-typed expression/statement
//! language: a pull-based lexer and a recursive-descent parser that turn
//! source text into an abstract syntax tree.
//!
//! Data flow: source text -> [`lexer::lexer::Lexer::next_token`] (pulled
//! by the parser) -> [`parser::parser::parse`] builds the tree bottom-up
//! -> the caller owns the finished [`ast::statements::Program`].

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
