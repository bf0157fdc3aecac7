//! The main parser structure and token-consumption helpers.

use crate::{
    ast::{statements::Program, types::VarType},
    errors::errors::{Error, ParseError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_function;

/// Parser state: the lexer it pulls from and the single current token
/// of lookahead.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    /// Creates a parser and primes it with the first token.
    pub fn new(mut lexer: Lexer) -> Result<Parser, Error> {
        let current = lexer.next_token()?;
        Ok(Parser { lexer, current })
    }

    /// The current token, not yet consumed.
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Consumes the current token and returns it, pulling the next one
    /// from the lexer.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Tests the current kind without consuming.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes and returns true only if the current token matches.
    pub fn match_kind(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a token of the given kind or fails with
    /// "expected {description}".
    pub fn expect(&mut self, kind: TokenKind, description: &str) -> Result<Token, Error> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(ParseError::Expected(description.to_string()).into())
        }
    }

    /// Resolves the current token as a type name against the fixed
    /// six-entry table. Any other identifier in type position is an
    /// immediate "unknown type" error, not a deferred semantic one.
    pub fn parse_type(&mut self, description: &str) -> Result<VarType, Error> {
        match self.current_kind() {
            TokenKind::IntType
            | TokenKind::FloatType
            | TokenKind::StringType
            | TokenKind::CharType
            | TokenKind::BoolType
            | TokenKind::VoidType => {
                let token = self.advance()?;
                VarType::from_name(&token.lexeme)
                    .ok_or_else(|| ParseError::UnknownType(token.lexeme.clone()).into())
            }
            TokenKind::Identifier => {
                Err(ParseError::UnknownType(self.current.lexeme.clone()).into())
            }
            _ => Err(ParseError::Expected(description.to_string()).into()),
        }
    }

    /// Parses function declarations until end of input, returning the
    /// program root. The finished tree is handed to the caller whole;
    /// the parser keeps no references into it.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut functions = Vec::new();
        while !self.check(TokenKind::Eof) {
            functions.push(parse_function(self)?);
        }
        Ok(Program { functions })
    }
}

/// Parses a complete source text into a program tree.
pub fn parse(source: &str) -> Result<Program, Error> {
    let mut parser = Parser::new(Lexer::new(source))?;
    parser.parse_program()
}
