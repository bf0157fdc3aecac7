//! Expression grammar rules.
//!
//! Precedence, lowest to highest, all left-associative:
//! equality (`=`), comparison (`<=`), term (`+` `-`), factor (`*` `/`),
//! primary. Each level parses one operand at the next-higher level and
//! folds repeated same-level operators into left-nested binary nodes.
//! `=` here is a comparison operator, not assignment.

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ParseError},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    parse_equality(parser)
}

fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_comparison(parser)?;
    while parser.check(TokenKind::Assignment) {
        let op = parser.advance()?.lexeme;
        let right = parse_comparison(parser)?;
        expr = Expr::binary(op, expr, right);
    }
    Ok(expr)
}

fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_term(parser)?;
    while parser.check(TokenKind::LessEquals) {
        let op = parser.advance()?.lexeme;
        let right = parse_term(parser)?;
        expr = Expr::binary(op, expr, right);
    }
    Ok(expr)
}

fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_factor(parser)?;
    while parser.check(TokenKind::Plus) || parser.check(TokenKind::Dash) {
        let op = parser.advance()?.lexeme;
        let right = parse_factor(parser)?;
        expr = Expr::binary(op, expr, right);
    }
    Ok(expr)
}

fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    let mut expr = parse_primary(parser)?;
    while parser.check(TokenKind::Star) || parser.check(TokenKind::Slash) {
        let op = parser.advance()?.lexeme;
        let right = parse_primary(parser)?;
        expr = Expr::binary(op, expr, right);
    }
    Ok(expr)
}

fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_kind() {
        TokenKind::Integer => {
            let token = parser.advance()?;
            let value = token
                .lexeme
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidNumber(token.lexeme.clone()))?;
            Ok(Expr::Int(value))
        }
        TokenKind::Float => {
            let token = parser.advance()?;
            let value = token
                .lexeme
                .parse::<f64>()
                .map_err(|_| ParseError::InvalidNumber(token.lexeme.clone()))?;
            Ok(Expr::Float(value))
        }
        TokenKind::String => Ok(Expr::Str(parser.advance()?.lexeme)),
        TokenKind::Char => {
            let token = parser.advance()?;
            match token.lexeme.as_bytes().first() {
                Some(byte) => Ok(Expr::Char(*byte)),
                None => Err(ParseError::EmptyCharLiteral.into()),
            }
        }
        TokenKind::Bool => {
            let token = parser.advance()?;
            Ok(Expr::Bool(token.lexeme == "true"))
        }
        TokenKind::Identifier => parse_call_or_var(parser),
        TokenKind::OpenParen => {
            parser.advance()?;
            let expr = parse_expression(parser)?;
            parser.expect(TokenKind::CloseParen, "`)`")?;
            Ok(expr)
        }
        // The `Void` type name doubles as the void literal expression.
        TokenKind::VoidType => {
            parser.advance()?;
            Ok(Expr::Void)
        }
        _ => Err(ParseError::UnexpectedToken(parser.current().lexeme.clone()).into()),
    }
}

/// An identifier is a call if and only if the next token is `(`;
/// otherwise it is a plain variable reference. Arguments keep their
/// source order.
fn parse_call_or_var(parser: &mut Parser) -> Result<Expr, Error> {
    let name = parser.advance()?.lexeme;

    if !parser.match_kind(TokenKind::OpenParen)? {
        return Ok(Expr::Var(name));
    }

    let mut args = Vec::new();
    if !parser.check(TokenKind::CloseParen) {
        loop {
            args.push(parse_expression(parser)?);
            if !parser.match_kind(TokenKind::Comma)? {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen, "`)`")?;

    Ok(Expr::Call { callee: name, args })
}
