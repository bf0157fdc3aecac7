//! Statement and declaration grammar rules.

use crate::{
    ast::statements::{Block, Function, Stmt},
    errors::errors::{Error, ParseError},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser};

/// Function: `fn` IDENT `(` [paramList] `)` `->` TYPE Block.
pub fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    parser.expect(TokenKind::Fn, "`fn`")?;

    if !parser.check(TokenKind::Identifier) {
        return Err(ParseError::Expected("function name".to_string()).into());
    }
    let name = parser.advance()?.lexeme;

    parser.expect(TokenKind::OpenParen, "`(`")?;
    let mut params = Vec::new();
    if !parser.check(TokenKind::CloseParen) {
        loop {
            if !parser.check(TokenKind::Identifier) {
                return Err(ParseError::Expected("parameter name".to_string()).into());
            }
            let param_name = parser.advance()?.lexeme;
            parser.expect(TokenKind::Colon, "`:`")?;
            let param_type = parser.parse_type("parameter type")?;
            params.push((param_name, param_type));

            if !parser.match_kind(TokenKind::Comma)? {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen, "`)`")?;

    parser.expect(TokenKind::Arrow, "`->`")?;
    let return_type = parser.parse_type("return type")?;

    let body = Block::new(parse_block(parser)?);

    Ok(Function {
        name,
        return_type,
        params,
        body,
    })
}

/// Block: `{` statement* `}`.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.expect(TokenKind::OpenCurly, "`{`")?;

    let mut statements = Vec::new();
    while !parser.check(TokenKind::CloseCurly) && !parser.check(TokenKind::Eof) {
        statements.push(parse_statement(parser)?);
    }

    parser.expect(TokenKind::CloseCurly, "`}`")?;
    Ok(statements)
}

/// Statement: `let` LetDecl | `if` IfStmt | `return` ReturnStmt | bare
/// Expression. Every statement except one immediately preceding `}`
/// must be terminated by `;`.
pub fn parse_statement(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = if parser.match_kind(TokenKind::Let)? {
        parse_let_decl(parser)?
    } else if parser.match_kind(TokenKind::If)? {
        parse_if_stmt(parser)?
    } else if parser.match_kind(TokenKind::Return)? {
        Stmt::Return(parse_expression(parser)?)
    } else {
        Stmt::Expr(parse_expression(parser)?)
    };

    if !parser.check(TokenKind::CloseCurly) {
        parser.expect(TokenKind::Semicolon, "`;` after statement")?;
    }
    Ok(stmt)
}

/// LetDecl: IDENT `:` TYPE [`=` Expression]. The `let` keyword has
/// already been consumed. The declared type is mandatory.
fn parse_let_decl(parser: &mut Parser) -> Result<Stmt, Error> {
    if !parser.check(TokenKind::Identifier) {
        return Err(ParseError::Expected("variable name".to_string()).into());
    }
    let name = parser.advance()?.lexeme;

    parser.expect(TokenKind::Colon, "`:`")?;
    let var_type = parser.parse_type("type name")?;

    let init = if parser.match_kind(TokenKind::Assignment)? {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    Ok(Stmt::Let {
        name,
        var_type,
        init,
    })
}

/// IfStmt: Expression Block [`else` Block]. The condition is not
/// parenthesized; the expression grammar cannot consume the `{` that
/// opens the block, so parsing the condition as a full expression is
/// unambiguous.
fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let condition = parse_expression(parser)?;
    let then_branch = parse_block(parser)?;

    let else_branch = if parser.match_kind(TokenKind::Else)? {
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If {
        condition,
        then_branch,
        else_branch,
    })
}
