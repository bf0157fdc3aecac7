//! Unit tests for the parser module.
//!
//! This module contains tests for parsing language constructs including:
//! - Function declarations and parameter lists
//! - Let declarations and type resolution
//! - Control flow and statement terminators
//! - Expression precedence and associativity
//! - Error cases

use crate::{
    ast::{expressions::Expr, statements::Stmt, types::VarType},
    errors::errors::{Error, ParseError},
    lexer::lexer::Lexer,
};

use super::{
    expr::parse_expression,
    parser::{parse, Parser},
};

fn expr(source: &str) -> Expr {
    let mut parser = Parser::new(Lexer::new(source)).unwrap();
    parse_expression(&mut parser).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    match parse(source).unwrap_err() {
        Error::Parse(err) => err,
        Error::Lex(err) => panic!("expected a parse error, got lex error: {}", err),
    }
}

#[test]
fn test_parse_function_declaration() {
    let program = parse("fn f(x: Int) -> Int { return x; }").unwrap();

    assert_eq!(program.functions.len(), 1);
    let f = &program.functions[0];
    assert_eq!(f.name, "f");
    assert_eq!(f.params, vec![("x".to_string(), VarType::Int)]);
    assert_eq!(f.return_type, VarType::Int);
    assert_eq!(
        f.body.statements,
        vec![Stmt::Return(Expr::Var("x".to_string()))]
    );
}

#[test]
fn test_parse_functions_in_source_order() {
    let program = parse("fn a() -> Void {} fn b() -> Void {} fn c() -> Void {}").unwrap();

    let names: Vec<&str> = program.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_parse_empty_body_and_params() {
    let program = parse("fn nop() -> Void {}").unwrap();

    let f = &program.functions[0];
    assert!(f.params.is_empty());
    assert!(f.body.statements.is_empty());
}

#[test]
fn test_parse_multiple_parameters() {
    let program = parse("fn g(a: Int, b: Float, c: Bool) -> Float { return b; }").unwrap();

    assert_eq!(
        program.functions[0].params,
        vec![
            ("a".to_string(), VarType::Int),
            ("b".to_string(), VarType::Float),
            ("c".to_string(), VarType::Bool),
        ]
    );
}

#[test]
fn test_precedence_factor_binds_tighter_than_term() {
    assert_eq!(
        expr("a + b * c"),
        Expr::binary(
            "+",
            Expr::Var("a".to_string()),
            Expr::binary("*", Expr::Var("b".to_string()), Expr::Var("c".to_string())),
        )
    );
}

#[test]
fn test_term_is_left_associative() {
    assert_eq!(
        expr("1 - 2 - 3"),
        Expr::binary("-", Expr::binary("-", Expr::Int(1), Expr::Int(2)), Expr::Int(3))
    );
}

#[test]
fn test_factor_is_left_associative() {
    assert_eq!(
        expr("8 / 4 / 2"),
        Expr::binary("/", Expr::binary("/", Expr::Int(8), Expr::Int(4)), Expr::Int(2))
    );
}

#[test]
fn test_equality_is_lowest_precedence() {
    assert_eq!(
        expr("a = b <= c"),
        Expr::binary(
            "=",
            Expr::Var("a".to_string()),
            Expr::binary("<=", Expr::Var("b".to_string()), Expr::Var("c".to_string())),
        )
    );
}

#[test]
fn test_comparison_binds_looser_than_term() {
    assert_eq!(
        expr("a + 1 <= b"),
        Expr::binary(
            "<=",
            Expr::binary("+", Expr::Var("a".to_string()), Expr::Int(1)),
            Expr::Var("b".to_string()),
        )
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(
        expr("(1 + 2) * 3"),
        Expr::binary("*", Expr::binary("+", Expr::Int(1), Expr::Int(2)), Expr::Int(3))
    );
}

#[test]
fn test_binary_nodes_carry_operator_text() {
    if let Expr::Binary { op, .. } = expr("x - y") {
        assert_eq!(op, "-");
    } else {
        panic!("expected a binary node");
    }
}

#[test]
fn test_parse_literals() {
    assert_eq!(expr("42"), Expr::Int(42));
    assert_eq!(expr("3.5"), Expr::Float(3.5));
    assert_eq!(expr("\"hi\""), Expr::Str("hi".to_string()));
    assert_eq!(expr("'a'"), Expr::Char(b'a'));
    assert_eq!(expr("true"), Expr::Bool(true));
    assert_eq!(expr("false"), Expr::Bool(false));
    assert_eq!(expr("Void"), Expr::Void);
}

#[test]
fn test_parse_call_with_ordered_args() {
    assert_eq!(
        expr("f(1, x, 2 + 3)"),
        Expr::Call {
            callee: "f".to_string(),
            args: vec![
                Expr::Int(1),
                Expr::Var("x".to_string()),
                Expr::binary("+", Expr::Int(2), Expr::Int(3)),
            ],
        }
    );
}

#[test]
fn test_parse_call_without_args() {
    assert_eq!(
        expr("f()"),
        Expr::Call {
            callee: "f".to_string(),
            args: vec![],
        }
    );
}

#[test]
fn test_identifier_without_paren_is_variable() {
    assert_eq!(expr("count"), Expr::Var("count".to_string()));
}

#[test]
fn test_parse_let_with_init() {
    let program = parse("fn f() -> Void { let x: Int = 1 + 2; }").unwrap();

    assert_eq!(
        program.functions[0].body.statements[0],
        Stmt::Let {
            name: "x".to_string(),
            var_type: VarType::Int,
            init: Some(Expr::binary("+", Expr::Int(1), Expr::Int(2))),
        }
    );
}

#[test]
fn test_parse_let_without_init() {
    let program = parse("fn f() -> Void { let s: String; }").unwrap();

    assert_eq!(
        program.functions[0].body.statements[0],
        Stmt::Let {
            name: "s".to_string(),
            var_type: VarType::String,
            init: None,
        }
    );
}

#[test]
fn test_parse_if_without_else() {
    let program = parse("fn f(x: Int) -> Void { if x <= 0 { return x; } }").unwrap();

    match &program.functions[0].body.statements[0] {
        Stmt::If {
            condition,
            then_branch,
            else_branch,
        } => {
            assert_eq!(
                *condition,
                Expr::binary("<=", Expr::Var("x".to_string()), Expr::Int(0))
            );
            assert_eq!(then_branch.len(), 1);
            assert!(else_branch.is_none());
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_parse_if_with_else() {
    let program =
        parse("fn f(x: Int) -> Int { if x <= 1 { return 1; } else { return x; } }").unwrap();

    match &program.functions[0].body.statements[0] {
        Stmt::If { else_branch, .. } => {
            assert_eq!(else_branch.as_ref().map(|b| b.len()), Some(1));
        }
        other => panic!("expected an if statement, got {:?}", other),
    }
}

#[test]
fn test_statement_order_preserved_in_blocks() {
    let program = parse("fn f() -> Void { let a: Int = 1; let b: Int = 2; return a; }").unwrap();

    let names: Vec<&str> = program.functions[0]
        .body
        .statements
        .iter()
        .map(|s| match s {
            Stmt::Let { name, .. } => name.as_str(),
            Stmt::Return(_) => "return",
            _ => "?",
        })
        .collect();
    assert_eq!(names, ["a", "b", "return"]);
}

#[test]
fn test_last_statement_before_brace_may_omit_semicolon() {
    let program = parse("fn f() -> Int { return 1 }").unwrap();

    assert_eq!(
        program.functions[0].body.statements[0],
        Stmt::Return(Expr::Int(1))
    );
}

#[test]
fn test_missing_semicolon_between_statements_fails() {
    assert_eq!(
        parse_err("fn f() -> Void { f() f(); }"),
        ParseError::Expected("`;` after statement".to_string())
    );
}

#[test]
fn test_missing_closing_brace_fails() {
    assert_eq!(
        parse_err("fn f() -> Void { return 1;"),
        ParseError::Expected("`}`".to_string())
    );
}

#[test]
fn test_unknown_type_in_let_fails() {
    assert_eq!(
        parse_err("fn f() -> Void { let x: Foo = 1; }"),
        ParseError::UnknownType("Foo".to_string())
    );
}

#[test]
fn test_unknown_type_in_parameter_fails() {
    assert_eq!(
        parse_err("fn f(x: Widget) -> Void {}"),
        ParseError::UnknownType("Widget".to_string())
    );
}

#[test]
fn test_missing_return_type_fails() {
    assert_eq!(
        parse_err("fn f() -> 3 {}"),
        ParseError::Expected("return type".to_string())
    );
}

#[test]
fn test_missing_arrow_fails() {
    assert_eq!(
        parse_err("fn f() Int {}"),
        ParseError::Expected("`->`".to_string())
    );
}

#[test]
fn test_missing_function_name_fails() {
    assert_eq!(
        parse_err("fn () -> Void {}"),
        ParseError::Expected("function name".to_string())
    );
}

#[test]
fn test_unexpected_token_in_expression() {
    assert_eq!(
        parse_err("fn f() -> Void { return ; }"),
        ParseError::UnexpectedToken(";".to_string())
    );
}

#[test]
fn test_empty_char_literal_fails() {
    assert_eq!(
        parse_err("fn f() -> Void { let c: Char = ''; }"),
        ParseError::EmptyCharLiteral
    );
}

#[test]
fn test_integer_overflow_fails() {
    assert_eq!(
        parse_err("fn f() -> Void { return 99999999999999999999; }"),
        ParseError::InvalidNumber("99999999999999999999".to_string())
    );
}

#[test]
fn test_lex_error_propagates_through_parse() {
    match parse("fn f() -> Void { let s: String = \"oops; }").unwrap_err() {
        Error::Lex(err) => assert_eq!(err.line(), 1),
        Error::Parse(err) => panic!("expected a lex error, got parse error: {}", err),
    }
}
