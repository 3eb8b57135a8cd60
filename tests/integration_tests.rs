//! Integration tests for the public parsing pipeline.
//!
//! These go through the crate the way a caller does: source text in,
//! rendered program and diagnostics out.

use monkey::{
    ast::ast::{Expression, Statement},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenStream,
    },
    parse_source,
    parser::parser::{parse, Parser},
};
use pretty_assertions::assert_eq;

#[test]
fn test_parse_mixed_program() {
    let source = "
        let five = 5;
        let ten = 10;
        let result = five + ten * -2;
        return result != ten;
        result;
    ";

    let (program, errors) = parse_source(source);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(program.len(), 5);
    assert_eq!(
        program.to_string(),
        "let five = 5;let ten = 10;let result = (five + (ten * (-2)));return (result != ten);result"
    );
}

#[test]
fn test_lexer_and_token_stream_agree() {
    let source = "let x = 1 + 2 * 3; return !x;";

    let tokens = tokenize(source).unwrap();
    let (streamed_parser, streamed) = parse(TokenStream::new(tokens));
    let (lexed_parser, lexed) = parse(Lexer::new(source));

    assert!(streamed_parser.errors().is_empty());
    assert!(lexed_parser.errors().is_empty());
    assert_eq!(streamed, lexed);
}

#[test]
fn test_let_binding_names() {
    let (program, _) = parse_source("let alpha = 1; let beta_2 = alpha;");

    let names: Vec<&str> = program
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::Let(let_stmt) => Some(let_stmt.name.value.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(names, vec!["alpha", "beta_2"]);
}

#[test]
fn test_diagnostics_keep_partial_program() {
    let (program, errors) = parse_source("let = 1; let ok = 2;");

    assert!(!errors.is_empty());
    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
    assert!(program.iter().any(|stmt| stmt.to_string() == "let ok = 2;"));
}

#[test]
fn test_parser_reused_after_completion() {
    let mut parser = Parser::new(Lexer::new("a * (b + c)"));

    let program = parser.parse_program();
    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };

    assert!(matches!(stmt.expression, Some(Expression::Infix(_))));
    assert_eq!(program.to_string(), "(a * (b + c))");
    assert!(parser.parse_program().is_empty());
}
