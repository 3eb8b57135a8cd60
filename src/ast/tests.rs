use pretty_assertions::assert_eq;

use crate::lexer::tokens::{Token, TokenKind};

use super::{
    ast::{Expression, Node, Program, Statement},
    expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

fn ident(name: &str) -> Identifier {
    Identifier::new(Token::new(TokenKind::Identifier, name))
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral {
        token: Token::new(TokenKind::Int, value.to_string()),
        value,
    })
}

#[test]
fn test_let_statement_rendering() {
    let program = Program {
        statements: vec![Statement::Let(LetStatement {
            token: Token::new(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: Some(Expression::Identifier(ident("anotherVar"))),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_rendering() {
    let stmt = Statement::Return(ReturnStatement {
        token: Token::new(TokenKind::Return, "return"),
        value: Some(int(5)),
    });

    assert_eq!(stmt.to_string(), "return 5;");
}

#[test]
fn test_missing_values_render_empty() {
    let let_stmt = LetStatement {
        token: Token::new(TokenKind::Let, "let"),
        name: ident("x"),
        value: None,
    };
    let expr_stmt = ExpressionStatement {
        token: Token::new(TokenKind::Semicolon, ";"),
        expression: None,
    };

    assert_eq!(let_stmt.to_string(), "let x = ;");
    assert_eq!(expr_stmt.to_string(), "");
}

#[test]
fn test_operator_rendering_is_parenthesised() {
    let negated = Expression::Prefix(PrefixExpression {
        token: Token::new(TokenKind::Minus, "-"),
        operator: "-".to_string(),
        right: Box::new(Expression::Identifier(ident("a"))),
    });
    let product = Expression::Infix(InfixExpression {
        token: Token::new(TokenKind::Asterisk, "*"),
        left: Box::new(negated),
        operator: "*".to_string(),
        right: Box::new(Expression::Identifier(ident("b"))),
    });

    assert_eq!(product.to_string(), "((-a) * b)");
    assert_eq!(product.token_literal(), "*");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            Statement::Expression(ExpressionStatement {
                token: Token::new(TokenKind::Identifier, "a"),
                expression: Some(Expression::Identifier(ident("a"))),
            }),
            Statement::Return(ReturnStatement {
                token: Token::new(TokenKind::Return, "return"),
                value: Some(int(1)),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "areturn 1;");
}

#[test]
fn test_empty_program() {
    let program = Program::new();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.token_literal(), "");
}
