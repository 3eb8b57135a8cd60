use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

/// Dispatches on the current token. Keywords with a registered statement
/// handler get it; everything else is an expression statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(stmt_fn) = parser.lookups().get_stmt(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    Some(Statement::Expression(parse_expression_stmt(parser)))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    parser.advance();
    let value = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Return(ReturnStatement { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> ExpressionStatement {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    ExpressionStatement { token, expression }
}
