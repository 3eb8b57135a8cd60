use tracing::trace;

use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Pratt loop: parse a prefix expression at `current`, then fold in infix
/// operators from `peek` for as long as they bind tighter than `bp`.
///
/// Returns `None` when no expression could be built; the reason has already
/// been recorded on the parser.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    if !parser.enter_nesting() {
        return None;
    }

    let mut folded = 0;
    let expr = parse_expr_inner(parser, bp, &mut folded);
    parser.exit_nesting(1 + folded);

    expr
}

fn parse_expr_inner(
    parser: &mut Parser,
    bp: BindingPower,
    folded: &mut usize,
) -> Option<Expression> {
    let token_kind = parser.current_token_kind();
    trace!(kind = %token_kind, bp = ?bp, "parse_expr");

    let Some(nud_fn) = parser.lookups().get_nud(token_kind) else {
        parser.record(ErrorImpl::MissingPrefixHandler { kind: token_kind });
        return None;
    };

    let mut left = nud_fn(parser)?;

    // Strict comparison keeps equal-precedence chains left-associative.
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let Some(led_fn) = parser.lookups().get_led(parser.peek_token_kind()) else {
            return Some(left);
        };

        // Each fold deepens the left spine of the tree by one node.
        if !parser.enter_nesting() {
            return None;
        }
        *folded += 1;

        parser.advance();
        left = led_fn(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            parser.record(ErrorImpl::InvalidIntegerLiteral {
                literal: token.value,
            });
            None
        }
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();

    parser.advance();
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

/// Infix handler: `current` is the operator. The right-hand side is parsed
/// at the operator's own binding power.
pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_precedence();

    parser.advance();
    let right = parse_expr(parser, bp)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}
