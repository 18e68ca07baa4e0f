//! Parser tests for the calc expression language.
//!
//! Trees are compared through their prefix rendering, e.g. `3+4*2`
//! parses to `(+ 3 (* 4 2))`.

use calc_lexer::tokenize;
use calc_parser::{parse, Parser};
use calc_types::ast::{BinOp, Expr, ExprKind};
use calc_types::{CalcError, ErrorCode, ErrorKind, Number, Span};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

fn parse_ok(source: &str) -> Expr {
    let tokens = tokenize(source).expect("lex failed");
    parse(tokens).unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

fn parse_err(source: &str) -> CalcError {
    let tokens = tokenize(source).expect("lex failed");
    match parse(tokens) {
        Ok(expr) => panic!("expected parse error for {source:?}, got {expr}"),
        Err(e) => e,
    }
}

fn tree(source: &str) -> String {
    parse_ok(source).to_string()
}

// ══════════════════════════════════════════════════════════════════════════════
// Precedence & associativity
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(tree("3+4*2"), "(+ 3 (* 4 2))");
    assert_eq!(tree("3*4+2"), "(+ (* 3 4) 2)");
    assert_eq!(tree("1-6/3"), "(- 1 (/ 6 3))");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(tree("(1+2)*3"), "(* (+ 1 2) 3)");
    assert_eq!(tree("2*(3-(4/5))"), "(* 2 (- 3 (/ 4 5)))");
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(tree("10-2-3"), "(- (- 10 2) 3)");
}

#[test]
fn test_division_is_left_associative() {
    assert_eq!(tree("8/4/2"), "(/ (/ 8 4) 2)");
}

#[test]
fn test_mixed_same_level_chain() {
    assert_eq!(tree("1+2-3+4"), "(+ (- (+ 1 2) 3) 4)");
    assert_eq!(tree("2*3/4*5"), "(* (/ (* 2 3) 4) 5)");
}

#[test]
fn test_redundant_parentheses_collapse() {
    assert_eq!(tree("(((1)))"), "1");
    let expr = parse_ok("(((1)))");
    assert_eq!(expr.span, Span::new(0, 7));
}

#[test]
fn test_float_literal_node() {
    let expr = parse_ok("2.5");
    assert_eq!(expr.kind, ExprKind::NumberLit(Number::Float(2.5)));
}

// ══════════════════════════════════════════════════════════════════════════════
// Assignment and variable references
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_assignment() {
    assert_eq!(tree("x=5"), "(= x 5)");
    assert_eq!(tree("total = a * (b + 1)"), "(= total (* a (+ b 1)))");
}

#[test]
fn test_assignment_span_and_name() {
    let expr = parse_ok("x = 1 + 2");
    assert_eq!(expr.span, Span::new(0, 9));
    match expr.kind {
        ExprKind::Assignment { name, value } => {
            assert_eq!(name.name, "x");
            assert_eq!(name.span, Span::new(0, 1));
            assert!(matches!(value.kind, ExprKind::Binary { op: BinOp::Add, .. }));
        }
        other => panic!("expected assignment, got {other:?}"),
    }
}

#[test]
fn test_bare_identifier_is_variable_reference() {
    let expr = parse_ok("x");
    assert_eq!(expr.kind, ExprKind::VariableRef("x".into()));
    assert_eq!(expr.span, Span::new(0, 1));
}

#[test]
fn test_identifier_followed_by_operator_is_expression() {
    assert_eq!(tree("x+1"), "(+ x 1)");
    assert_eq!(tree("x * y - z"), "(- (* x y) z)");
}

#[test]
fn test_variables_inside_expressions() {
    assert_eq!(tree("(a)"), "a");
    assert_eq!(tree("2*rate"), "(* 2 rate)");
}

// ══════════════════════════════════════════════════════════════════════════════
// Syntax errors
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_input() {
    let err = parse_err("");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_END);
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "expected expression, got end of input");
}

#[test]
fn test_dangling_operator() {
    let err = parse_err("1+");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_END);
    assert_eq!(err.span, Span::point(2));
}

#[test]
fn test_unmatched_open_paren() {
    let err = parse_err("(1+2");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_END);
    assert_eq!(err.message, "expected ')', got end of input");
}

#[test]
fn test_unmatched_close_paren() {
    let err = parse_err("(1))");
    assert_eq!(err.code, ErrorCode::TRAILING_TOKEN);
    assert_eq!(err.message, "unexpected token ')' after expression");
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn test_leading_operator() {
    let err = parse_err("*3");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_TOKEN);
    assert_eq!(err.message, "expected expression, got '*'");
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn test_unary_minus_not_supported() {
    let err = parse_err("-3");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_TOKEN);
    assert_eq!(err.message, "expected expression, got '-'");
}

#[test]
fn test_empty_parentheses() {
    let err = parse_err("()");
    assert_eq!(err.message, "expected expression, got ')'");
}

#[test]
fn test_missing_operator_between_operands() {
    let err = parse_err("1 2");
    assert_eq!(err.code, ErrorCode::TRAILING_TOKEN);
    assert_eq!(err.message, "unexpected token '2' after expression");
}

#[test]
fn test_assignment_without_value() {
    let err = parse_err("x =");
    assert_eq!(err.code, ErrorCode::UNEXPECTED_END);
    assert_eq!(err.message, "expected expression, got end of input");
}

#[test]
fn test_chained_assignment_rejected() {
    let err = parse_err("x = y = 1");
    assert_eq!(err.code, ErrorCode::TRAILING_TOKEN);
    assert_eq!(err.message, "unexpected token '=' after expression");
    assert_eq!(err.span, Span::new(6, 7));
}

#[test]
fn test_assignment_to_non_identifier_rejected() {
    let err = parse_err("1 = 2");
    assert_eq!(err.code, ErrorCode::TRAILING_TOKEN);
    let err = parse_err("(x) = 2");
    assert_eq!(err.code, ErrorCode::TRAILING_TOKEN);
}

#[test]
fn test_assign_without_target() {
    let err = parse_err("= 5");
    assert_eq!(err.message, "expected expression, got '='");
}

#[test]
fn test_assignment_inside_expression_rejected() {
    let err = parse_err("1 + x = 2");
    assert_eq!(err.code, ErrorCode::TRAILING_TOKEN);
}

// ══════════════════════════════════════════════════════════════════════════════
// Nesting limit
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_nesting_within_limit() {
    let tokens = tokenize("((1))").unwrap();
    let expr = Parser::with_max_depth(tokens, 2).parse().unwrap();
    assert_eq!(expr.to_string(), "1");
}

#[test]
fn test_nesting_limit_exceeded() {
    let tokens = tokenize("(((1)))").unwrap();
    let err = Parser::with_max_depth(tokens, 2).parse().unwrap_err();
    assert_eq!(err.code, ErrorCode::NESTING_LIMIT_EXCEEDED);
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.span, Span::new(2, 3));
}

#[test]
fn test_sequential_groups_do_not_accumulate_depth() {
    let tokens = tokenize("(1)+(2)+(3)").unwrap();
    let expr = Parser::with_max_depth(tokens, 1).parse().unwrap();
    assert_eq!(expr.to_string(), "(+ (+ 1 2) 3)");
}

// ══════════════════════════════════════════════════════════════════════════════
// Determinism
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_parser_determinism_100_iterations() {
    let source = "area = (w + 2.5) * h / 2 - margin";
    let first = parse_ok(source);
    for i in 0..100 {
        let expr = parse_ok(source);
        assert_eq!(first, expr, "Determinism failure at iteration {i}");
    }
}
