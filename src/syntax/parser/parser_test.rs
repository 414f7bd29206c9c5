use crate::diagnostics::{
    INVALID_ASSIGNMENT_TARGET, MISSING_SEMICOLON, UNEXPECTED_TOKEN, UNSUPPORTED_KEYWORD,
};
use crate::syntax::ast::{
    BinaryOperator, Expression, LogicalOperator, Program, Statement, VariableKind,
};

use super::{Parser, parse};

fn parse_ok(input: &str) -> Program {
    parse(input).unwrap_or_else(|diag| panic!("parse failed for {:?}: {}", input, diag))
}

fn parse_err_code(input: &str) -> String {
    match parse(input) {
        Ok(program) => panic!("expected error for {:?}, got {}", input, program),
        Err(diag) => diag.code.unwrap_or_default(),
    }
}

#[test]
fn operator_precedence() {
    let tests = vec![
        ("a + b * c;", "(a + (b * c));"),
        ("(a + b) * c;", "((a + b) * c);"),
        ("a - b - c;", "((a - b) - c);"),
        ("a || b && c;", "(a || (b && c));"),
        ("a == b < c;", "(a == (b < c));"),
        ("a & b | c ^ d;", "((a & b) | (c ^ d));"),
        ("1 << 2 + 3;", "(1 << (2 + 3));"),
        ("-a * b;", "((-a) * b);"),
        ("!-a;", "(!(-a));"),
        ("a = b = c;", "(a = (b = c));"),
        ("a += b * 2;", "(a += (b * 2));"),
        ("a, b = 1;", "(a, (b = 1));"),
        ("a.b[c](d, e);", "a.b[c](d, e);"),
        ("f(1)(2).x;", "f(1)(2).x;"),
    ];

    for (input, expected) in tests {
        let program = parse_ok(input);
        assert_eq!(program.to_string(), expected, "Failed for: {}", input);
    }
}

#[test]
fn short_circuit_operators_build_logical_nodes() {
    let program = parse_ok("a || b && c == d;");
    let Statement::Expression {
        expression:
            Expression::Logical {
                operator: LogicalOperator::Or,
                right,
                ..
            },
        ..
    } = &program.body.statements[0]
    else {
        panic!("expected `||` at the root");
    };
    let Expression::Logical {
        operator: LogicalOperator::And,
        right: inner,
        ..
    } = right.as_ref()
    else {
        panic!("expected `&&` on the right, got {:?}", right);
    };
    assert!(matches!(
        inner.as_ref(),
        Expression::Binary {
            operator: BinaryOperator::Equal,
            ..
        }
    ));
    assert_eq!(right.kind_name(), "LogicalExpression");
}

#[test]
fn variable_statement_with_several_declarators() {
    let program = parse_ok("var x = 1, y;");
    assert_eq!(program.body.statements.len(), 1);
    match &program.body.statements[0] {
        Statement::Variable {
            kind, declarations, ..
        } => {
            assert_eq!(*kind, VariableKind::Var);
            assert_eq!(declarations.len(), 2);
            assert_eq!(&*declarations[0].name, "x");
            assert!(declarations[0].init.is_some());
            assert!(declarations[1].init.is_none());
        }
        other => panic!("expected variable statement, got {:?}", other),
    }
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let program = parse_ok("if (a) if (b) c; else d;");
    let Statement::If {
        consequent,
        alternate,
        ..
    } = &program.body.statements[0]
    else {
        panic!("expected if statement");
    };
    assert!(alternate.is_none());
    match consequent.as_ref() {
        Statement::If { alternate, .. } => assert!(alternate.is_some()),
        other => panic!("expected nested if, got {:?}", other),
    }
}

#[test]
fn while_with_block_body() {
    let program = parse_ok("while (i < 3) { i = i + 1; }");
    assert_eq!(program.to_string(), "while ((i < 3)) { (i = (i + 1)); }");
}

#[test]
fn automatic_semicolon_insertion() {
    let program = parse_ok("var a = 1\nvar b = 2\na + b");
    assert_eq!(program.body.statements.len(), 3);

    let program = parse_ok("{ a = 1 }");
    assert_eq!(program.to_string(), "{ (a = 1); }");

    assert_eq!(parse_err_code("a b"), MISSING_SEMICOLON);
}

#[test]
fn function_expression_needs_no_semicolon() {
    let program = parse_ok("function add(a, b) { a + b } add(1, 2);");
    assert_eq!(program.body.statements.len(), 2);
    match &program.body.statements[0] {
        Statement::Expression {
            expression: Expression::Function { name, params, .. },
            ..
        } => {
            assert_eq!(name.as_deref(), Some("add"));
            assert_eq!(params.len(), 2);
        }
        other => panic!("expected function expression, got {:?}", other),
    }
}

#[test]
fn object_and_array_literals() {
    let program = parse_ok("x = {a: 1, 'b c': [1, 2,], 3: {}, if: null};");
    assert_eq!(
        program.to_string(),
        "(x = { a: 1, b c: [1, 2], 3: {}, if: null });"
    );
}

#[test]
fn statement_level_brace_is_a_block() {
    let program = parse_ok("{}");
    assert!(matches!(program.body.statements[0], Statement::Block(_)));
}

#[test]
fn invalid_assignment_target() {
    assert_eq!(parse_err_code("1 = 2;"), INVALID_ASSIGNMENT_TARGET);
    assert_eq!(parse_err_code("a + b = c;"), INVALID_ASSIGNMENT_TARGET);
    assert_eq!(parse_err_code("f() = 1;"), INVALID_ASSIGNMENT_TARGET);
}

#[test]
fn mismatched_token_reports_expected_and_found() {
    let diag = parse("if (a { b; }").unwrap_err();
    assert_eq!(diag.code.as_deref(), Some(UNEXPECTED_TOKEN));
    assert_eq!(diag.offset(), Some(6));
    let message = diag.message.unwrap_or_default();
    assert!(message.contains("expected `)`"), "{}", message);
    assert!(message.contains("found `{`"), "{}", message);
}

#[test]
fn unterminated_block_is_an_error() {
    assert_eq!(parse_err_code("{ a;"), UNEXPECTED_TOKEN);
    assert_eq!(parse_err_code("f(1, 2"), UNEXPECTED_TOKEN);
}

#[test]
fn reserved_keywords_are_rejected() {
    assert_eq!(parse_err_code("return 1;"), UNSUPPORTED_KEYWORD);
    assert_eq!(parse_err_code("else x;"), UNEXPECTED_TOKEN);
}

#[test]
fn lexical_errors_abort_parsing() {
    let diag = parse("var s = 'open;").unwrap_err();
    assert_eq!(diag.offset(), Some(8));
}

#[test]
fn node_ids_are_unique_and_program_is_last() {
    let mut parser = Parser::new("var a = [1, {b: 2}]; if (a) a.b = 3;");
    let program = parser.parse_program().unwrap();
    assert_eq!(program.id.0 + 1, parser.node_count());
    assert!(program.body.id < program.id);
    assert!(program.body.statements[0].id() < program.body.statements[1].id());
}

#[test]
fn empty_statements_are_skipped() {
    let program = parse_ok(";;a;;");
    assert_eq!(program.body.statements.len(), 1);
}
