use monkey_ast::{AstNode, Expression, Statement};
use monkey_parser::{Lexer, Parser};
use monkey_types::Span;

fn parse(source: &str) -> (monkey_ast::Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}

#[test]
fn test_parse_let_and_return() {
    let (program, errors) = parse("let x = 5; return x;");

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(program.len(), 2);

    if let Statement::Let(l) = &program.statements[0] {
        assert_eq!(l.name.value, "x");
        assert_eq!(l.name.span, Span::new(4, 5));
        assert!(l.value.is_deferred());
        assert_eq!(l.span, Span::new(0, 10));
    }
    else {
        panic!("Expected let statement");
    }

    assert!(matches!(program.statements[1], Statement::Return(_)));
    assert_eq!(program.statements[1].span(), Span::new(11, 20));
}

#[test]
fn test_parse_let_statements() {
    let source = "
let x = 5;
let y = 10;
let foobar = 838383;
";
    let (program, errors) = parse(source);

    assert!(errors.is_empty());
    let names: Vec<_> = program
        .statements
        .iter()
        .map(|s| match s {
            Statement::Let(l) => l.name.value.as_str(),
            Statement::Return(_) => panic!("Expected let statement"),
        })
        .collect();
    assert_eq!(names, ["x", "y", "foobar"]);
}

#[test]
fn test_parse_return_statements() {
    let (program, errors) = parse("return 5;\nreturn 10;\nreturn add(15);");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 3);
    for statement in &program.statements {
        assert_eq!(statement.token_literal(), "return");
    }
}

#[test]
fn test_missing_assign() {
    let (program, errors) = parse("let x 5;");

    assert!(program.is_empty());
    assert_eq!(errors, ["expected next token to be ASSIGN, got INT instead"]);
}

#[test]
fn test_errors_accumulate_in_order() {
    let (program, errors) = parse("let = 10;\nlet 838383;\nlet y = 1;");

    assert_eq!(
        errors,
        [
            "expected next token to be IDENT, got ASSIGN instead",
            "expected next token to be IDENT, got INT instead",
        ]
    );
    // Partial success: the valid statement still comes through
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "let y = <deferred>;");
}

#[test]
fn test_unsupported_statement_is_skipped_silently() {
    let (program, errors) = parse("foobar;");
    assert!(program.is_empty());
    assert!(errors.is_empty());

    let (program, errors) = parse("5 + 5; if (x) { y }; let a = 1;");
    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);
}

#[test]
fn test_missing_semicolon_runs_to_eof() {
    let (program, errors) = parse("let x = 1 + 2\nreturn x");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);
    if let Statement::Let(l) = &program.statements[0] {
        let Expression::Deferred(value) = &l.value;
        assert_eq!(value.span, Span::new(8, 22));
        assert_eq!(l.span, Span::new(0, 22));
    }
    else {
        panic!("Expected let statement");
    }
}

#[test]
fn test_empty_values() {
    let (program, errors) = parse("return; let x = ;");

    assert!(errors.is_empty());
    assert_eq!(program.len(), 2);
    for statement in &program.statements {
        let value = match statement {
            Statement::Let(l) => &l.value,
            Statement::Return(r) => &r.value,
        };
        assert!(value.span().is_empty());
    }
}

#[test]
fn test_truncated_let_at_eof() {
    let (program, errors) = parse("let");
    assert!(program.is_empty());
    assert_eq!(errors, ["expected next token to be IDENT, got EOF instead"]);

    let (program, errors) = parse("let x =");
    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);
}

#[test]
fn test_empty_source() {
    let (program, errors) = parse("");
    assert!(program.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_errors_remain_after_parse() {
    let mut parser = Parser::from_source("let 1 = 2;");
    let program = parser.parse_program();

    assert!(program.is_empty());
    assert_eq!(parser.errors().len(), 1);
    assert!(parser.is_eof());
}
