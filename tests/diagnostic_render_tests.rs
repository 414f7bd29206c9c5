mod common;

use insta::assert_snapshot;
use noop::{Diagnostic, Interpreter, RuntimeConfig, Span, diagnostics::render_diagnostics, parse};

#[test]
fn renders_lexical_error_with_caret() {
    let _guard = common::with_no_color();
    let source = "var a = 1;\nb @ 2;";
    let err = parse(source).unwrap_err();

    assert_snapshot!(err.render(Some(source), Some("test.js")), @r"
    -- UNEXPECTED CHARACTER -- test.js -- [E002]

    unrecognized character '@'

    2 | b @ 2;
      |   ^
    ");
}

#[test]
fn renders_runtime_error_with_hint() {
    let _guard = common::with_no_color();
    let source = "var x = 1;\nprint(y);";
    let (mut interpreter, _output) = common::interpreter(RuntimeConfig::default());
    let err = noop::run_source(&mut interpreter, source).unwrap_err();

    assert_snapshot!(err.to_diagnostic().render(Some(source), Some("main.js")), @r"
    -- UNDEFINED REFERENCE -- main.js -- [E1000]

    `y` is not defined

    2 | print(y);
      |       ^

    Hint: Declare it with `var`, `let` or `const` before reading it.
    ");
}

#[test]
fn renders_offset_when_source_is_missing() {
    let _guard = common::with_no_color();
    let diag = Diagnostic::error("NOT CALLABLE")
        .with_code("E1001")
        .with_message("number is not a function")
        .with_span(Span::new(4, 5));

    assert_snapshot!(diag.render(None, None), @r"
    -- NOT CALLABLE -- <unknown> -- [E1001]

    number is not a function

    at offset 4
    ");
}

#[test]
fn file_on_diagnostic_wins_over_default() {
    let _guard = common::with_no_color();
    let diag = Diagnostic::warning("NOTE").with_file("lib.js");
    let rendered = diag.render(None, Some("main.js"));
    assert!(rendered.starts_with("-- NOTE -- lib.js -- [E000]"), "{}", rendered);
}

#[test]
fn render_many_separates_with_blank_line() {
    let _guard = common::with_no_color();
    let first = Diagnostic::error("FIRST").with_code("E100");
    let second = Diagnostic::error("SECOND").with_code("E101");
    let rendered = render_diagnostics(&[first, second], None, Some("a.js"));
    assert_eq!(
        rendered,
        "-- FIRST -- a.js -- [E100]\n\n\n-- SECOND -- a.js -- [E101]\n"
    );
}

#[test]
fn runtime_error_display_is_single_line() {
    let mut interpreter = Interpreter::default();
    let err = noop::run_source(&mut interpreter, "var n = 1; n();").unwrap_err();
    assert_eq!(err.to_string(), "[E1001] number is not a function (at offset 11)");
}
