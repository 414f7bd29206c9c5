use insta::assert_snapshot;
use noop::diagnostics::{
    MALFORMED_NUMBER, UNEXPECTED_CHARACTER, UNTERMINATED_COMMENT, UNTERMINATED_STRING,
};
use noop::syntax::{lexer::Lexer, token_type::TokenKind};

fn dump(source: &str) -> String {
    let tokens = Lexer::new(source)
        .tokenize()
        .unwrap_or_else(|err| panic!("lexing {:?} failed: {}", source, err));
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn lex_error_code(source: &str) -> String {
    match Lexer::new(source).tokenize() {
        Ok(tokens) => panic!("expected {:?} to fail, got {} tokens", source, tokens.len()),
        Err(err) => err.code.unwrap_or_default(),
    }
}

#[test]
fn snapshot_variable_statement() {
    assert_snapshot!(dump("var x = 1.5;"), @r"
    Token(KEYWORD, var, 0..3)
    Token(IDENT, x, 4..5)
    Token(PUNCT, =, 6..7)
    Token(NUMBER, 1.5, 8..11)
    Token(PUNCT, ;, 11..12)
    Token(EOS, , 12..12)
    ");
}

#[test]
fn snapshot_longest_punctuator_match() {
    assert_snapshot!(dump("a>>>b!==c<=d"), @r"
    Token(IDENT, a, 0..1)
    Token(PUNCT, >>>, 1..4)
    Token(IDENT, b, 4..5)
    Token(PUNCT, !==, 5..8)
    Token(IDENT, c, 8..9)
    Token(PUNCT, <=, 9..11)
    Token(IDENT, d, 11..12)
    Token(EOS, , 12..12)
    ");
}

#[test]
fn snapshot_literal_words() {
    assert_snapshot!(dump("true false null this"), @r"
    Token(BOOLEAN, true, 0..4)
    Token(BOOLEAN, false, 5..10)
    Token(NULL, null, 11..15)
    Token(KEYWORD, this, 16..20)
    Token(EOS, , 20..20)
    ");
}

#[test]
fn snapshot_string_escapes() {
    assert_snapshot!(dump(r#"'it\'s' "a\tb""#), @r#"
    Token(STRING, "it's", 0..7)
    Token(STRING, "a\tb", 8..14)
    Token(EOS, , 14..14)
    "#);
}

#[test]
fn snapshot_number_forms() {
    assert_snapshot!(dump(".5 2.5e3 1E-2"), @r"
    Token(NUMBER, 0.5, 0..2)
    Token(NUMBER, 2500, 3..8)
    Token(NUMBER, 0.01, 9..13)
    Token(EOS, , 13..13)
    ");
}

#[test]
fn offsets_count_code_points() {
    assert_snapshot!(dump("café $x _y1"), @r"
    Token(IDENT, café, 0..4)
    Token(IDENT, $x, 5..7)
    Token(IDENT, _y1, 8..11)
    Token(EOS, , 11..11)
    ");
}

#[test]
fn comments_are_skipped_and_newlines_recorded() {
    let tokens = Lexer::new("a // one\n/* two */ b")
        .tokenize()
        .expect("comments should lex");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert!(!tokens[0].newline_before);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert!(tokens[1].newline_before);
    assert_eq!(tokens[1].start, 19);
    assert!(tokens[2].is_end());
}

#[test]
fn newline_inside_block_comment_counts() {
    let tokens = Lexer::new("a /*\n*/ b").tokenize().expect("should lex");
    assert!(tokens[1].newline_before);
}

#[test]
fn peek_does_not_consume() {
    let mut lexer = Lexer::new("a b");
    let peeked = lexer.peek().expect("peek").clone();
    let first = lexer.lex().expect("lex");
    assert_eq!(peeked, first);

    let second = lexer.lex().expect("lex");
    assert_eq!(second.start, 2);

    let end = lexer.lex().expect("lex");
    let again = lexer.lex().expect("lex");
    assert!(end.is_end());
    assert!(again.is_end());
    assert_eq!(end.start, again.start);
}

#[test]
fn lexical_errors_carry_codes() {
    assert_eq!(lex_error_code("'abc"), UNTERMINATED_STRING);
    assert_eq!(lex_error_code("\"ab\ncd\""), UNTERMINATED_STRING);
    assert_eq!(lex_error_code("1e"), MALFORMED_NUMBER);
    assert_eq!(lex_error_code("12abc"), MALFORMED_NUMBER);
    assert_eq!(lex_error_code("a # b"), UNEXPECTED_CHARACTER);
    assert_eq!(lex_error_code("/* never closed"), UNTERMINATED_COMMENT);
}

#[test]
fn unexpected_character_points_at_offset() {
    let err = Lexer::new("var a = @;").tokenize().unwrap_err();
    assert_eq!(err.offset(), Some(8));
}
