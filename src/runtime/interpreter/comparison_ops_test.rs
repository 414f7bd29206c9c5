use super::test_support::eval;

#[test]
fn relational_numbers_and_strings() {
    assert_eq!(eval("1 < 2;"), "true");
    assert_eq!(eval("2 <= 2;"), "true");
    assert_eq!(eval("3 > 4;"), "false");
    assert_eq!(eval("'10' < 9;"), "false");
    assert_eq!(eval("'apple' < 'banana';"), "true");
    assert_eq!(eval("'b' >= 'a';"), "true");
}

#[test]
fn relational_coercion_failure_is_nan() {
    assert_eq!(eval("'x' < 1;"), "NaN");
    assert_eq!(eval("({}) > 0;"), "NaN");
}

#[test]
fn loose_equality() {
    assert_eq!(eval("1 == 1;"), "true");
    assert_eq!(eval("'1' == 1;"), "true");
    assert_eq!(eval("'a' == 'a';"), "true");
    assert_eq!(eval("'a' != 'b';"), "true");
    assert_eq!(eval("true == 1;"), "true");
}

#[test]
fn undefined_equals_only_nullish() {
    assert_eq!(eval("var u; u == null;"), "true");
    assert_eq!(eval("var u; u == 0;"), "false");
    assert_eq!(eval("var u, w; u == w;"), "true");
}

#[test]
fn nan_equals_nothing() {
    assert_eq!(eval("var n = 'x' * 1; n == n;"), "false");
    assert_eq!(eval("var n = 'x' * 1; n != 0;"), "true");
}

#[test]
fn references_compare_by_identity() {
    assert_eq!(eval("var a = {}; var b = a; a == b;"), "true");
    assert_eq!(eval("({}) == ({});"), "false");
    assert_eq!(eval("[1] == [1];"), "false");
    assert_eq!(eval("var f = function() {}; f == 0;"), "false");
    assert_eq!(eval("print == print;"), "true");
}

#[test]
fn strict_equality_requires_same_kind() {
    assert_eq!(eval("'1' === 1;"), "false");
    assert_eq!(eval("1 === 1;"), "true");
    assert_eq!(eval("'1' !== 1;"), "true");
    assert_eq!(eval("var u; u === null;"), "false");
}
