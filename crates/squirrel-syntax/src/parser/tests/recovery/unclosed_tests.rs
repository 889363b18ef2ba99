use crate::Script;

#[test]
fn call_arguments() {
    let res = Script::expect_errors("foo(1, 2");

    insta::assert_snapshot!(res, @"error at 3..8: missing closing `)`; expected `)` (related: argument list started here at 3..4)");
}

#[test]
fn block() {
    let res = Script::expect_errors("{ a");

    insta::assert_snapshot!(res, @"error at 0..3: missing closing `}`; expected `}` (related: block started here at 0..1)");
}

#[test]
fn block_rendered() {
    let res = Script::expect_invalid("{ a");

    insta::assert_snapshot!(res, @r"
    error: missing closing `}`; expected `}`
      |
    1 | { a
      | -^^
      | |
      | missing closing `}`; expected `}`
      | block started here
    ");
}

#[test]
fn array() {
    let res = Script::expect_errors("x = [1, 2");

    insta::assert_snapshot!(res, @"error at 4..9: missing closing `]`; expected `]` (related: array started here at 4..5)");
}

#[test]
fn class_body() {
    let res = Script::expect_errors("class A { x = 1");

    insta::assert_snapshot!(res, @"error at 8..15: missing closing `}`; expected `}` (related: class body started here at 8..9)");
}

#[test]
fn only_outermost_is_reported() {
    let res = Script::expect_errors("f(g(1)");

    insta::assert_snapshot!(res, @"error at 1..6: missing closing `)`; expected `)` (related: argument list started here at 1..2)");
}

#[test]
fn parenthesized_expression() {
    let res = Script::expect_errors("x = (1 + 2");

    insta::assert_snapshot!(res, @"error at 4..10: missing closing `)`; expected `)` (related: parenthesized expression started here at 4..5)");
}

#[test]
fn attribute_block_before_body() {
    let res = Script::expect_errors("class A </ x = 1 {}");

    insta::assert_snapshot!(res, @"error at 17..18: unexpected token: expected `/>`");
}

#[test]
fn condition_before_body() {
    let res = Script::expect_errors("if (a { }");

    insta::assert_snapshot!(res, @"error at 6..7: unexpected token: expected `)`");
}
