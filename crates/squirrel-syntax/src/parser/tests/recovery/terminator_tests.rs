use crate::Script;

#[test]
fn break_without_semicolon() {
    let res = Script::expect_errors("while (x) { break }");

    insta::assert_snapshot!(res, @"error at 12..17: expected `;` after `break` (fix: insert `;`)");
}

#[test]
fn continue_at_end_of_input() {
    let res = Script::expect_errors("continue");

    insta::assert_snapshot!(res, @"error at 0..8: expected `;` after `continue` (fix: insert `;`)");
}

#[test]
fn constants_on_one_line() {
    let res = Script::expect_errors("const A = 1 const B = 2");

    insta::assert_snapshot!(res, @"error at 12..17: expected `;` or a line break after constant");
}

#[test]
fn constant_with_operator() {
    let res = Script::expect_errors("const X = a + 1");

    insta::assert_snapshot!(res, @"error at 12..13: expected `;` or a line break after constant");
}

#[test]
fn yield_followed_by_value() {
    let res = Script::expect_errors("yield 1 2");

    insta::assert_snapshot!(res, @"error at 8..9: expected `;` or a line break after `yield`");
}

#[test]
fn accepted_terminators() {
    Script::expect_valid("const A = 1\nconst B = 2");
    Script::expect_valid("{ const A = 1 }");
    Script::expect_valid("const A = 1; const B = 2;");
    Script::expect_valid("yield /*\n*/ x");
}
