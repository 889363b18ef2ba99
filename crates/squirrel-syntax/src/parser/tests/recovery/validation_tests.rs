use crate::Script;

#[test]
fn variadic_before_named_parameter() {
    let res = Script::expect_errors("function f(..., a) {}");

    insta::assert_snapshot!(res, @"error at 11..14: `...` must be the last parameter (hint: move `...` to the end of the parameter list)");
}

#[test]
fn only_trailing_variadic_is_accepted() {
    let res = Script::expect_errors("function f(a, ..., ...) {}");

    insta::assert_snapshot!(res, @"error at 14..17: `...` must be the last parameter (hint: move `...` to the end of the parameter list)");
}

#[test]
fn table_as_binary_operand() {
    let res = Script::expect_errors("x + {a = 1}");

    insta::assert_snapshot!(res, @"error at 4..5: table literal is not allowed here (hint: tables are allowed after `=`, `<-`, `return`, in call arguments and as ternary branches)");
}

#[test]
fn table_as_condition() {
    let res = Script::expect_errors("if ({}) x");

    insta::assert_snapshot!(res, @"error at 4..5: table literal is not allowed here (hint: tables are allowed after `=`, `<-`, `return`, in call arguments and as ternary branches)");
}

#[test]
fn tables_in_allowed_positions() {
    Script::expect_valid("local t = {}");
    Script::expect_valid("f({})");
    Script::expect_valid("function g() { return {} }");
    Script::expect_valid("t.x <- {}");
}

#[test]
fn function_as_constant() {
    let res = Script::expect_errors("const X = function() {}");

    insta::assert_snapshot!(res, @"error at 10..18: expected a constant value (hint: constants take literals, arrays, tables, names or calls)");
}
