use crate::Script;

#[test]
fn missing_right_hand_side() {
    let res = Script::expect_errors("x = ;");

    insta::assert_snapshot!(res, @"error at 4..5: expected an expression");
}

#[test]
fn input_ends_after_operator() {
    insta::assert_snapshot!(
        Script::expect_errors("x ="),
        @"error at 3..3: unexpected end of input: expected an expression"
    );
    insta::assert_snapshot!(
        Script::expect_errors("x = 1 +"),
        @"error at 7..7: unexpected end of input: expected an expression"
    );
}

#[test]
fn stray_token_skipped_to_next_statement() {
    let res = Script::expect_errors("x = 1 ) y");

    insta::assert_snapshot!(res, @"error at 6..7: expected a statement");
}

#[test]
fn unmatched_closing_brace() {
    let res = Script::expect_errors("}");

    insta::assert_snapshot!(res, @"error at 0..1: unexpected token: unmatched `}`");
}

#[test]
fn missing_comma_in_arguments() {
    let res = Script::expect_errors("f(1 2)");

    insta::assert_snapshot!(res, @r"
    error at 4..5: unexpected token: expected `)`
    error at 5..6: expected a statement
    ");
}

#[test]
fn local_without_name() {
    let res = Script::expect_errors("local 1 = 2");

    insta::assert_snapshot!(res, @"error at 6..7: expected an identifier after `local`");
}

#[test]
fn class_body_junk() {
    let res = Script::expect_errors("class A { 1 }");

    insta::assert_snapshot!(res, @"error at 10..11: expected a class member in class body");
}

#[test]
fn foreach_missing_in() {
    let res = Script::expect_errors("foreach (k v in t) {}");

    insta::assert_snapshot!(res, @r"
    error at 11..12: unexpected token: expected `in`
    error at 17..18: expected a statement
    ");
}

#[test]
fn switch_body_junk() {
    let res = Script::expect_errors("switch (x) { foo }");

    insta::assert_snapshot!(res, @"error at 13..16: unexpected token: expected `case` or `default`");
}

#[test]
fn case_after_default() {
    let res = Script::expect_errors("switch (x) { default: break; case 1: break; }");

    insta::assert_snapshot!(res, @"error at 29..33: `case` after `default`");
}

#[test]
fn duplicate_default() {
    let res = Script::expect_errors("switch (x) { default: a(); default: b(); }");

    insta::assert_snapshot!(res, @"error at 27..34: duplicate `default`");
}

#[test]
fn tree_keeps_recovered_statements() {
    let res = Script::try_from("x = 1 ) y").unwrap().dump_ast();

    insta::assert_snapshot!(res, @r#"
    Script
      ExpressionStatement
        AssignmentExpression =
          left: Identifier x
          right: Integer 1
      Error ")"
      ExpressionStatement
        Identifier y
    "#);
}
