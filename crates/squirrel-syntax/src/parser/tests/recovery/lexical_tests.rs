use crate::Script;

#[test]
fn unterminated_block_comment() {
    let res = Script::expect_errors("a /* never");

    insta::assert_snapshot!(res, @"error at 2..4: unterminated block comment");
}

#[test]
fn unrecognized_character_in_expression() {
    let res = Script::expect_errors("x = 1 + $");

    insta::assert_snapshot!(res, @"error at 8..9: unrecognized character");
}

#[test]
fn unterminated_string() {
    let res = Script::expect_errors(r#"x = "abc"#);

    insta::assert_snapshot!(res, @"error at 4..5: unterminated string");
}

#[test]
fn unrecognized_character_rendered() {
    let res = Script::expect_invalid("a $ b");

    insta::assert_snapshot!(res, @r"
    error: unrecognized character
      |
    1 | a $ b
      |   ^ unrecognized character
    ");
}
