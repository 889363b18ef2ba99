use crate::Script;

#[test]
fn every_literal_kind() {
    let res = Script::expect_valid_ast(r#"x = [1, 1.5, "s", @"v", 'c', true, false, null, '''ab''']"#);

    insta::assert_snapshot!(res, @r#"
    Script
      ExpressionStatement
        AssignmentExpression =
          left: Identifier x
          right: Array
            Integer 1
            Float 1.5
            Str "s"
            VerbatimStr @"v"
            Char 'c'
            Bool true
            Bool false
            Null
            Integer '''ab'''
    "#);
}

#[test]
fn radix_integers() {
    let res = Script::expect_valid_ast("x = [0x1F, 017, 0]");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        AssignmentExpression =
          left: Identifier x
          right: Array
            Integer 0x1F
            Integer 017
            Integer 0
    ");
}

#[test]
fn verbatim_string_spans_lines() {
    let res = Script::expect_valid_cst("local s = @\"a\nb\"");

    insta::assert_snapshot!(res, @r#"
    Script
      LocalDeclaration
        KwLocal "local"
        LocalBinding
          Id "s"
          Equals "="
          VerbatimStr
            VerbatimStringLit "@\"a\nb\""
    "#);
}

#[test]
fn string_with_escapes_is_one_token() {
    let res = Script::expect_valid_cst(r#"f("a\"b\n")"#);

    insta::assert_snapshot!(res, @r#"
    Script
      ExpressionStatement
        CallExpression
          Identifier
            Id "f"
          CallArgs
            ParenOpen "("
            Str
              StringLit "\"a\\\"b\\n\""
            ParenClose ")"
    "#);
}
