use crate::Script;

#[test]
fn trivia_attaches_to_enclosing_nodes() {
    let res = Script::expect_valid_cst_full("// lead\nx = 1 # tail\n");

    insta::assert_snapshot!(res, @r##"
    Script
      LineComment "// lead"
      Newline "\n"
      ExpressionStatement
        AssignmentExpression
          Identifier
            Id "x"
          Whitespace " "
          Equals "="
          Whitespace " "
          Integer
            IntegerLit "1"
      Whitespace " "
      LineComment "# tail"
      Newline "\n"
    "##);
}

#[test]
fn block_comment_between_operands() {
    let res = Script::expect_valid_ast("a /* plus */ + /* one */ 1");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression +
          left: Identifier a
          right: Integer 1
    ");
}

#[test]
fn comment_with_line_continuation() {
    let res = Script::expect_valid_ast("// one \\\n two\nx");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        Identifier x
    ");
}

#[test]
fn source_is_preserved() {
    let input = "local  a = /* c */ [1,\n 2 ] ;\n";
    let script = Script::try_from(input).unwrap();

    assert_eq!(script.syntax().text().to_string(), input);
}
