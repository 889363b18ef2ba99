use crate::Script;
use indoc::indoc;

#[test]
fn if_else() {
    let input = "if (a) b(); else c();";

    let res = Script::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Script
      IfStatement
        condition: ParenthesizedExpression
          Identifier a
        consequence: ExpressionStatement
          CallExpression
            function: Identifier b
            CallArgs
        ElseStatement
          alternative: ExpressionStatement
            CallExpression
              function: Identifier c
              CallArgs
    ");
}

#[test]
fn while_loop_cst() {
    let input = "while (i < 3) i++;";

    let res = Script::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Script
      WhileStatement
        KwWhile "while"
        ParenOpen "("
        BinaryExpression
          Identifier
            Id "i"
          Less "<"
          Integer
            IntegerLit "3"
        ParenClose ")"
        ExpressionStatement
          UnaryExpression
            Identifier
              Id "i"
            PlusPlus "++"
          Semicolon ";"
    "#);
}

#[test]
fn while_without_body() {
    let res = Script::expect_valid_ast("while (x)");

    insta::assert_snapshot!(res, @r"
    Script
      WhileStatement
        Identifier x
    ");
}

#[test]
fn do_while() {
    let res = Script::expect_valid_ast("do { x++ } while (x < 10)");

    insta::assert_snapshot!(res, @r"
    Script
      DoWhileStatement
        Block
          ExpressionStatement
            UnaryExpression ++ (postfix)
              operand: Identifier x
        BinaryExpression <
          left: Identifier x
          right: Integer 10
    ");
}

#[test]
fn switch_with_fallthrough() {
    let input = indoc! {r#"
    switch (x) {
        case 1:
        case 2:
            f();
            break;
        default:
            g();
    }
    "#};

    let res = Script::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Script
      SwitchStatement
        Identifier x
        CaseStatement
          case: Integer 1
        CaseStatement
          case: Integer 2
          ExpressionStatement
            CallExpression
              function: Identifier f
              CallArgs
          BreakStatement
        DefaultStatement
          ExpressionStatement
            CallExpression
              function: Identifier g
              CallArgs
    ");
}

#[test]
fn for_with_expression_clauses() {
    let res = Script::expect_valid_ast("for (i = 0; i < n; i += 1) {}");

    insta::assert_snapshot!(res, @r"
    Script
      ForStatement
        initial: AssignmentExpression =
          left: Identifier i
          right: Integer 0
        condition: BinaryExpression <
          left: Identifier i
          right: Identifier n
        increment: UpdateExpression +=
          left: Identifier i
          right: Integer 1
        Block
    ");
}

#[test]
fn foreach_without_index() {
    let res = Script::expect_valid_ast("foreach (v in list) print(v)");

    insta::assert_snapshot!(res, @r"
    Script
      ForeachStatement v
        collection: Identifier list
        ExpressionStatement
          CallExpression
            function: Identifier print
            CallArgs
              Identifier v
    ");
}

#[test]
fn return_table() {
    let res = Script::expect_valid_ast("function f() { return {a = 1}; }");

    insta::assert_snapshot!(res, @r"
    Script
      FunctionDeclaration f
        Parameters
        Block
          ReturnStatement
            Table
              TableSlot a
                Integer 1
    ");
}

#[test]
fn return_value_continues_past_line_break() {
    let res = Script::expect_valid_ast("return\nx");

    insta::assert_snapshot!(res, @r"
    Script
      ReturnStatement
        Identifier x
    ");
}

#[test]
fn yield_value_must_be_on_same_line() {
    let input = indoc! {r#"
    function g() {
        yield
        x
        yield y;
    }
    "#};

    let res = Script::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Script
      FunctionDeclaration g
        Parameters
        Block
          YieldStatement
          ExpressionStatement
            Identifier x
          YieldStatement
            Identifier y
    ");
}

#[test]
fn try_catch() {
    let res = Script::expect_valid_ast("try { f() } catch (e) { print(e) }");

    insta::assert_snapshot!(res, @r"
    Script
      TryStatement
        Block
          ExpressionStatement
            CallExpression
              function: Identifier f
              CallArgs
        CatchStatement e
          Block
            ExpressionStatement
              CallExpression
                function: Identifier print
                CallArgs
                  Identifier e
    ");
}

#[test]
fn throw_statement() {
    let res = Script::expect_valid_ast("throw \"oops\";");

    insta::assert_snapshot!(res, @r#"
    Script
      ThrowStatement
        Str "oops"
    "#);
}

#[test]
fn jumps() {
    let res = Script::expect_valid_ast("while (1) { continue; break; }");

    insta::assert_snapshot!(res, @r"
    Script
      WhileStatement
        Integer 1
        Block
          ContinueStatement
          BreakStatement
    ");
}

#[test]
fn empty_statements_and_blocks() {
    let res = Script::expect_valid_ast(";; { { } }");

    insta::assert_snapshot!(res, @r"
    Script
      EmptyStatement
      EmptyStatement
      Block
        Block
    ");
}

#[test]
fn var_statement() {
    let res = Script::expect_valid_ast("var x = 1");

    insta::assert_snapshot!(res, @r"
    Script
      VarStatement x
        Integer 1
    ");
}

#[test]
fn line_break_separates_statements() {
    let res = Script::expect_valid_ast("a\nb");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        Identifier a
      ExpressionStatement
        Identifier b
    ");
}

#[test]
fn bracket_after_line_break_starts_array() {
    let res = Script::expect_valid_ast("a\n[1]");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        Identifier a
      ExpressionStatement
        Array
          Integer 1
    ");
}

#[test]
fn increment_after_line_break_is_prefix() {
    let res = Script::expect_valid_ast("a\n++b");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        Identifier a
      ExpressionStatement
        UnaryExpression ++
          operand: Identifier b
    ");
}

#[test]
fn spans() {
    let script = Script::expect_valid("x = 1;");

    let res = script.printer().with_spans(true).dump();

    insta::assert_snapshot!(res, @r"
    Script [0..6]
      ExpressionStatement [0..6]
        AssignmentExpression [0..5] =
          left: Identifier [0..1] x
          right: Integer [4..5] 1
    ");
}
