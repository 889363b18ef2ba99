use indoc::indoc;

use crate::Script;

#[test]
fn binary_tiers() {
    let res = Script::expect_valid_ast("a || b && c | d ^ e & f == g < h << i + j * k");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression ||
          left: Identifier a
          right: BinaryExpression &&
            left: Identifier b
            right: BinaryExpression |
              left: Identifier c
              right: BinaryExpression ^
                left: Identifier d
                right: BinaryExpression &
                  left: Identifier e
                  right: BinaryExpression ==
                    left: Identifier f
                    right: BinaryExpression <
                      left: Identifier g
                      right: BinaryExpression <<
                        left: Identifier h
                        right: BinaryExpression +
                          left: Identifier i
                          right: BinaryExpression *
                            left: Identifier j
                            right: Identifier k
    ");
}

#[test]
fn in_shares_tier_with_logical_and() {
    let res = Script::expect_valid_ast(r#"typeof x == "table" && k in t"#);

    insta::assert_snapshot!(res, @r#"
    Script
      ExpressionStatement
        BinaryExpression in
          left: BinaryExpression &&
            left: BinaryExpression ==
              left: UnaryExpression typeof
                operand: Identifier x
              right: Str "table"
            right: Identifier k
          right: Identifier t
    "#);
}

#[test]
fn comparison_operators() {
    let res = Script::expect_valid_ast("a <=> b >>> 1 instanceof C");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression instanceof
          left: BinaryExpression <=>
            left: Identifier a
            right: BinaryExpression >>>
              left: Identifier b
              right: Integer 1
          right: Identifier C
    ");
}

#[test]
fn parenthesized() {
    let res = Script::expect_valid_ast("(a + b) * c");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression *
          left: ParenthesizedExpression
            BinaryExpression +
              left: Identifier a
              right: Identifier b
          right: Identifier c
    ");
}

#[test]
fn negative_literal_versus_minus() {
    let res = Script::expect_valid_ast("a - -5 - - b");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression -
          left: BinaryExpression -
            left: Identifier a
            right: Integer -5
          right: UnaryExpression -
            operand: Identifier b
    ");
}

#[test]
fn subtraction_without_spaces() {
    let res = Script::expect_valid_ast("a-1");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression -
          left: Identifier a
          right: Integer 1
    ");
}

#[test]
fn negative_literal_cst() {
    let res = Script::expect_valid_cst("x = -1.5");

    insta::assert_snapshot!(res, @r#"
    Script
      ExpressionStatement
        AssignmentExpression
          Identifier
            Id "x"
          Equals "="
          Float
            Minus "-"
            FloatLit "1.5"
    "#);
}

#[test]
fn negative_hex_and_octal_stay_unary() {
    let res = Script::expect_valid_ast("x = [-0x10, -0777, -7]");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        AssignmentExpression =
          left: Identifier x
          right: Array
            UnaryExpression -
              operand: Integer 0x10
            UnaryExpression -
              operand: Integer 0777
            Integer -7
    ");
}

#[test]
fn global_variables() {
    let res = Script::expect_valid_ast("::print(::x)");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        CallExpression
          function: GlobalVariable ::print
          CallArgs
            GlobalVariable ::x
    ");
}

#[test]
fn keyword_operators() {
    let res = Script::expect_valid_ast("local c = clone t; delete t.x; resume gen");

    insta::assert_snapshot!(res, @r"
    Script
      LocalDeclaration
        LocalBinding c
          CloneExpression
            Identifier t
      ExpressionStatement
        DeleteExpression
          DerefExpression .x
            Identifier t
      ExpressionStatement
        ResumeExpression
          Identifier gen
    ");
}

#[test]
fn function_values() {
    let res = Script::expect_valid_ast("f(function (a) { return a }, @(b) b + 1)");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        CallExpression
          function: Identifier f
          CallArgs
            AnonymousFunction
              Parameters
                Parameter a
              Block
                ReturnStatement
                  Identifier a
            LambdaExpression
              Parameters
                Parameter b
              BinaryExpression +
                left: Identifier b
                right: Integer 1
    ");
}

#[test]
fn tables_in_ternary_branches() {
    let res = Script::expect_valid_ast("x = c ? {} : {a = 1}");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        AssignmentExpression =
          left: Identifier x
          right: TernaryExpression
            condition: Identifier c
            consequence: Table
            alternative: Table
              TableSlot a
                Integer 1
    ");
}

#[test]
fn table_as_call_argument() {
    let res = Script::expect_valid_ast("f({x = 1}, {})");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        CallExpression
          function: Identifier f
          CallArgs
            Table
              TableSlot x
                Integer 1
            Table
    ");
}

#[test]
fn spaced_table_slots() {
    let input = indoc! {"
        local t = {a = 1, b = 2}
        t.c <- {d = 3}
        f({e = 4})
        return {g = 5}
    "};

    let res = Script::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Script
      LocalDeclaration
        LocalBinding t
          Table
            TableSlot a
              Integer 1
            TableSlot b
              Integer 2
      ExpressionStatement
        UpdateExpression <-
          left: DerefExpression .c
            Identifier t
          right: Table
            TableSlot d
              Integer 3
      ExpressionStatement
        CallExpression
          function: Identifier f
          CallArgs
            Table
              TableSlot e
                Integer 4
      ReturnStatement
        Table
          TableSlot g
            Integer 5
    ");
}

#[test]
fn compound_assignments() {
    let res = Script::expect_valid_ast("a.b -= c[0] *= 2");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        UpdateExpression -=
          left: DerefExpression .b
            Identifier a
          right: UpdateExpression *=
            left: IndexExpression
              object: Identifier c
              index: Integer 0
            right: Integer 2
    ");
}

#[test]
fn prefix_operators_nest() {
    let res = Script::expect_valid_ast("!~-x");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        UnaryExpression !
          operand: UnaryExpression ~
            operand: UnaryExpression -
              operand: Identifier x
    ");
}

#[test]
fn prefix_binds_tighter_than_binary() {
    let res = Script::expect_valid_ast("-a * b");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression *
          left: UnaryExpression -
            operand: Identifier a
          right: Identifier b
    ");
}

#[test]
fn prefix_applies_to_postfix_chain() {
    let res = Script::expect_valid_ast("-a.b(c)");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        UnaryExpression -
          operand: CallExpression
            function: DerefExpression .b
              Identifier a
            CallArgs
              Identifier c
    ");
}

#[test]
fn array_commas_are_optional() {
    let res = Script::expect_valid_ast("x = [1 2, 3, {a = 1},]");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        AssignmentExpression =
          left: Identifier x
          right: Array
            Integer 1
            Integer 2
            Integer 3
            Table
              TableSlot a
                Integer 1
    ");
}

#[test]
fn rawcall() {
    let res = Script::expect_valid_ast("rawcall(f, this)");

    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        CallExpression rawcall
          CallArgs
            Identifier f
            Identifier this
    ");
}
