use crate::Script;
use indoc::indoc;

#[test]
fn function_with_path_and_defaults() {
    let res = Script::expect_valid_ast("function a::b(x, y = 1, ...) {}");

    insta::assert_snapshot!(res, @r"
    Script
      FunctionDeclaration a::b
        Parameters
          Parameter x
          Parameter y
            Integer 1
          Parameter ...
        Block
    ");
}

#[test]
fn function_with_statement_body() {
    let res = Script::expect_valid_ast("function f() return 1");

    insta::assert_snapshot!(res, @r"
    Script
      FunctionDeclaration f
        Parameters
        ReturnStatement
          Integer 1
    ");
}

#[test]
fn class_with_attributes() {
    let res = Script::expect_valid_ast(
        r#"class Foo </ version = 1, name = "x" /> { </ hidden = true /> x = 1 }"#,
    );

    insta::assert_snapshot!(res, @r#"
    Script
      ClassDeclaration Foo
        AttributeDeclaration
          Attribute version
            right: Integer 1
          Attribute name
            right: Str "x"
        MemberDeclaration x
          AttributeDeclaration
            Attribute hidden
              right: Bool true
          Integer 1
    "#);
}

#[test]
fn class_with_base_and_members() {
    let input = indoc! {r#"
    class Derived extends Base {
        static count = 0;
        constructor(a) { base.init(a) }
        function get() { return count }
    }
    "#};

    let res = Script::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r"
    Script
      ClassDeclaration Derived extends Base
        MemberDeclaration static count
          Integer 0
        MemberDeclaration constructor
          Parameters
            Parameter a
          Block
            ExpressionStatement
              CallExpression
                function: DerefExpression .init
                  Identifier base
                CallArgs
                  Identifier a
        MemberDeclaration method
          FunctionDeclaration get
            Parameters
            Block
              ReturnStatement
                Identifier count
    ");
}

#[test]
fn constants() {
    let input = indoc! {r#"
    const A = 1
    const B = "s";
    const C = ::D.e
    "#};

    let res = Script::expect_valid_ast(input);

    insta::assert_snapshot!(res, @r#"
    Script
      ConstDeclaration A
        Integer 1
      ConstDeclaration B
        Str "s"
      ConstDeclaration C
        DerefExpression .e
          GlobalVariable ::D
    "#);
}

#[test]
fn constant_call_value() {
    let res = Script::expect_valid_ast("const K = make(1)");

    insta::assert_snapshot!(res, @r"
    Script
      ConstDeclaration K
        CallExpression
          function: Identifier make
          CallArgs
            Integer 1
    ");
}

#[test]
fn enum_entries() {
    let res = Script::expect_valid_ast("enum Color { Red, Green = 2, Blue = -1, }");

    insta::assert_snapshot!(res, @r"
    Script
      EnumDeclaration Color
        EnumEntry Red
        EnumEntry Green
          Integer 2
        EnumEntry Blue
          Integer -1
    ");
}

#[test]
fn empty_enum() {
    let res = Script::expect_valid_ast("enum E {}");

    insta::assert_snapshot!(res, @r"
    Script
      EnumDeclaration E
    ");
}

#[test]
fn local_function_values() {
    let res = Script::expect_valid_ast("local a = 1, b, c = @() null");

    insta::assert_snapshot!(res, @r"
    Script
      LocalDeclaration
        LocalBinding a
          Integer 1
        LocalBinding b
        LocalBinding c
          LambdaExpression
            Parameters
            Null
    ");
}
