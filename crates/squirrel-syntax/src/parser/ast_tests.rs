use crate::Script;
use crate::parser::ast::{Expr, ForInit, MemberKind, SlotKind, Stmt};
use crate::parser::literal::Radix;

fn first_stmt(script: &Script<'_>) -> Stmt {
    script.root().statements().next().expect("no statement")
}

fn first_expr(script: &Script<'_>) -> Expr {
    let Stmt::ExpressionStatement(stmt) = first_stmt(script) else {
        panic!("expected an expression statement");
    };
    stmt.expr().expect("no expression")
}

#[test]
fn member_chain() {
    let res = Script::expect_valid_ast("a.b[c](d)");
    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        CallExpression
          function: IndexExpression
            object: DerefExpression .b
              Identifier a
            index: Identifier c
          CallArgs
            Identifier d
    ");
}

#[test]
fn binary_precedence() {
    let res = Script::expect_valid_ast("local x = 1 + 2 * 3;");
    insta::assert_snapshot!(res, @r"
    Script
      LocalDeclaration
        LocalBinding x
          BinaryExpression +
            left: Integer 1
            right: BinaryExpression *
              left: Integer 2
              right: Integer 3
    ");
}

#[test]
fn left_associative_chain() {
    let res = Script::expect_valid_ast("a - b - c");
    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        BinaryExpression -
          left: BinaryExpression -
            left: Identifier a
            right: Identifier b
          right: Identifier c
    ");
}

#[test]
fn ternary_is_right_associative() {
    let res = Script::expect_valid_ast("a ? b : c ? d : e");
    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        TernaryExpression
          condition: Identifier a
          consequence: Identifier b
          alternative: TernaryExpression
            condition: Identifier c
            consequence: Identifier d
            alternative: Identifier e
    ");
}

#[test]
fn assignment_is_right_associative() {
    let res = Script::expect_valid_ast("a = b <- c");
    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        AssignmentExpression =
          left: Identifier a
          right: UpdateExpression <-
            left: Identifier b
            right: Identifier c
    ");
}

#[test]
fn prefix_then_postfix() {
    let res = Script::expect_valid_ast("-a++");
    insta::assert_snapshot!(res, @r"
    Script
      ExpressionStatement
        UnaryExpression ++ (postfix)
          operand: UnaryExpression -
            operand: Identifier a
    ");
}

#[test]
fn dangling_else_binds_to_inner_if() {
    let res = Script::expect_valid_ast("if (a) if (b) x; else y;");
    insta::assert_snapshot!(res, @r"
    Script
      IfStatement
        condition: ParenthesizedExpression
          Identifier a
        consequence: IfStatement
          condition: ParenthesizedExpression
            Identifier b
          consequence: ExpressionStatement
            Identifier x
          ElseStatement
            alternative: ExpressionStatement
              Identifier y
    ");
}

#[test]
fn local_with_several_bindings() {
    let res = Script::expect_valid_ast("local x = 1, y <- 2");
    insta::assert_snapshot!(res, @r"
    Script
      LocalDeclaration
        LocalBinding x
          Integer 1
        LocalBinding y
          Integer 2
    ");
}

#[test]
fn class_members() {
    let res = Script::expect_valid_ast("class A extends B { function f() {} constructor(x) {} }");
    insta::assert_snapshot!(res, @r"
    Script
      ClassDeclaration A extends B
        MemberDeclaration method
          FunctionDeclaration f
            Parameters
            Block
        MemberDeclaration constructor
          Parameters
            Parameter x
          Block
    ");
}

#[test]
fn for_clauses() {
    let res = Script::expect_valid_ast("for (local i = 0; i < n; i++) x;");
    insta::assert_snapshot!(res, @r"
    Script
      ForStatement
        initial: LocalDeclaration
          LocalBinding i
            Integer 0
        condition: BinaryExpression <
          left: Identifier i
          right: Identifier n
        increment: UnaryExpression ++ (postfix)
          operand: Identifier i
        ExpressionStatement
          Identifier x
    ");
}

#[test]
fn foreach_with_index() {
    let res = Script::expect_valid_ast("foreach (k, v in t) {}");
    insta::assert_snapshot!(res, @r"
    Script
      ForeachStatement k, v
        collection: Identifier t
        Block
    ");
}

#[test]
fn table_slots() {
    let res = Script::expect_valid_ast(r#"local t = { a = 1, [b] = 2, "c": 3, function f() {} }"#);
    insta::assert_snapshot!(res, @r#"
    Script
      LocalDeclaration
        LocalBinding t
          Table
            TableSlot a
              Integer 1
            TableSlot [computed]
              Identifier b
              Integer 2
            TableSlot keyed
              Str "c"
              Integer 3
            TableSlot method
              FunctionDeclaration f
                Parameters
                Block
    "#);
}

#[test]
fn for_accessors() {
    let script = Script::expect_valid("for (local i = 0; i < n; i++) x;");
    let Stmt::ForStatement(stmt) = first_stmt(&script) else {
        panic!("expected a for statement");
    };
    assert!(matches!(stmt.initial(), Some(ForInit::Local(_))));
    assert!(matches!(stmt.condition(), Some(Expr::BinaryExpression(_))));
    assert!(matches!(stmt.increment(), Some(Expr::UnaryExpression(_))));
    assert!(matches!(stmt.body(), Some(Stmt::ExpressionStatement(_))));
}

#[test]
fn for_with_empty_header() {
    let script = Script::expect_valid("for (;;) x;");
    let Stmt::ForStatement(stmt) = first_stmt(&script) else {
        panic!("expected a for statement");
    };
    assert!(stmt.initial().is_none());
    assert!(stmt.condition().is_none());
    assert!(stmt.increment().is_none());
    assert!(stmt.body().is_some());
}

#[test]
fn for_with_only_condition() {
    let script = Script::expect_valid("for (; i < 3;) i++");
    let Stmt::ForStatement(stmt) = first_stmt(&script) else {
        panic!("expected a for statement");
    };
    assert!(stmt.initial().is_none());
    assert!(stmt.condition().is_some());
    assert!(stmt.increment().is_none());
}

#[test]
fn foreach_accessors() {
    let script = Script::expect_valid("foreach (v in items) print(v)");
    let Stmt::ForeachStatement(stmt) = first_stmt(&script) else {
        panic!("expected a foreach statement");
    };
    assert!(stmt.index().is_none());
    assert_eq!(stmt.value().map(|t| t.text().to_string()).as_deref(), Some("v"));
    assert!(matches!(stmt.collection(), Some(Expr::Identifier(_))));
    assert!(matches!(stmt.body(), Some(Stmt::ExpressionStatement(_))));
}

#[test]
fn literal_values() {
    let script = Script::expect_valid(r#"x = [0x10, -3, 1.e2, "a\tb", @"q""q", 'c', true, null]"#);
    let Expr::AssignmentExpression(assign) = first_expr(&script) else {
        panic!("expected an assignment");
    };
    let Some(Expr::Array(array)) = assign.right() else {
        panic!("expected an array");
    };
    let elements: Vec<_> = array.elements().collect();
    assert_eq!(elements.len(), 8);

    let Expr::Integer(hex) = &elements[0] else {
        panic!("expected an integer");
    };
    let value = hex.value().unwrap();
    assert_eq!(value.value, 16);
    assert_eq!(value.radix, Radix::Hexadecimal);

    let Expr::Integer(negative) = &elements[1] else {
        panic!("expected an integer");
    };
    assert!(negative.is_negative());
    assert_eq!(negative.value().unwrap().value, -3);

    let Expr::Float(float) = &elements[2] else {
        panic!("expected a float");
    };
    assert_eq!(float.value(), Some(100.0));

    let Expr::Str(string) = &elements[3] else {
        panic!("expected a string");
    };
    assert_eq!(string.value().as_deref(), Some("a\tb"));

    let Expr::VerbatimStr(verbatim) = &elements[4] else {
        panic!("expected a verbatim string");
    };
    assert_eq!(verbatim.content().as_deref(), Some("q\"\"q"));
    assert_eq!(verbatim.value().as_deref(), Some("q\"q"));

    let Expr::Char(c) = &elements[5] else {
        panic!("expected a char");
    };
    assert_eq!(c.value(), Some('c'));

    let Expr::Bool(b) = &elements[6] else {
        panic!("expected a bool");
    };
    assert!(b.value());

    assert!(matches!(elements[7], Expr::Null(_)));
}

#[test]
fn function_declaration_accessors() {
    let script = Script::expect_valid("function a::b::c(x, y = 1, ...) { return x }");
    let Stmt::FunctionDeclaration(func) = first_stmt(&script) else {
        panic!("expected a function declaration");
    };
    let path: Vec<_> = func.path().map(|t| t.text().to_string()).collect();
    assert_eq!(path, ["a", "b", "c"]);
    assert_eq!(func.name().map(|t| t.text().to_string()).as_deref(), Some("a"));

    let params: Vec<_> = func.parameters().unwrap().params().collect();
    assert_eq!(params.len(), 3);
    assert!(params[0].default_value().is_none());
    assert!(matches!(params[1].default_value(), Some(Expr::Integer(_))));
    assert!(params[2].is_variadic());
    assert!(params[2].name().is_none());

    let Some(Stmt::Block(body)) = func.body() else {
        panic!("expected a block body");
    };
    let Some(Stmt::ReturnStatement(ret)) = body.statements().next() else {
        panic!("expected a return statement");
    };
    assert!(matches!(ret.value(), Some(Expr::Identifier(_))));
}

#[test]
fn class_member_kinds() {
    let script = Script::expect_valid("class C { static s = 1; [k] = 2; n = {}; function m() {} }");
    let Stmt::ClassDeclaration(class) = first_stmt(&script) else {
        panic!("expected a class declaration");
    };
    assert!(class.base().is_none());
    let members: Vec<_> = class.members().collect();
    let kinds: Vec<_> = members.iter().map(|m| m.kind()).collect();
    assert_eq!(
        kinds,
        [
            MemberKind::Field,
            MemberKind::Computed,
            MemberKind::Field,
            MemberKind::Method,
        ]
    );

    assert!(members[0].is_static());
    assert_eq!(members[0].name().map(|t| t.text().to_string()).as_deref(), Some("s"));
    assert!(matches!(members[1].key(), Some(Expr::Identifier(_))));
    assert!(matches!(members[1].value(), Some(Expr::Integer(_))));
    assert!(matches!(members[2].value(), Some(Expr::Table(_))));
    assert!(members[3].method().is_some());
}

#[test]
fn dotted_class_name() {
    let script = Script::expect_valid("class a.b.C extends D {}");
    let Stmt::ClassDeclaration(class) = first_stmt(&script) else {
        panic!("expected a class declaration");
    };
    let path: Vec<_> = class.path().map(|t| t.text().to_string()).collect();
    assert_eq!(path, ["a", "b", "C"]);
    assert_eq!(class.base().map(|t| t.text().to_string()).as_deref(), Some("D"));
}

#[test]
fn table_slot_accessors() {
    let script = Script::expect_valid("t <- { a = 1, [k] = 2, 3: 4 }");
    let Expr::UpdateExpression(update) = first_expr(&script) else {
        panic!("expected an update");
    };
    let Some(Expr::Table(table)) = update.right() else {
        panic!("expected a table");
    };
    let slots: Vec<_> = table.slots().collect();
    let kinds: Vec<_> = slots.iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, [SlotKind::Named, SlotKind::Computed, SlotKind::Keyed]);
    assert_eq!(slots[0].name().map(|t| t.text().to_string()).as_deref(), Some("a"));
    assert!(slots[1].name().is_none());
    assert!(matches!(slots[1].key(), Some(Expr::Identifier(_))));
    assert!(matches!(slots[2].key(), Some(Expr::Integer(_))));
    assert!(matches!(slots[2].value(), Some(Expr::Integer(_))));
}

#[test]
fn rawcall_has_no_callee() {
    let script = Script::expect_valid("rawcall(f, env, 1)");
    let Expr::CallExpression(call) = first_expr(&script) else {
        panic!("expected a call");
    };
    assert!(call.is_rawcall());
    assert!(call.function().is_none());
    assert_eq!(call.args().unwrap().args().count(), 3);
}

#[test]
fn lambda_body_is_expression() {
    let script = Script::expect_valid("local f = @(x) x * 2");
    let Stmt::LocalDeclaration(local) = first_stmt(&script) else {
        panic!("expected a local declaration");
    };
    let binding = local.bindings().next().unwrap();
    assert_eq!(binding.operator().map(|t| t.kind()), Some(crate::parser::SyntaxKind::Equals));
    let Some(Expr::LambdaExpression(lambda)) = binding.value() else {
        panic!("expected a lambda");
    };
    assert_eq!(lambda.parameters().unwrap().params().count(), 1);
    assert!(matches!(lambda.body(), Some(Expr::BinaryExpression(_))));
}

#[test]
fn switch_accessors() {
    let script = Script::expect_valid("switch (x) { case 1: a(); break; case 2: default: b(); }");
    let Stmt::SwitchStatement(switch) = first_stmt(&script) else {
        panic!("expected a switch");
    };
    assert!(matches!(switch.value(), Some(Expr::Identifier(_))));
    let cases: Vec<_> = switch.cases().collect();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].statements().count(), 2);
    assert_eq!(cases[1].statements().count(), 0);
    assert_eq!(switch.default().unwrap().statements().count(), 1);
}

#[test]
fn try_catch_accessors() {
    let script = Script::expect_valid("try { f() } catch (e) { throw e }");
    let Stmt::TryStatement(stmt) = first_stmt(&script) else {
        panic!("expected a try statement");
    };
    assert!(matches!(stmt.body(), Some(Stmt::Block(_))));
    let catch = stmt.catch().unwrap();
    assert_eq!(catch.binding().map(|t| t.text().to_string()).as_deref(), Some("e"));
    assert!(matches!(catch.body(), Some(Stmt::Block(_))));
}

#[test]
fn enum_and_const_accessors() {
    let script = Script::expect_valid("enum E { A, B = 2, C = \"c\", }\nconst K = -1");
    let mut stmts = script.root().statements();
    let Some(Stmt::EnumDeclaration(e)) = stmts.next() else {
        panic!("expected an enum");
    };
    let entries: Vec<_> = e.entries().collect();
    assert_eq!(entries.len(), 3);
    assert!(entries[0].value().is_none());
    assert!(matches!(entries[1].value(), Some(Expr::Integer(_))));
    assert!(matches!(entries[2].value(), Some(Expr::Str(_))));

    let Some(Stmt::ConstDeclaration(k)) = stmts.next() else {
        panic!("expected a const");
    };
    assert_eq!(k.name().map(|t| t.text().to_string()).as_deref(), Some("K"));
    let Some(Expr::Integer(value)) = k.value() else {
        panic!("expected an integer");
    };
    assert_eq!(value.value().unwrap().value, -1);
}

#[test]
fn postfix_flag() {
    let script = Script::expect_valid("++a");
    let Expr::UnaryExpression(unary) = first_expr(&script) else {
        panic!("expected a unary expression");
    };
    assert!(!unary.is_postfix());
    assert_eq!(unary.operator().map(|t| t.text().to_string()).as_deref(), Some("++"));
}
