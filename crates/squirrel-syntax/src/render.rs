//! Re-rendering expressions as source with minimal parentheses.
//!
//! The output parses back to the same tree shape. Operators are spaced,
//! everything is printed on one line except table, array and function
//! literals, which are copied verbatim.

use crate::parser::ast::{self, Expr};
use crate::parser::{SyntaxKind, SyntaxToken, infix_binding_power};

/// Open-ended forms (`@(x) ...`, `clone ...`) swallow everything to their right.
const OPEN_PREC: u8 = 0;
const ASSIGN_PREC: u8 = 1;
const TERNARY_PREC: u8 = 2;
const UNARY_PREC: u8 = 13;
const POSTFIX_PREC: u8 = 14;
const PRIMARY_PREC: u8 = 16;

pub fn render_expr(expr: &Expr) -> String {
    let mut out = String::new();
    render(expr, true, &mut out);
    out
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::AssignmentExpression(_) | Expr::UpdateExpression(_) => ASSIGN_PREC,
        Expr::TernaryExpression(_) => TERNARY_PREC,
        Expr::BinaryExpression(b) => b
            .operator()
            .and_then(|op| infix_binding_power(op.kind()))
            .unwrap_or(OPEN_PREC),
        Expr::UnaryExpression(_) => UNARY_PREC,
        Expr::CallExpression(_) | Expr::IndexExpression(_) | Expr::DerefExpression(_) => {
            POSTFIX_PREC
        }
        Expr::LambdaExpression(_)
        | Expr::AnonymousFunction(_)
        | Expr::CloneExpression(_)
        | Expr::DeleteExpression(_)
        | Expr::ResumeExpression(_) => OPEN_PREC,
        _ => PRIMARY_PREC,
    }
}

fn is_prefix_unary(expr: &Expr) -> bool {
    matches!(expr, Expr::UnaryExpression(u) if !u.is_postfix())
}

fn is_open_ended(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::LambdaExpression(_)
            | Expr::AnonymousFunction(_)
            | Expr::CloneExpression(_)
            | Expr::DeleteExpression(_)
            | Expr::ResumeExpression(_)
    )
}

/// Renders `child`, parenthesized if it would not reparse in a slot that
/// requires at least `min_prec`. Tables need parens where the slot rejects them.
/// `tail` says nothing follows the slot, so an open-ended form may stay bare.
fn operand(child: Option<Expr>, min_prec: u8, table_ok: bool, tail: bool, out: &mut String) {
    let Some(child) = child else {
        return;
    };
    let is_table = matches!(child, Expr::Table(_));
    let too_loose = precedence(&child) < min_prec && !(tail && is_open_ended(&child));
    if too_loose || (is_table && !table_ok) {
        out.push('(');
        render(&child, true, out);
        out.push(')');
    } else {
        render(&child, tail, out);
    }
}

fn push_token(token: Option<SyntaxToken>, out: &mut String) {
    if let Some(t) = token {
        out.push_str(t.text());
    }
}

fn render(expr: &Expr, tail: bool, out: &mut String) {
    match expr {
        Expr::BinaryExpression(b) => {
            let prec = precedence(expr);
            operand(b.left(), prec, false, false, out);
            out.push(' ');
            push_token(b.operator(), out);
            out.push(' ');
            operand(b.right(), prec + 1, false, tail, out);
        }
        // `a ? b : c = d` assigns to the whole ternary.
        Expr::AssignmentExpression(a) => {
            operand(a.left(), TERNARY_PREC, false, false, out);
            out.push_str(" = ");
            operand(a.right(), ASSIGN_PREC, true, tail, out);
        }
        Expr::UpdateExpression(u) => {
            operand(u.left(), TERNARY_PREC, false, false, out);
            out.push(' ');
            push_token(u.operator(), out);
            out.push(' ');
            operand(u.right(), ASSIGN_PREC, true, tail, out);
        }
        Expr::TernaryExpression(t) => {
            operand(t.condition(), TERNARY_PREC + 1, false, false, out);
            out.push_str(" ? ");
            operand(t.consequence(), OPEN_PREC, true, true, out);
            out.push_str(" : ");
            operand(t.alternative(), TERNARY_PREC, true, tail, out);
        }
        Expr::UnaryExpression(u) if u.is_postfix() => {
            operand(u.operand(), UNARY_PREC, false, false, out);
            push_token(u.operator(), out);
        }
        Expr::UnaryExpression(u) => render_prefix(u, tail, out),
        Expr::CallExpression(c) => {
            if c.is_rawcall() {
                out.push_str("rawcall");
            } else {
                operand(c.function(), POSTFIX_PREC, false, false, out);
            }
            out.push('(');
            if let Some(args) = c.args() {
                for (i, arg) in args.args().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    operand(Some(arg), OPEN_PREC, true, true, out);
                }
            }
            out.push(')');
        }
        Expr::IndexExpression(i) => {
            operand(i.object(), POSTFIX_PREC, false, false, out);
            out.push('[');
            operand(i.index(), OPEN_PREC, false, true, out);
            out.push(']');
        }
        Expr::DerefExpression(d) => {
            operand(d.object(), POSTFIX_PREC, true, false, out);
            out.push('.');
            push_token(d.member(), out);
        }
        Expr::ParenthesizedExpression(p) => {
            out.push('(');
            operand(p.inner(), OPEN_PREC, false, true, out);
            out.push(')');
        }
        Expr::CloneExpression(e) => keyword_operand("clone", e.operand(), tail, out),
        Expr::DeleteExpression(e) => keyword_operand("delete", e.operand(), tail, out),
        Expr::ResumeExpression(e) => keyword_operand("resume", e.operand(), tail, out),
        Expr::Identifier(i) => push_token(i.name(), out),
        Expr::GlobalVariable(g) => {
            out.push_str("::");
            push_token(g.name(), out);
        }
        _ => out.push_str(&expr.as_cst().text().to_string()),
    }
}

fn render_prefix(unary: &ast::UnaryExpression, tail: bool, out: &mut String) {
    let Some(op) = unary.operator() else {
        return;
    };
    out.push_str(op.text());

    let Some(inner) = unary.operand() else {
        return;
    };
    let mut rendered = String::new();
    let bare = is_prefix_unary(&inner) || (tail && is_open_ended(&inner));
    if precedence(&inner) < POSTFIX_PREC && !bare {
        rendered.push('(');
        render(&inner, true, &mut rendered);
        rendered.push(')');
    } else {
        render(&inner, tail, &mut rendered);
    }

    // Keep `- -x`, `- 1` and `typeof x` from fusing into other tokens.
    let first = rendered.chars().next();
    let needs_space = op.kind() == SyntaxKind::KwTypeof
        || matches!(first, Some('-' | '+'))
        || (op.kind() == SyntaxKind::Minus && first.is_some_and(|c| c.is_ascii_digit()));
    if needs_space {
        out.push(' ');
    }
    out.push_str(&rendered);
}

fn keyword_operand(keyword: &str, inner: Option<Expr>, tail: bool, out: &mut String) {
    out.push_str(keyword);
    out.push(' ');
    operand(inner, OPEN_PREC, false, tail, out);
}
