use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ARRAY_RECOVERY, EXPR_FIRST, TABLE_RECOVERY};

use super::expressions::{POSTFIX_BP, TERNARY_BP};

/// Node wrapping a single literal token.
fn literal_node(kind: SyntaxKind) -> Option<SyntaxKind> {
    let node = match kind {
        SyntaxKind::IntegerLit => SyntaxKind::Integer,
        SyntaxKind::FloatLit => SyntaxKind::Float,
        SyntaxKind::StringLit => SyntaxKind::Str,
        SyntaxKind::VerbatimStringLit => SyntaxKind::VerbatimStr,
        SyntaxKind::CharLit => SyntaxKind::Char,
        SyntaxKind::KwTrue | SyntaxKind::KwFalse => SyntaxKind::Bool,
        SyntaxKind::KwNull => SyntaxKind::Null,
        _ => return None,
    };
    Some(node)
}

impl Parser<'_> {
    /// Returns `false` without consuming if `kind` is not a literal token.
    pub(crate) fn parse_literal(&mut self, kind: SyntaxKind) -> bool {
        let Some(node) = literal_node(kind) else {
            return false;
        };
        self.start_node(node);
        self.bump();
        self.finish_node();
        true
    }

    /// `[ a, b, c ]`. Commas between elements are optional, a trailing one is allowed.
    pub(crate) fn parse_array(&mut self) {
        self.start_node(SyntaxKind::Array);
        self.push_delimiter(SyntaxKind::BracketOpen);
        self.bump();

        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::BracketClose) {
                break;
            }
            if self.currently_is_one_of(EXPR_FIRST) || self.currently_is(SyntaxKind::BraceOpen) {
                self.parse_expr_or_table();
                self.eat_token(SyntaxKind::Comma);
                continue;
            }
            self.error_recover(DiagnosticKind::ExpectedExpression, "in array", ARRAY_RECOVERY);
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.close_delimiter(SyntaxKind::BracketClose, "array");
        self.finish_node();
    }

    /// `{ slot [,] slot ... }`. Commas between slots are optional.
    pub(crate) fn parse_table(&mut self) {
        self.start_node(SyntaxKind::Table);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::BraceClose) {
                break;
            }
            if self.currently_at_table_slot() {
                self.parse_table_slot();
                self.eat_token(SyntaxKind::Comma);
                continue;
            }
            self.error_recover(
                DiagnosticKind::UnexpectedToken,
                "expected a table slot",
                TABLE_RECOVERY,
            );
            if self.currently_at_table_slot() {
                continue;
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.close_delimiter(SyntaxKind::BraceClose, "table");
        self.finish_node();
    }

    fn currently_at_table_slot(&mut self) -> bool {
        self.currently_is_one_of(EXPR_FIRST)
    }

    /// `name = v`, `[key] = v`, `key : v` or `function name(...) {...}`.
    fn parse_table_slot(&mut self) {
        self.start_node(SyntaxKind::TableSlot);

        match self.current() {
            SyntaxKind::Id if self.next_is(SyntaxKind::Equals) => {
                self.bump();
                self.expect(SyntaxKind::Equals, "`=` after slot name");
                self.parse_expr_or_table();
            }
            SyntaxKind::BracketOpen => {
                self.push_delimiter(SyntaxKind::BracketOpen);
                self.bump();
                self.parse_expr();
                self.close_delimiter(SyntaxKind::BracketClose, "computed key");
                if self.expect(SyntaxKind::Equals, "`=` after computed key") {
                    self.parse_expr_or_table();
                }
            }
            SyntaxKind::KwFunction if self.next_is(SyntaxKind::Id) => {
                self.parse_function_declaration();
            }
            _ => {
                // Keys bind tighter than the ternary so that `:` ends them.
                self.parse_expr_bp(TERNARY_BP + 1, false);
                if self.expect(SyntaxKind::Colon, "`:` or `=` in table slot") {
                    self.parse_expr_or_table();
                }
            }
        }

        self.finish_node();
    }

    /// Constant initializers: literals, negative numbers, arrays, tables,
    /// names, global names and calls.
    pub(crate) fn parse_const_value(&mut self) {
        match self.current() {
            SyntaxKind::Minus if self.negative_literal_ahead() => self.parse_negative_literal(),
            SyntaxKind::BracketOpen => self.parse_array(),
            SyntaxKind::BraceOpen => self.parse_table(),
            SyntaxKind::Id | SyntaxKind::DoubleColon | SyntaxKind::KwRawcall => {
                self.parse_expr_bp(POSTFIX_BP, false);
            }
            SyntaxKind::Garbage => self.bump_garbage(),
            kind => {
                if !self.parse_literal(kind) {
                    self.error(DiagnosticKind::ExpectedConstValue);
                }
            }
        }
    }
}
