//! Expression parsing by binding power.
//!
//! | bp | operators                               | assoc |
//! |----|-----------------------------------------|-------|
//! | 1  | `=` `<-` `+=` `-=` `*=` `/=` `%=`        | right |
//! | 2  | `?:`                                    | right |
//! | 3  | `\|\|`                                  | left  |
//! | 4  | `&&` `in`                               | left  |
//! | 5  | `\|`                                    | left  |
//! | 6  | `^`                                     | left  |
//! | 7  | `&`                                     | left  |
//! | 8  | `==` `!=`                               | left  |
//! | 9  | `<` `<=` `>` `>=` `<=>` `instanceof`    | left  |
//! | 10 | `<<` `>>` `>>>`                         | left  |
//! | 11 | `+` `-`                                 | left  |
//! | 12 | `*` `/` `%`                             | left  |
//! | 13 | prefix `- ! ~ typeof ++ --`, postfix `++ --` |  |
//! | 14 | call, index, member                     | left  |
//!
//! Prefix and postfix increments share tier 13, so `-a++` is `(-a)++`.

use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::lexer::token_text;
use crate::parser::cst::token_sets::{ARGS_RECOVERY, EXPR_FIRST, PREFIX_OPERATORS};

pub(crate) const ASSIGN_BP: u8 = 1;
pub(crate) const TERNARY_BP: u8 = 2;
pub(crate) const UNARY_BP: u8 = 13;
pub(crate) const POSTFIX_BP: u8 = 14;

/// Binding power of a binary operator token.
pub(crate) fn infix_binding_power(kind: SyntaxKind) -> Option<u8> {
    let bp = match kind {
        SyntaxKind::PipePipe => 3,
        SyntaxKind::AmpAmp | SyntaxKind::KwIn => 4,
        SyntaxKind::Pipe => 5,
        SyntaxKind::Caret => 6,
        SyntaxKind::Amp => 7,
        SyntaxKind::EqualsEquals | SyntaxKind::BangEquals => 8,
        SyntaxKind::Less
        | SyntaxKind::LessEquals
        | SyntaxKind::Greater
        | SyntaxKind::GreaterEquals
        | SyntaxKind::Spaceship
        | SyntaxKind::KwInstanceof => 9,
        SyntaxKind::ShiftLeft | SyntaxKind::ShiftRight | SyntaxKind::UnsignedShiftRight => 10,
        SyntaxKind::Plus | SyntaxKind::Minus => 11,
        SyntaxKind::Star | SyntaxKind::Slash | SyntaxKind::Percent => 12,
        _ => return None,
    };
    Some(bp)
}

fn assignment_kind(kind: SyntaxKind) -> Option<SyntaxKind> {
    match kind {
        SyntaxKind::Equals => Some(SyntaxKind::AssignmentExpression),
        SyntaxKind::NewSlot
        | SyntaxKind::PlusEquals
        | SyntaxKind::MinusEquals
        | SyntaxKind::StarEquals
        | SyntaxKind::SlashEquals
        | SyntaxKind::PercentEquals => Some(SyntaxKind::UpdateExpression),
        _ => None,
    }
}

impl Parser<'_> {
    /// Full expression. A table literal here is reported and wrapped in an error node.
    pub(crate) fn parse_expr(&mut self) {
        self.parse_expr_bp(0, false);
    }

    /// Full expression where a table literal is also accepted.
    pub(crate) fn parse_expr_or_table(&mut self) {
        self.parse_expr_bp(0, true);
    }

    pub(crate) fn parse_expr_bp(&mut self, min_bp: u8, allow_table: bool) {
        if !self.enter_recursion() {
            self.start_node(SyntaxKind::Error);
            while !self.should_stop() {
                self.bump();
            }
            self.finish_node();
            return;
        }

        let checkpoint = self.checkpoint();
        if self.parse_prefix(allow_table) {
            self.parse_operators(checkpoint, min_bp);
        } else {
            self.error(DiagnosticKind::ExpectedExpression);
        }

        self.exit_recursion();
    }

    /// Operand position: a primary, possibly behind prefix operators.
    /// Returns `false` without consuming if nothing here can start an expression.
    fn parse_prefix(&mut self, allow_table: bool) -> bool {
        match self.current() {
            SyntaxKind::Minus if self.negative_literal_ahead() => self.parse_negative_literal(),
            kind if PREFIX_OPERATORS.contains(kind) => {
                self.start_node(SyntaxKind::UnaryExpression);
                self.bump();
                self.parse_expr_bp(POSTFIX_BP, true);
                self.finish_node();
            }
            SyntaxKind::ParenOpen => self.parse_parenthesized(),
            SyntaxKind::BracketOpen => self.parse_array(),
            SyntaxKind::BraceOpen if allow_table => self.parse_table(),
            SyntaxKind::BraceOpen => {
                self.error(DiagnosticKind::TableNotAllowed);
                self.start_node(SyntaxKind::Error);
                self.parse_table();
                self.finish_node();
            }
            SyntaxKind::Id => {
                self.start_node(SyntaxKind::Identifier);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::DoubleColon => {
                self.start_node(SyntaxKind::GlobalVariable);
                self.bump();
                self.expect(SyntaxKind::Id, "identifier after `::`");
                self.finish_node();
            }
            SyntaxKind::At => self.parse_lambda(),
            SyntaxKind::KwFunction => self.parse_anonymous_function(),
            SyntaxKind::KwClone => self.parse_keyword_operand(SyntaxKind::CloneExpression),
            SyntaxKind::KwDelete => self.parse_keyword_operand(SyntaxKind::DeleteExpression),
            SyntaxKind::KwResume => self.parse_keyword_operand(SyntaxKind::ResumeExpression),
            SyntaxKind::KwRawcall => {
                self.start_node(SyntaxKind::CallExpression);
                self.bump();
                self.parse_call_args();
                self.finish_node();
            }
            SyntaxKind::Garbage => self.bump_garbage(),
            kind => return self.parse_literal(kind),
        }
        true
    }

    /// Postfix accessors, then infix operators binding at least as tight as `min_bp`.
    pub(crate) fn parse_operators(&mut self, checkpoint: Checkpoint, min_bp: u8) {
        loop {
            if self.should_stop() {
                break;
            }
            let kind = self.current();
            match kind {
                SyntaxKind::Dot => {
                    self.start_node_at(checkpoint, SyntaxKind::DerefExpression);
                    self.bump();
                    self.expect(SyntaxKind::Id, "member name after `.`");
                    self.finish_node();
                }
                // A `[` on a new line starts a new element, not an index.
                SyntaxKind::BracketOpen if !self.preceded_by_newline() => {
                    self.start_node_at(checkpoint, SyntaxKind::IndexExpression);
                    self.push_delimiter(SyntaxKind::BracketOpen);
                    self.bump();
                    self.parse_expr();
                    self.close_delimiter(SyntaxKind::BracketClose, "index");
                    self.finish_node();
                }
                SyntaxKind::ParenOpen => {
                    self.start_node_at(checkpoint, SyntaxKind::CallExpression);
                    self.parse_call_args();
                    self.finish_node();
                }
                SyntaxKind::PlusPlus | SyntaxKind::MinusMinus
                    if UNARY_BP >= min_bp && !self.preceded_by_newline() =>
                {
                    self.start_node_at(checkpoint, SyntaxKind::UnaryExpression);
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::Question if TERNARY_BP >= min_bp => {
                    self.start_node_at(checkpoint, SyntaxKind::TernaryExpression);
                    self.bump();
                    self.parse_expr_bp(0, true);
                    if self.expect(SyntaxKind::Colon, "`:` in ternary expression") {
                        self.parse_expr_bp(TERNARY_BP, true);
                    }
                    self.finish_node();
                }
                _ => {
                    if let Some(node) = assignment_kind(kind) {
                        if ASSIGN_BP < min_bp {
                            break;
                        }
                        self.start_node_at(checkpoint, node);
                        self.bump();
                        self.parse_expr_bp(ASSIGN_BP, true);
                        self.finish_node();
                        continue;
                    }

                    let Some(bp) = infix_binding_power(kind) else {
                        break;
                    };
                    if bp < min_bp {
                        break;
                    }
                    self.start_node_at(checkpoint, SyntaxKind::BinaryExpression);
                    self.bump();
                    self.parse_expr_bp(bp + 1, false);
                    self.finish_node();
                }
            }
        }
    }

    /// `-` directly followed by a decimal integer or a `d.d` float, with nothing in between.
    /// Hex, octal, quoted and exponent-only forms stay unary minus.
    pub(crate) fn negative_literal_ahead(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        let Some(next) = self.tokens.get(self.pos + 1) else {
            return false;
        };
        let text = token_text(self.source, next);
        match next.kind {
            SyntaxKind::IntegerLit => text.starts_with(|c: char| matches!(c, '1'..='9')),
            SyntaxKind::FloatLit => text
                .split_once('.')
                .is_some_and(|(_, frac)| frac.starts_with(|c: char| c.is_ascii_digit())),
            _ => false,
        }
    }

    pub(crate) fn parse_negative_literal(&mut self) {
        let node = if self.next_is_adjacent(SyntaxKind::FloatLit) {
            SyntaxKind::Float
        } else {
            SyntaxKind::Integer
        };
        self.start_node(node);
        self.bump();
        self.bump();
        self.finish_node();
    }

    /// `( expr )`
    pub(crate) fn parse_parenthesized(&mut self) {
        self.start_node(SyntaxKind::ParenthesizedExpression);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        self.close_delimiter(SyntaxKind::ParenClose, "parenthesized expression");
        self.finish_node();
    }

    /// `( [arg [, arg]*] )`; arguments may be tables.
    pub(crate) fn parse_call_args(&mut self) {
        self.start_node(SyntaxKind::CallArgs);

        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.expect(SyntaxKind::ParenOpen, "`(` to open argument list");
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        loop {
            if self.should_stop() || self.currently_is(SyntaxKind::ParenClose) {
                break;
            }
            if self.currently_is_one_of(EXPR_FIRST) || self.currently_is(SyntaxKind::BraceOpen) {
                self.parse_expr_or_table();
            } else {
                self.error_recover(
                    DiagnosticKind::ExpectedExpression,
                    "in argument list",
                    ARGS_RECOVERY,
                );
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.close_delimiter(SyntaxKind::ParenClose, "argument list");
        self.finish_node();
    }

    /// `@(params) expr`
    fn parse_lambda(&mut self) {
        self.start_node(SyntaxKind::LambdaExpression);
        self.bump();
        self.parse_parameters();
        self.parse_expr();
        self.finish_node();
    }

    /// `function (params) stmt`
    fn parse_anonymous_function(&mut self) {
        self.start_node(SyntaxKind::AnonymousFunction);
        self.bump();
        self.parse_parameters();
        self.parse_body("function body");
        self.finish_node();
    }

    /// `clone expr`, `delete expr`, `resume expr`
    fn parse_keyword_operand(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();
        self.parse_expr();
        self.finish_node();
    }
}
