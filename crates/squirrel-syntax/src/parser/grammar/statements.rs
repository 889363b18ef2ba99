use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{CASE_BODY_END, EXPR_FIRST};

impl Parser<'_> {
    /// Dispatches on the current token. Caller guarantees it is in `STMT_FIRST`.
    pub(crate) fn parse_statement(&mut self) {
        match self.current() {
            SyntaxKind::BraceOpen => self.parse_block(),
            SyntaxKind::Semicolon => {
                self.start_node(SyntaxKind::EmptyStatement);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::KwIf => self.parse_if(),
            SyntaxKind::KwWhile => self.parse_while(),
            SyntaxKind::KwDo => self.parse_do_while(),
            SyntaxKind::KwSwitch => self.parse_switch(),
            SyntaxKind::KwFor => self.parse_for(),
            SyntaxKind::KwForeach => self.parse_foreach(),
            SyntaxKind::KwBreak => self.parse_jump(SyntaxKind::BreakStatement, "`break`"),
            SyntaxKind::KwContinue => {
                self.parse_jump(SyntaxKind::ContinueStatement, "`continue`")
            }
            SyntaxKind::KwReturn => self.parse_return(),
            SyntaxKind::KwYield => self.parse_yield(),
            SyntaxKind::KwLocal => self.parse_local_declaration(true),
            SyntaxKind::KwVar => self.parse_var(),
            SyntaxKind::KwFunction if self.next_is(SyntaxKind::Id) => {
                self.parse_function_declaration()
            }
            SyntaxKind::KwClass => self.parse_class_declaration(),
            SyntaxKind::KwTry => self.parse_try(),
            SyntaxKind::KwThrow => self.parse_throw(),
            SyntaxKind::KwConst => self.parse_const_declaration(),
            SyntaxKind::KwEnum => self.parse_enum_declaration(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Statement in a position the grammar requires one (bodies, branches).
    pub(crate) fn parse_body(&mut self, what: &str) {
        if self.currently_at_statement_start() {
            self.parse_statement_or_error();
            return;
        }
        self.error_msg(DiagnosticKind::ExpectedStatement, format!("for {what}"));
    }

    fn parse_expression_statement(&mut self) {
        self.start_node(SyntaxKind::ExpressionStatement);
        self.parse_expr();
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    pub(crate) fn parse_block(&mut self) {
        self.start_node(SyntaxKind::Block);
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();
        self.parse_statements_until(SyntaxKind::BraceClose);
        self.close_delimiter(SyntaxKind::BraceClose, "block");
        self.finish_node();
    }

    fn parse_statements_until(&mut self, until: SyntaxKind) {
        while !self.should_stop() && !self.currently_is(until) {
            self.parse_statement_or_error();
        }
    }

    /// `( expr )` as bare tokens of the enclosing statement.
    pub(crate) fn parse_paren_header(&mut self, construct: &str) {
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.expect(SyntaxKind::ParenOpen, &format!("`(` after {construct}"));
            if self.currently_is_one_of(EXPR_FIRST) {
                self.parse_expr();
                self.expect(SyntaxKind::ParenClose, "`)`");
            }
            return;
        }
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.parse_expr();
        self.close_delimiter(SyntaxKind::ParenClose, construct);
    }

    /// `if (cond) stmt [else stmt]`; `else` binds to the nearest `if`.
    fn parse_if(&mut self) {
        self.start_node(SyntaxKind::IfStatement);
        self.bump();

        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_parenthesized();
        } else {
            self.expect(SyntaxKind::ParenOpen, "`(` after `if`");
        }
        self.parse_body("`if` branch");

        if self.currently_is(SyntaxKind::KwElse) {
            self.start_node(SyntaxKind::ElseStatement);
            self.bump();
            self.parse_body("`else` branch");
            self.finish_node();
        }

        self.finish_node();
    }

    /// `while (cond) [stmt]`; the body may be omitted.
    fn parse_while(&mut self) {
        self.start_node(SyntaxKind::WhileStatement);
        self.bump();
        self.parse_paren_header("`while` condition");
        if self.currently_at_statement_start() {
            self.parse_statement_or_error();
        }
        self.finish_node();
    }

    fn parse_do_while(&mut self) {
        self.start_node(SyntaxKind::DoWhileStatement);
        self.bump();
        self.parse_body("`do` body");
        if self.expect(SyntaxKind::KwWhile, "`while` after `do` body") {
            self.parse_paren_header("`while` condition");
        }
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    fn parse_switch(&mut self) {
        self.start_node(SyntaxKind::SwitchStatement);
        self.bump();
        self.parse_paren_header("`switch` value");

        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.expect(SyntaxKind::BraceOpen, "`{` to open `switch` body");
            self.finish_node();
            return;
        }
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        let mut seen_default = false;
        loop {
            if self.should_stop() {
                break;
            }
            match self.current() {
                SyntaxKind::BraceClose => break,
                SyntaxKind::KwCase => {
                    if seen_default {
                        self.error(DiagnosticKind::CaseAfterDefault);
                    }
                    self.parse_case();
                }
                SyntaxKind::KwDefault => {
                    if seen_default {
                        self.error(DiagnosticKind::DuplicateDefault);
                    }
                    seen_default = true;
                    self.parse_default();
                }
                _ => self.error_recover(
                    DiagnosticKind::UnexpectedToken,
                    "expected `case` or `default`",
                    CASE_BODY_END,
                ),
            }
        }

        self.close_delimiter(SyntaxKind::BraceClose, "`switch` body");
        self.finish_node();
    }

    fn parse_case(&mut self) {
        self.start_node(SyntaxKind::CaseStatement);
        self.bump();
        self.parse_expr();
        self.expect(SyntaxKind::Colon, "`:` after `case` value");
        self.parse_case_body();
        self.finish_node();
    }

    fn parse_default(&mut self) {
        self.start_node(SyntaxKind::DefaultStatement);
        self.bump();
        self.expect(SyntaxKind::Colon, "`:` after `default`");
        self.parse_case_body();
        self.finish_node();
    }

    fn parse_case_body(&mut self) {
        while !self.should_stop() && !self.currently_is_one_of(CASE_BODY_END) {
            self.parse_statement_or_error();
        }
    }

    /// `for ([init]; [cond]; [step]) stmt`. Clause roles follow from the `;` positions.
    fn parse_for(&mut self) {
        self.start_node(SyntaxKind::ForStatement);
        self.bump();

        let opened = self.currently_is(SyntaxKind::ParenOpen);
        if opened {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
        } else {
            self.expect(SyntaxKind::ParenOpen, "`(` after `for`");
        }

        if self.currently_is(SyntaxKind::KwLocal) {
            self.parse_local_declaration(false);
        } else if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr();
        }
        self.expect(SyntaxKind::Semicolon, "`;` after `for` initializer");

        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr();
        }
        self.expect(SyntaxKind::Semicolon, "`;` after `for` condition");

        if self.currently_is_one_of(EXPR_FIRST) {
            self.parse_expr();
        }
        if opened {
            self.close_delimiter(SyntaxKind::ParenClose, "`for` header");
        } else {
            self.expect(SyntaxKind::ParenClose, "`)`");
        }

        self.parse_body("`for` body");
        self.finish_node();
    }

    /// `foreach ([index,] value in collection) stmt`
    fn parse_foreach(&mut self) {
        self.start_node(SyntaxKind::ForeachStatement);
        self.bump();

        let opened = self.currently_is(SyntaxKind::ParenOpen);
        if opened {
            self.push_delimiter(SyntaxKind::ParenOpen);
            self.bump();
        } else {
            self.expect(SyntaxKind::ParenOpen, "`(` after `foreach`");
        }

        if self.expect(SyntaxKind::Id, "loop variable") && self.eat_token(SyntaxKind::Comma) {
            self.expect(SyntaxKind::Id, "value variable after `,`");
        }
        if self.expect(SyntaxKind::KwIn, "`in`") {
            self.parse_expr();
        }

        if opened {
            self.close_delimiter(SyntaxKind::ParenClose, "`foreach` header");
        } else {
            self.expect(SyntaxKind::ParenClose, "`)`");
        }

        self.parse_body("`foreach` body");
        self.finish_node();
    }

    /// `break;` and `continue;` require the semicolon.
    fn parse_jump(&mut self, kind: SyntaxKind, keyword: &str) {
        self.start_node(kind);
        self.bump();
        self.expect_semicolon(keyword);
        self.finish_node();
    }

    fn parse_return(&mut self) {
        self.start_node(SyntaxKind::ReturnStatement);
        self.bump();
        if self.currently_is_one_of(EXPR_FIRST) || self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_expr_or_table();
        }
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `yield [expr]` ended by `;` or a line break. A value must start on the same line.
    fn parse_yield(&mut self) {
        self.start_node(SyntaxKind::YieldStatement);
        self.bump();
        if self.currently_is_one_of(EXPR_FIRST) && !self.preceded_by_newline() {
            self.parse_expr();
        }
        self.expect_terminator("`yield`");
        self.finish_node();
    }

    /// `local a = 1, b, c <- 2`. The `for` header supplies its own `;`.
    pub(crate) fn parse_local_declaration(&mut self, with_terminator: bool) {
        self.start_node(SyntaxKind::LocalDeclaration);
        self.bump();

        loop {
            if !self.currently_is(SyntaxKind::Id) {
                self.error_msg(DiagnosticKind::ExpectedIdentifier, "after `local`");
                break;
            }
            self.start_node(SyntaxKind::LocalBinding);
            self.bump();
            if self.currently_is(SyntaxKind::Equals) || self.currently_is(SyntaxKind::NewSlot) {
                self.bump();
                self.parse_expr_or_table();
            }
            self.finish_node();

            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        if with_terminator {
            self.eat_token(SyntaxKind::Semicolon);
        }
        self.finish_node();
    }

    /// `var name = expr`
    fn parse_var(&mut self) {
        self.start_node(SyntaxKind::VarStatement);
        self.bump();
        if self.expect(SyntaxKind::Id, "variable name after `var`")
            && self.expect(SyntaxKind::Equals, "`=` after variable name")
        {
            self.parse_expr_or_table();
        }
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }

    /// `try stmt catch (id) stmt`
    fn parse_try(&mut self) {
        self.start_node(SyntaxKind::TryStatement);
        self.bump();
        self.parse_body("`try` body");

        if self.currently_is(SyntaxKind::KwCatch) {
            self.start_node(SyntaxKind::CatchStatement);
            self.bump();
            if self.currently_is(SyntaxKind::ParenOpen) {
                self.push_delimiter(SyntaxKind::ParenOpen);
                self.bump();
                self.expect(SyntaxKind::Id, "exception variable");
                self.close_delimiter(SyntaxKind::ParenClose, "`catch` binding");
            } else {
                self.expect(SyntaxKind::ParenOpen, "`(` after `catch`");
            }
            self.parse_body("`catch` body");
            self.finish_node();
        } else {
            self.expect(SyntaxKind::KwCatch, "`catch` after `try` body");
        }

        self.finish_node();
    }

    fn parse_throw(&mut self) {
        self.start_node(SyntaxKind::ThrowStatement);
        self.bump();
        self.parse_expr();
        self.eat_token(SyntaxKind::Semicolon);
        self.finish_node();
    }
}
