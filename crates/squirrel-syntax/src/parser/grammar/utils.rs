use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{STMT_FIRST, STMT_SYNC};

impl Parser<'_> {
    pub fn parse_script(&mut self) {
        self.start_node(SyntaxKind::Script);

        while !self.should_stop() {
            if self.currently_is(SyntaxKind::BraceClose) {
                self.error_and_bump_msg(DiagnosticKind::UnexpectedToken, "unmatched `}`");
                continue;
            }
            self.parse_statement_or_error();
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Parses one statement, or wraps the offending tokens in an `Error` node.
    /// Always consumes at least one token when not at a closing brace.
    pub(crate) fn parse_statement_or_error(&mut self) {
        if !self.enter_recursion() {
            self.start_node(SyntaxKind::Error);
            while !self.should_stop() {
                self.bump();
            }
            self.finish_node();
            return;
        }
        self.parse_statement_or_error_inner();
        self.exit_recursion();
    }

    fn parse_statement_or_error_inner(&mut self) {
        if self.currently_is(SyntaxKind::Garbage) {
            self.bump_garbage();
            return;
        }
        if self.currently_at_statement_start() {
            self.parse_statement();
            return;
        }
        self.error_until_statement_start();
    }

    pub(crate) fn currently_at_statement_start(&mut self) -> bool {
        self.currently_is_one_of(STMT_FIRST)
    }

    pub(crate) fn error_until_statement_start(&mut self) {
        if self.should_stop() {
            return;
        }

        tracing::trace!(at = ?self.current_span(), "skipping to next statement");
        self.start_node(SyntaxKind::Error);
        self.error(DiagnosticKind::ExpectedStatement);
        loop {
            self.bump();
            if self.should_stop() || self.currently_is_one_of(STMT_SYNC) {
                break;
            }
        }
        self.finish_node();
    }

    /// `;`, a line break, `}` or end of input.
    pub(crate) fn expect_terminator(&mut self, after: &str) {
        if self.eat_token(SyntaxKind::Semicolon)
            || self.eof()
            || self.currently_is(SyntaxKind::BraceClose)
            || self.preceded_by_newline()
        {
            return;
        }
        self.error_msg(
            DiagnosticKind::ExpectedTerminator,
            format!("`;` or a line break after {after}"),
        );
    }

    /// Strictly `;`, with a fix that appends it to the previous token.
    pub(crate) fn expect_semicolon(&mut self, after: &str) {
        if self.eat_token(SyntaxKind::Semicolon) {
            return;
        }
        let Some(prev) = self.last_non_trivia() else {
            return;
        };
        let text = &self.source[std::ops::Range::<usize>::from(prev.span)];
        self.error_with_fix(
            DiagnosticKind::ExpectedTerminator,
            prev.span,
            format!("`;` after {after}"),
            "insert `;`",
            format!("{text};"),
        );
    }
}
