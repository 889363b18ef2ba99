//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::ast;
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Lexed, Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Debug)]
pub struct ParseResult {
    pub root: ast::Script,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// Work and nesting allowances for one parse. `None` means unbounded.
#[derive(Debug, Default)]
struct Budget {
    exec_initial: Option<u32>,
    exec_remaining: Option<u32>,
    depth: u32,
    depth_limit: Option<u32>,
}

impl Budget {
    /// Spends one unit of execution fuel; `false` once none is left.
    fn spend(&mut self) -> bool {
        match &mut self.exec_remaining {
            Some(0) => false,
            Some(remaining) => {
                *remaining -= 1;
                true
            }
            None => true,
        }
    }

    fn spent(&self) -> u32 {
        match (self.exec_initial, self.exec_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        }
    }

    fn descend(&mut self) -> bool {
        if self.depth_limit.is_some_and(|limit| self.depth >= limit) {
            return false;
        }
        self.depth += 1;
        true
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// A `(`, `[`, `{` or `</` still waiting for its closer.
#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Trivia tokens are buffered and flushed when starting a new node.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    lex_diagnostics: Diagnostics,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) open_delimiters: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    budget: Budget,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, lexed: Lexed) -> Self {
        Self {
            source,
            tokens: lexed.tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            lex_diagnostics: lexed.diagnostics,
            last_diagnostic_pos: None,
            open_delimiters: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            budget: Budget::default(),
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.budget.exec_initial = limit;
        self.budget.exec_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.budget.depth_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        self.parse_script();
        let (cst, diagnostics, exec_fuel_consumed) = self.finish()?;
        let root = SyntaxNode::new_root(cst);
        let root = ast::Script::cast(root).ok_or(Error::MalformedTree)?;
        Ok(ParseResult {
            root,
            diagnostics,
            exec_fuel_consumed,
        })
    }

    fn finish(mut self) -> Result<(GreenNode, Diagnostics, u32), Error> {
        self.drain_trivia();
        if let Some(err) = self.fatal_error {
            tracing::debug!(error = %err, "parse aborted");
            return Err(err);
        }
        let exec_fuel_consumed = self.budget.spent();
        let mut diagnostics = self.lex_diagnostics;
        diagnostics.extend(self.diagnostics);
        diagnostics.sort_by_position();
        Ok((self.builder.finish(), diagnostics, exec_fuel_consumed))
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    fn consume_exec_fuel(&mut self) {
        if !self.budget.spend() {
            self.fatal_error.get_or_insert(Error::ExecFuelExhausted);
        }
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// LL(k) lookahead past trivia.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if !kind.is_trivia() {
                if count == n {
                    return kind;
                }
                count += 1;
            }
            pos += 1;
        }
        SyntaxKind::Error
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    /// Whether the token right after the current one is `kind` with nothing in between.
    pub(super) fn next_is_adjacent(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia_to_buffer();
        self.nth_raw(1) == kind
    }

    /// Whether a line break separates the current token from the previous non-trivia token.
    /// Block comments spanning lines count as line breaks.
    pub(super) fn preceded_by_newline(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.tokens[..self.pos]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| match t.kind {
                SyntaxKind::Newline => true,
                SyntaxKind::BlockComment => token_text(self.source, t).contains('\n'),
                _ => false,
            })
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        self.consume_exec_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        let Some(range) = self.error_range() else {
            return false;
        };
        let diag = if self.eof() {
            DiagnosticKind::UnexpectedEof
        } else {
            DiagnosticKind::UnexpectedToken
        };
        self.diagnostics
            .report(diag, range)
            .message(format!("expected {}", what))
            .expected([kind])
            .emit();
        false
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    fn bump_as_error(&mut self) {
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Lexer-rejected tokens already carry a diagnostic; wrap them silently.
    pub(super) fn bump_garbage(&mut self) {
        self.assert_current(SyntaxKind::Garbage);
        self.bump_as_error();
    }

    fn error_range(&mut self) -> Option<TextRange> {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return None;
        }
        Some(range)
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()));
    }

    /// Reports at the current token. A missing construct at end of input becomes
    /// `UnexpectedEof`, with the construct's wording kept as detail.
    fn report_here(&mut self, kind: DiagnosticKind, detail: Option<String>) {
        let Some(range) = self.error_range() else {
            return;
        };
        let ran_out =
            self.eof() && (kind.is_root_cause_error() || kind == DiagnosticKind::UnexpectedToken);
        let (kind, detail) = if ran_out {
            let base = kind.fallback_message();
            let detail = match detail {
                Some(detail) => format!("{base} {detail}"),
                None => base.to_string(),
            };
            (DiagnosticKind::UnexpectedEof, Some(detail))
        } else {
            (kind, detail)
        };
        let builder = self.diagnostics.report(kind, range);
        match detail {
            Some(detail) => builder.message(detail).emit(),
            None => builder.emit(),
        }
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    /// Reports, then wraps tokens in an `Error` node until one in `recovery` (or EOF).
    pub(super) fn error_recover(
        &mut self,
        kind: DiagnosticKind,
        message: &str,
        recovery: TokenSet,
    ) {
        if self.currently_is_one_of(recovery) || self.should_stop() {
            self.error_msg(kind, message);
            return;
        }

        tracing::trace!(at = ?self.current_span(), ?kind, "recovering");
        self.start_node(SyntaxKind::Error);
        self.error_msg(kind, message);
        while !self.currently_is_one_of(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    /// Statements and expressions nest through here; past the limit the parse aborts.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if !self.budget.descend() {
            self.fatal_error.get_or_insert(Error::RecursionLimitExceeded);
            return false;
        }
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.budget.ascend();
        self.reset_debug_fuel();
    }

    /// Remembers the opener at the current token so a missing closer can point back at it.
    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.open_delimiters.push(OpenDelimiter { kind, span });
    }

    /// Closes the innermost delimiter: consumes `close` or reports what is missing.
    /// At end of input the report spans from the opener to the end.
    pub(super) fn close_delimiter(&mut self, close: SyntaxKind, construct: &str) -> bool {
        let open = self.open_delimiters.pop();
        if self.eat_token(close) {
            return true;
        }
        let Some(open) = open.filter(|_| self.eof()) else {
            return self.expect(close, close.display_name());
        };

        let end = self.current_span().end();
        if !self.should_report(end) {
            return false;
        }
        let kind = match open.kind {
            SyntaxKind::ParenOpen => DiagnosticKind::UnclosedParen,
            SyntaxKind::BracketOpen => DiagnosticKind::UnclosedBracket,
            SyntaxKind::AttributeOpen => DiagnosticKind::UnclosedAttribute,
            _ => DiagnosticKind::UnclosedBrace,
        };
        self.diagnostics
            .report(kind, TextRange::new(open.span.start(), end))
            .message(format!("expected {}", close.display_name()))
            .related_to(format!("{construct} started here"), open.span)
            .emit();
        false
    }

    pub(super) fn last_non_trivia(&self) -> Option<Token> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .copied()
    }

    pub(super) fn error_with_fix(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
        fix_description: impl Into<String>,
        fix_replacement: impl Into<String>,
    ) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics
            .report(kind, range)
            .message(message)
            .fix(fix_description, fix_replacement)
            .emit();
    }

    /// Reports a diagnostic over an explicit range (validation passes).
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange, message: Option<&str>) {
        let builder = self.diagnostics.report(kind, range);
        match message {
            Some(message) => builder.message(message).emit(),
            None => builder.emit(),
        }
    }
}
