//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'a> {
    diagnostics: Vec<DiagnosticMessage>,
    source: &'a str,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    pub(crate) fn new(diagnostics: Vec<DiagnosticMessage>, source: &'a str) -> Self {
        Self {
            diagnostics,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&self.report(diag)))?;
        }
        Ok(())
    }

    /// Title group with the primary span and related spans, then a help group for a fix.
    fn report<'d>(&self, diag: &'d DiagnosticMessage) -> Vec<Group<'d>>
    where
        'a: 'd,
    {
        let span = clamp(diag.range, self.source.len());

        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(span.clone()).label(&diag.message));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        snippet = diag.related.iter().fold(snippet, |snippet, related| {
            snippet.annotation(
                AnnotationKind::Context
                    .span(clamp(related.range, self.source.len()))
                    .label(&related.message),
            )
        });

        let mut groups = vec![level(diag.severity()).primary_title(&diag.message).element(snippet)];
        if let Some(fix) = &diag.fix {
            let patched = Snippet::source(self.source)
                .line_start(1)
                .patch(Patch::new(span, &fix.replacement));
            groups.push(Level::HELP.secondary_title(&fix.description).element(patched));
        }
        groups
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Empty spans widen to one byte so the caret has something to point at.
fn clamp(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
