//! Lexer for Squirrel.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Literal scanning
//!
//! Logos matches fixed tokens directly. Comments, strings and chars are matched by
//! their opener only; the matching scanner in [`super::scanner`] finds the end and the
//! Logos lexer is bumped past it. Literal bodies are then validated by
//! [`super::literal`].
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. Malformed and unterminated literals also
//! become `Garbage`. Every `Garbage` token has exactly one lexer diagnostic, so the
//! parser wraps them in error nodes without reporting again.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;
use super::literal::{self, LiteralError};
use super::scanner;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Lexer output: the full token stream (trivia included) plus lexical errors.
#[derive(Debug, Clone, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub diagnostics: Diagnostics,
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Extends comment, string and char openers to full tokens
/// - Validates literal bodies, turning malformed ones into `Garbage`
pub fn lex(source: &str) -> Lexed {
    let mut out = Lexed::default();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    out.push_unrecognized(start..end);
                }

                let kind = scan_rest(&mut lexer, kind);
                let span = lexer.span();
                let kind = out.validate(source, kind, span.clone());
                out.tokens.push(Token::new(kind, range_to_text_range(span)));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    out.push_unrecognized(start..source.len());
                }
                break;
            }
        }
    }

    out
}

/// Bumps the lexer past the body of opener tokens and returns the final kind.
/// Unterminated bodies keep their opener kind so `validate` can report them.
fn scan_rest(lexer: &mut logos::Lexer<'_, SyntaxKind>, kind: SyntaxKind) -> SyntaxKind {
    let start = lexer.span().start;
    let text = &lexer.source()[start..];
    let matched = lexer.span().len();

    let (len, terminated, resolved) = match kind {
        SyntaxKind::BlockCommentStart => {
            let scanned = scanner::block_comment(text);
            (scanned.len, scanned.terminated, SyntaxKind::BlockComment)
        }
        SyntaxKind::LineCommentStart => (scanner::line_comment(text), true, SyntaxKind::LineComment),
        SyntaxKind::StringStart => {
            let scanned = scanner::string(text);
            (scanned.len, scanned.terminated, SyntaxKind::StringLit)
        }
        SyntaxKind::VerbatimStart => {
            let scanned = scanner::verbatim_string(text);
            (scanned.len, scanned.terminated, SyntaxKind::VerbatimStringLit)
        }
        SyntaxKind::CharStart => match scanner::quoted_integer(text) {
            Some(len) => (len, true, SyntaxKind::IntegerLit),
            None => {
                let scanned = scanner::char_literal(text);
                (scanned.len, scanned.terminated, SyntaxKind::CharLit)
            }
        },
        _ => return kind,
    };

    lexer.bump(len - matched);
    if terminated { resolved } else { kind }
}

impl Lexed {
    fn push_unrecognized(&mut self, range: Range<usize>) {
        let range = range_to_text_range(range);
        tracing::trace!(?range, "unrecognized input");
        self.diagnostics
            .report(DiagnosticKind::UnrecognizedCharacter, range)
            .emit();
        self.tokens.push(Token::new(SyntaxKind::Garbage, range));
    }

    /// Checks a freshly scanned token; returns `Garbage` if it is malformed.
    fn validate(&mut self, source: &str, kind: SyntaxKind, span: Range<usize>) -> SyntaxKind {
        let text = &source[span.clone()];
        let range = range_to_text_range(span.clone());

        let unterminated = match kind {
            SyntaxKind::BlockCommentStart => {
                Some((DiagnosticKind::UnterminatedComment, 2, "block comment"))
            }
            SyntaxKind::StringStart => Some((DiagnosticKind::UnterminatedString, 1, "string")),
            SyntaxKind::VerbatimStart => {
                Some((DiagnosticKind::UnterminatedString, 2, "verbatim string"))
            }
            SyntaxKind::CharStart => Some((DiagnosticKind::UnterminatedString, 1, "char literal")),
            _ => None,
        };
        if let Some((diag, opener_len, what)) = unterminated {
            let opener = range_to_text_range(span.start..span.start + opener_len);
            tracing::trace!(?range, what, "unterminated literal");
            self.diagnostics.report(diag, opener).message(what).emit();
            return SyntaxKind::Garbage;
        }

        let checked = match kind {
            SyntaxKind::IntegerLit => literal::decode_integer(text).map(drop),
            SyntaxKind::FloatLit => literal::decode_float(text).map(drop),
            SyntaxKind::StringLit => literal::decode_string(text).map(drop),
            SyntaxKind::CharLit => literal::decode_char(text).map(drop),
            _ => return kind,
        };
        let Err(err) = checked else {
            return kind;
        };

        let diag = match err {
            LiteralError::InvalidEscape { .. } => DiagnosticKind::InvalidEscape,
            LiteralError::InvalidChar => DiagnosticKind::InvalidCharLiteral,
            LiteralError::IntegerOverflow(_) | LiteralError::Malformed(_) => {
                DiagnosticKind::InvalidNumber
            }
        };
        let (offset, len) = err.span(text.len());
        let at = span.start + offset;
        let err_range = range_to_text_range(at..at + len);
        tracing::trace!(range = ?err_range, error = %err, "malformed literal");
        self.diagnostics
            .report(diag, err_range)
            .message(err.to_string())
            .emit();
        SyntaxKind::Garbage
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
