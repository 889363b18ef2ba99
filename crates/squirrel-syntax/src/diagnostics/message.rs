use rowan::TextRange;
use serde::Serialize;

use crate::parser::cst::SyntaxKind;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics have overlapping spans, the higher-priority one
/// suppresses the lower-priority one. This prevents cascading error noise.
///
/// Priority rationale:
/// - Unclosed delimiters cause massive cascading errors downstream
/// - Broken tokens are root causes the parser cannot see past
/// - Expected token errors are root causes the user should fix first
/// - Misplaced constructs are specific mistakes at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // These cause cascading errors throughout the rest of the file
    UnclosedParen,
    UnclosedBracket,
    UnclosedBrace,
    UnclosedAttribute,
    UnterminatedComment,
    UnterminatedString,

    // Lexer rejected the token
    InvalidEscape,
    InvalidCharLiteral,
    InvalidNumber,
    UnrecognizedCharacter,

    // User omitted something required - root cause errors
    ExpectedExpression,
    ExpectedStatement,
    ExpectedIdentifier,
    ExpectedConstValue,
    ExpectedTerminator,
    ExpectedMember,

    // User wrote something that doesn't belong
    UnexpectedToken,
    UnexpectedEof,
    TableNotAllowed,
    CaseAfterDefault,
    DuplicateDefault,
    VariadicNotLast,
}

/// The three error families exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed literal, unrecognized character.
    LexError,
    /// Token that does not fit the grammar; the expected set is attached where known.
    UnexpectedToken,
    /// Construct left open when the input ran out.
    UnexpectedEndOfInput,
}

/// Which pass produced the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Lex,
    Parse,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this kind suppresses `other` when spans overlap.
    ///
    /// Uses enum discriminant ordering: lower position = higher priority.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// Structural errors are Unclosed* - they cause cascading errors but
    /// should be suppressed by root-cause errors at the same position.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedParen
                | Self::UnclosedBracket
                | Self::UnclosedBrace
                | Self::UnclosedAttribute
        )
    }

    /// Root cause errors - user omitted something required.
    /// These suppress structural errors at the same position.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression
                | Self::ExpectedStatement
                | Self::ExpectedIdentifier
                | Self::ExpectedConstValue
                | Self::ExpectedTerminator
                | Self::ExpectedMember
        )
    }

    pub fn stage(&self) -> Stage {
        match self {
            Self::UnterminatedComment
            | Self::UnterminatedString
            | Self::InvalidEscape
            | Self::InvalidCharLiteral
            | Self::InvalidNumber
            | Self::UnrecognizedCharacter => Stage::Lex,
            _ => Stage::Parse,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnclosedParen
            | Self::UnclosedBracket
            | Self::UnclosedBrace
            | Self::UnclosedAttribute
            | Self::UnterminatedComment
            | Self::UnterminatedString
            | Self::UnexpectedEof => ErrorCategory::UnexpectedEndOfInput,
            Self::InvalidEscape
            | Self::InvalidCharLiteral
            | Self::InvalidNumber
            | Self::UnrecognizedCharacter => ErrorCategory::LexError,
            _ => ErrorCategory::UnexpectedToken,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::TableNotAllowed => Some(
                "tables are allowed after `=`, `<-`, `return`, in call arguments and as ternary branches",
            ),
            Self::VariadicNotLast => Some("move `...` to the end of the parameter list"),
            Self::ExpectedConstValue => {
                Some("constants take literals, arrays, tables, names or calls")
            }
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedAttribute => "missing closing `/>`",
            Self::UnterminatedComment => "unterminated block comment",
            Self::UnterminatedString => "unterminated string",

            Self::InvalidEscape => "invalid escape sequence",
            Self::InvalidCharLiteral => "invalid char literal",
            Self::InvalidNumber => "invalid number literal",
            Self::UnrecognizedCharacter => "unrecognized character",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedStatement => "expected a statement",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedConstValue => "expected a constant value",
            Self::ExpectedTerminator => "expected `;` or a line break",
            Self::ExpectedMember => "expected a class member",

            Self::UnexpectedToken => "unexpected token",
            Self::UnexpectedEof => "unexpected end of input",
            Self::TableNotAllowed => "table literal is not allowed here",
            Self::CaseAfterDefault => "`case` after `default`",
            Self::DuplicateDefault => "duplicate `default`",
            Self::VariadicNotLast => "`...` must be the last parameter",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedParen
            | Self::UnclosedBracket
            | Self::UnclosedBrace
            | Self::UnclosedAttribute => format!("{}; {{}}", self.fallback_message()),

            Self::UnterminatedComment | Self::UnterminatedString => "unterminated {}".to_string(),

            // Decoder messages are complete sentences
            Self::InvalidEscape | Self::InvalidCharLiteral | Self::InvalidNumber => "{}".to_string(),

            Self::ExpectedExpression
            | Self::ExpectedStatement
            | Self::ExpectedIdentifier
            | Self::ExpectedConstValue
            | Self::ExpectedMember => format!("{} {{}}", self.fallback_message()),

            Self::ExpectedTerminator => "expected {}".to_string(),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
    /// Tokens that would have been accepted at `range`.
    pub(crate) expected: Vec<SyntaxKind>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
            hints: kind.default_hint().into_iter().map(String::from).collect(),
            expected: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expected(&self) -> &[SyntaxKind] {
        &self.expected
    }

    pub fn related(&self) -> impl Iterator<Item = (TextRange, &str)> {
        self.related.iter().map(|r| (r.range, r.message.as_str()))
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    /// Whether this diagnostic makes `other` redundant.
    ///
    /// A span strictly inside a higher-priority one is noise. At the same start,
    /// a root cause hides an unclosed delimiter, otherwise priority decides.
    pub(crate) fn hides(&self, other: &DiagnosticMessage) -> bool {
        let (outer, inner) = (self.range, other.range);
        if outer.start() < inner.start() && inner.end() <= outer.end() {
            return self.kind.suppresses(&other.kind);
        }
        if outer.start() != inner.start() {
            return false;
        }
        (self.kind.is_root_cause_error() && other.kind.is_structural_error())
            || self.kind.suppresses(&other.kind)
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

#[derive(Serialize)]
struct RangeJson {
    start: u32,
    end: u32,
}

#[derive(Serialize)]
struct DiagnosticJson<'a> {
    severity: Severity,
    stage: Stage,
    category: ErrorCategory,
    range: RangeJson,
    message: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    expected: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fix: Option<&'a Fix>,
}

impl Serialize for DiagnosticMessage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DiagnosticJson {
            severity: self.severity(),
            stage: self.kind.stage(),
            category: self.category(),
            range: RangeJson {
                start: self.range.start().into(),
                end: self.range.end().into(),
            },
            message: &self.message,
            expected: self.expected.iter().map(|k| k.display_name()).collect(),
            fix: self.fix.as_ref(),
        }
        .serialize(serializer)
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
