//! Lossless lexer and parser for the Squirrel scripting language.
//!
//! # Example
//!
//! ```
//! use squirrel_syntax::Script;
//!
//! let source = "local x = 1 + 2 * 3;";
//!
//! let script = Script::try_from(source).expect("out of fuel");
//! assert!(script.is_valid());
//! eprintln!("{}", script.diagnostics().render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod line_index;
pub mod parser;
pub mod printer;
pub mod render;
pub mod script;


pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use line_index::{LineCol, LineIndex};
pub use printer::ScriptPrinter;
pub use script::{Script, ScriptBuilder};

/// Errors that stop a parse outright.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// The builder produced a root that is not a `Script` node.
    #[error("parser produced a malformed tree")]
    MalformedTree,

    #[error("script parsing failed with {} errors", .0.error_count())]
    ParseFailed(Diagnostics),
}

/// Result type for script operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source` with default limits.
///
/// Syntax errors do not fail the call; check [`Script::is_valid`] or use
/// [`Script::into_result`].
pub fn parse(source: &str) -> Result<Script<'_>> {
    ScriptBuilder::new(source).parse()
}
