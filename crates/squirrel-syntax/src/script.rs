//! Entry point: configure limits, parse, inspect the result.

use rowan::TextSize;

use crate::diagnostics::Diagnostics;
use crate::line_index::{LineCol, LineIndex};
use crate::parser::lexer::lex;
use crate::parser::{ParseResult, Parser, SyntaxNode, ast};
use crate::printer::ScriptPrinter;
use crate::{Error, Result};

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptConfig {
    pub exec_fuel: u32,
    pub recursion_limit: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            exec_fuel: DEFAULT_EXEC_FUEL,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

pub struct ScriptBuilder<'src> {
    src: &'src str,
    config: ScriptConfig,
}

impl<'src> ScriptBuilder<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            config: ScriptConfig::default(),
        }
    }

    /// Execution fuel never replenishes. It bounds the work done on large inputs.
    pub fn with_exec_fuel(mut self, fuel: u32) -> Self {
        self.config.exec_fuel = fuel;
        self
    }

    /// Maximum nesting depth of statements and expressions.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    /// Returns `Err` only when a limit is exceeded; syntax errors land in
    /// [`Script::diagnostics`].
    pub fn parse(self) -> Result<Script<'src>> {
        let lexed = lex(self.src);
        let token_count = lexed.tokens.len();

        let parser = Parser::new(self.src, lexed)
            .with_exec_fuel(Some(self.config.exec_fuel))
            .with_recursion_fuel(Some(self.config.recursion_limit));

        let ParseResult {
            root,
            diagnostics,
            exec_fuel_consumed,
        } = parser.parse()?;

        tracing::debug!(
            tokens = token_count,
            diagnostics = diagnostics.len(),
            fuel = exec_fuel_consumed,
            "parsed script"
        );

        Ok(Script {
            source: self.src,
            line_index: LineIndex::new(self.src),
            root,
            diagnostics,
            exec_fuel_consumed,
        })
    }
}

/// A parsed script: the tree, its diagnostics and the source it came from.
#[derive(Debug, Clone)]
pub struct Script<'src> {
    source: &'src str,
    line_index: LineIndex,
    root: ast::Script,
    diagnostics: Diagnostics,
    exec_fuel_consumed: u32,
}

impl<'src> Script<'src> {
    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn root(&self) -> &ast::Script {
        &self.root
    }

    pub fn syntax(&self) -> &SyntaxNode {
        self.root.as_cst()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// Valid if there are no error-severity diagnostics.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        self.line_index.line_col(offset)
    }

    pub fn printer(&self) -> ScriptPrinter<'_> {
        ScriptPrinter::new(self.syntax())
    }

    /// Turns syntax errors into [`Error::ParseFailed`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::ParseFailed(self.diagnostics))
        }
    }
}

impl<'src> TryFrom<&'src str> for Script<'src> {
    type Error = Error;

    fn try_from(source: &'src str) -> Result<Self> {
        ScriptBuilder::new(source).parse()
    }
}

impl<'src> TryFrom<&'src String> for Script<'src> {
    type Error = Error;

    fn try_from(source: &'src String) -> Result<Self> {
        ScriptBuilder::new(source.as_str()).parse()
    }
}
