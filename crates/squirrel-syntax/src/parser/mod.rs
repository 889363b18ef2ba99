//! Parser infrastructure for Squirrel scripts.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: binary, ternary, assignment and postfix nodes are opened
//!   retroactively once the operator is seen
//! - Explicit recovery sets: per-production sets determine when to bail vs consume
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree. Recovery follows these rules:
//!
//! 1. Tokens that cannot start a statement are wrapped in `SyntaxKind::Error` nodes
//!    up to the next statement boundary
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. Delimiters left open at end of input are reported against their opener
//! 4. Lexer-rejected tokens (`Garbage`) become error nodes without a second diagnostic
//!
//! However, fuel exhaustion (exec_fuel, recursion_fuel) returns an actual error immediately.

pub mod ast;
pub mod cst;
pub mod lexer;
pub mod literal;
pub mod scanner;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{Expr, Stmt, field_name};

pub use core::{ParseResult, Parser};

pub(crate) use grammar::infix_binding_power;

use crate::Error;
use crate::script::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_LIMIT};
use lexer::lex;

/// Parses with the default fuel limits.
pub fn parse(source: &str) -> Result<ParseResult, Error> {
    Parser::new(source, lex(source))
        .with_exec_fuel(Some(DEFAULT_EXEC_FUEL))
        .with_recursion_fuel(Some(DEFAULT_RECURSION_LIMIT))
        .parse()
}
