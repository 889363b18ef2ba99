//! Grammar productions for Squirrel.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Statements are recursive descent; expressions use binding powers
//! (see [`expressions`]) so that operator chains stay iterative.

mod declarations;
mod expressions;
mod literals;
mod statements;
mod utils;
mod validation;

pub(crate) use expressions::infix_binding_power;
