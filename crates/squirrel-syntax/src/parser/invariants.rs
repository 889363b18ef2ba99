//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Each lookahead spends one unit; consuming a token or changing depth refills.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let left = self.debug_fuel.get();
        assert!(left != 0, "parser looked ahead 256 times without consuming a token");
        self.debug_fuel.set(left - 1);
    }

    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(found, expected, "caller dispatched on {expected:?} but the parser is at {found:?}");
    }
}
