use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// `...` is only meaningful as the final parameter.
    pub(crate) fn validate_variadics(&mut self, variadics: &[(usize, TextRange)], count: usize) {
        for &(index, span) in variadics {
            if index + 1 != count {
                self.error_at(DiagnosticKind::VariadicNotLast, span, None);
            }
        }
    }
}
