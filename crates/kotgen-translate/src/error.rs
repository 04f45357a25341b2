//! Hard translation failures.
//!
//! Soft cases never reach here: an unrecognized type shape resolves to its
//! raw source text. Errors exist only for declarations that cannot be
//! represented at all.

use kotgen_common::span::Span;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A rest parameter whose declared type is neither an array type nor a
    /// one-argument `Array` generic. The surrounding declaration is skipped
    /// and reported; other declarations keep translating.
    #[error("rest parameter must be an array type")]
    RestParameterShape { span: Span },

    /// A generic type literally named `Array` with an argument count other
    /// than one. Translation of the whole file aborts on this; it is never
    /// downgraded to a per-declaration skip.
    #[error("Array should have one type argument, but has {count}")]
    ArrayArityInvariant { span: Span, count: usize },
}

impl TranslateError {
    /// Source range of the offending node.
    pub fn span(&self) -> Span {
        match self {
            TranslateError::RestParameterShape { span }
            | TranslateError::ArrayArityInvariant { span, .. } => *span,
        }
    }
}
