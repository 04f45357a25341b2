//! Tokenizer for the TypeScript declaration subset kotgen reads.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `Scanner` - Tokenizer state machine

mod scanner;
mod syntax_kind;

pub use scanner::{Scanner, ScannerSnapshot};
pub use syntax_kind::SyntaxKind;
