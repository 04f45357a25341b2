//! Diagnostics reported by the parser and the translator.
//!
//! A `Diagnostic` is a plain value: category, kotgen error code, file name,
//! byte range, and message text. Rendering (colors, line/column mapping) is
//! the CLI's concern.

use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            file: file.into(),
            start,
            length,
            message_text: message.into(),
        }
    }

    pub fn warning(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            file: file.into(),
            start,
            length,
            message_text: message.into(),
        }
    }
}

/// kotgen diagnostic codes.
///
/// 1xxx codes are syntax-level problems from the parser, 2xxx codes are
/// translation-level problems from the converter.
pub mod diagnostic_codes {
    pub const IDENTIFIER_EXPECTED: u32 = 1001;
    pub const TOKEN_EXPECTED: u32 = 1002;
    pub const TYPE_EXPECTED: u32 = 1003;
    pub const DECLARATION_EXPECTED: u32 = 1004;
    pub const UNTERMINATED_STRING_LITERAL: u32 = 1005;
    pub const UNEXPECTED_CHARACTER: u32 = 1006;
    pub const UNTERMINATED_BLOCK_COMMENT: u32 = 1007;
    pub const EXPRESSION_EXPECTED: u32 = 1008;
    pub const REST_PARAMETER_MUST_BE_LAST: u32 = 1014;
    pub const PARAMETER_QUESTION_MARK_AND_INITIALIZER: u32 = 1015;

    pub const REST_PARAMETER_MUST_BE_ARRAY_TYPE: u32 = 2001;
    pub const DECLARATION_SKIPPED: u32 = 2002;
}
