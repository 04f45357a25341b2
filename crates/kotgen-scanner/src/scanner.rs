//! Hand-written tokenizer state machine.
//!
//! The scanner owns the source text, exposes the current token and its
//! positions, and supports snapshot/restore so the parser can look ahead.
//! Lexical problems are queued as `(start, length, message, code)` tuples and
//! drained by the parser, which owns diagnostic construction.

use crate::SyntaxKind;
use kotgen_common::diagnostics::diagnostic_codes;

/// Saved scanner position for speculative parsing.
#[derive(Clone, Debug)]
pub struct ScannerSnapshot {
    pos: usize,
    token: SyntaxKind,
    token_start: u32,
    token_end: u32,
    token_value: String,
    line_break_before: bool,
}

pub struct Scanner {
    text: String,
    /// Byte offset one past the current token.
    pos: usize,
    token: SyntaxKind,
    token_start: u32,
    token_end: u32,
    /// Cooked value for identifiers and literals (quotes kept for strings).
    token_value: String,
    line_break_before: bool,
    pending_errors: Vec<(u32, u32, &'static str, u32)>,
}

impl Scanner {
    pub fn new(text: String) -> Scanner {
        Scanner {
            text,
            pos: 0,
            token: SyntaxKind::Unknown,
            token_start: 0,
            token_end: 0,
            token_value: String::new(),
            line_break_before: false,
            pending_errors: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Hand the source text back once scanning is done.
    pub fn into_text(self) -> String {
        self.text
    }

    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Start offset of the current token (after leading trivia).
    pub fn token_pos(&self) -> u32 {
        self.token_start
    }

    pub fn token_end(&self) -> u32 {
        self.token_end
    }

    /// Cooked token value: identifier text, literal text (string literals
    /// keep their surrounding quotes).
    pub fn token_value_ref(&self) -> &str {
        &self.token_value
    }

    pub fn has_preceding_line_break(&self) -> bool {
        self.line_break_before
    }

    pub fn save_state(&self) -> ScannerSnapshot {
        ScannerSnapshot {
            pos: self.pos,
            token: self.token,
            token_start: self.token_start,
            token_end: self.token_end,
            token_value: self.token_value.clone(),
            line_break_before: self.line_break_before,
        }
    }

    pub fn restore_state(&mut self, snapshot: ScannerSnapshot) {
        self.pos = snapshot.pos;
        self.token = snapshot.token;
        self.token_start = snapshot.token_start;
        self.token_end = snapshot.token_end;
        self.token_value = snapshot.token_value;
        self.line_break_before = snapshot.line_break_before;
    }

    /// Drain lexical errors queued since the last call.
    pub fn take_errors(&mut self) -> Vec<(u32, u32, &'static str, u32)> {
        std::mem::take(&mut self.pending_errors)
    }

    fn error(&mut self, start: u32, length: u32, message: &'static str, code: u32) {
        self.pending_errors.push((start, length, message, code));
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    fn skip_trivia(&mut self) {
        self.line_break_before = false;
        while let Some(byte) = self.peek(0) {
            match byte {
                b'\n' | b'\r' => {
                    self.line_break_before = true;
                    self.pos += 1;
                }
                b' ' | b'\t' | 0x0b | 0x0c => self.pos += 1,
                b'/' if self.peek(1) == Some(b'/') => {
                    while let Some(b) = self.peek(0) {
                        if b == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                b'/' if self.peek(1) == Some(b'*') => {
                    let comment_start = self.pos as u32;
                    self.pos += 2;
                    let mut terminated = false;
                    while let Some(b) = self.peek(0) {
                        if b == b'\n' {
                            self.line_break_before = true;
                        }
                        if b == b'*' && self.peek(1) == Some(b'/') {
                            self.pos += 2;
                            terminated = true;
                            break;
                        }
                        self.pos += 1;
                    }
                    if !terminated {
                        self.error(
                            comment_start,
                            2,
                            "Unterminated block comment.",
                            diagnostic_codes::UNTERMINATED_BLOCK_COMMENT,
                        );
                    }
                }
                _ => break,
            }
        }
    }

    /// Advance to the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.token_start = self.pos as u32;
        self.token_value.clear();

        let Some(ch) = self.peek(0) else {
            self.token = SyntaxKind::EndOfFileToken;
            self.token_end = self.pos as u32;
            return self.token;
        };

        let kind = match ch {
            b'{' => self.single(SyntaxKind::OpenBraceToken),
            b'}' => self.single(SyntaxKind::CloseBraceToken),
            b'(' => self.single(SyntaxKind::OpenParenToken),
            b')' => self.single(SyntaxKind::CloseParenToken),
            b'[' => self.single(SyntaxKind::OpenBracketToken),
            b']' => self.single(SyntaxKind::CloseBracketToken),
            b'<' => self.single(SyntaxKind::LessThanToken),
            b'>' => self.single(SyntaxKind::GreaterThanToken),
            b',' => self.single(SyntaxKind::CommaToken),
            b':' => self.single(SyntaxKind::ColonToken),
            b';' => self.single(SyntaxKind::SemicolonToken),
            b'?' => self.single(SyntaxKind::QuestionToken),
            b'|' => self.single(SyntaxKind::BarToken),
            b'&' => self.single(SyntaxKind::AmpersandToken),
            b'+' => self.single(SyntaxKind::PlusToken),
            b'*' => self.single(SyntaxKind::AsteriskToken),
            b'/' => self.single(SyntaxKind::SlashToken),
            b'=' => {
                if self.peek(1) == Some(b'>') {
                    self.pos += 2;
                    SyntaxKind::EqualsGreaterThanToken
                } else {
                    self.single(SyntaxKind::EqualsToken)
                }
            }
            b'.' => {
                if self.peek(1) == Some(b'.') && self.peek(2) == Some(b'.') {
                    self.pos += 3;
                    SyntaxKind::DotDotDotToken
                } else {
                    self.single(SyntaxKind::DotToken)
                }
            }
            b'\'' | b'"' => self.scan_string_literal(ch),
            b'0'..=b'9' => self.scan_numeric_literal(),
            b'-' if matches!(self.peek(1), Some(b'0'..=b'9')) => self.scan_numeric_literal(),
            b'-' => self.single(SyntaxKind::MinusToken),
            _ if is_identifier_start(ch) => self.scan_identifier(),
            _ => {
                // Unknown byte: consume one char so the parser makes progress.
                let ch_len = self.text[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, |c| c.len_utf8());
                self.error(
                    self.pos as u32,
                    ch_len as u32,
                    "Unexpected character.",
                    diagnostic_codes::UNEXPECTED_CHARACTER,
                );
                self.pos += ch_len;
                SyntaxKind::Unknown
            }
        };

        self.token = kind;
        self.token_end = self.pos as u32;
        kind
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        let bytes = self.text.as_bytes();
        self.pos += 1;
        while self.pos < bytes.len() && is_identifier_part(bytes[self.pos]) {
            self.pos += 1;
        }
        let text = &self.text[start..self.pos];
        self.token_value.push_str(text);
        SyntaxKind::from_keyword(text).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_string_literal(&mut self, quote: u8) -> SyntaxKind {
        let start = self.pos;
        let bytes = self.text.as_bytes();
        self.pos += 1;
        let mut terminated = false;
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b == quote {
                self.pos += 1;
                terminated = true;
                break;
            }
            if b == b'\n' {
                break;
            }
            if b == b'\\' && self.pos + 1 < bytes.len() {
                self.pos += 2;
            } else {
                self.pos += 1;
            }
        }
        if !terminated {
            self.error(
                start as u32,
                (self.pos - start) as u32,
                "Unterminated string literal.",
                diagnostic_codes::UNTERMINATED_STRING_LITERAL,
            );
        }
        self.token_value.push_str(&self.text[start..self.pos]);
        SyntaxKind::StringLiteral
    }

    fn scan_numeric_literal(&mut self) -> SyntaxKind {
        let start = self.pos;
        let bytes = self.text.as_bytes();
        if bytes[self.pos] == b'-' {
            self.pos += 1;
        }
        if bytes[self.pos] == b'0'
            && matches!(self.peek(1), Some(b'x') | Some(b'X'))
        {
            self.pos += 2;
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_hexdigit() {
                self.pos += 1;
            }
        } else {
            while self.pos < bytes.len()
                && (bytes[self.pos].is_ascii_digit() || bytes[self.pos] == b'.')
            {
                self.pos += 1;
            }
            if matches!(self.peek(0), Some(b'e') | Some(b'E')) {
                self.pos += 1;
                if matches!(self.peek(0), Some(b'+') | Some(b'-')) {
                    self.pos += 1;
                }
                while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
                    self.pos += 1;
                }
            }
        }
        self.token_value.push_str(&self.text[start..self.pos]);
        SyntaxKind::NumericLiteral
    }
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

fn is_identifier_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}
