//! Parser state - token plumbing, diagnostics, and the parsed-file handle.

use super::base::{NodeIndex, NodeList, SeparatedNodeList};
use super::node::NodeArena;
use kotgen_common::diagnostics::{Diagnostic, diagnostic_codes};
use kotgen_common::span::Span;
use kotgen_scanner::{Scanner, SyntaxKind};

/// Result of parsing one file: the immutable tree plus everything needed to
/// read raw source text back out of it.
pub struct ParsedFile {
    pub file_name: String,
    pub text: String,
    pub arena: NodeArena,
    pub root: NodeIndex,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedFile {
    /// Raw source text of a node (exact span, no trivia).
    pub fn text_of(&self, index: NodeIndex) -> &str {
        match self.arena.get(index) {
            Some(node) => Span::new(node.pos, node.end).slice(&self.text),
            None => "",
        }
    }

    pub fn node_kind(&self, index: NodeIndex) -> u16 {
        self.arena.kind_of(index)
    }

    /// Identifier text of a name node, falling back to the raw span for
    /// qualified names and literals.
    pub fn identifier_text(&self, index: NodeIndex) -> &str {
        if let Some(node) = self.arena.get(index) {
            if let Some(data) = self.arena.get_identifier(node) {
                return &data.text;
            }
        }
        self.text_of(index)
    }
}

pub struct ParserState {
    pub(crate) scanner: Scanner,
    pub(crate) current_token: SyntaxKind,
    /// End offset of the most recently consumed token; node spans close here
    /// so they never swallow lookahead trivia.
    pub(crate) prev_token_end: u32,
    pub(crate) arena: NodeArena,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) file_name: String,
}

impl ParserState {
    pub fn new(file_name: String, source: String) -> ParserState {
        let mut state = ParserState {
            scanner: Scanner::new(source),
            current_token: SyntaxKind::Unknown,
            prev_token_end: 0,
            arena: NodeArena::new(),
            diagnostics: Vec::new(),
            file_name,
        };
        state.next_token();
        state
    }

    /// Parse `source` in one call.
    pub fn parse(file_name: impl Into<String>, source: impl Into<String>) -> ParsedFile {
        let mut state = ParserState::new(file_name.into(), source.into());
        let root = state.parse_source_file();
        state.into_parsed(root)
    }

    pub fn into_parsed(self, root: NodeIndex) -> ParsedFile {
        ParsedFile {
            file_name: self.file_name,
            text: self.scanner.into_text(),
            arena: self.arena,
            root,
            diagnostics: self.diagnostics,
        }
    }

    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // =========================================================================
    // Token plumbing
    // =========================================================================

    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.prev_token_end = self.scanner.token_end();
        self.current_token = self.scanner.scan();
        for (start, length, message, code) in self.scanner.take_errors() {
            self.diagnostics
                .push(Diagnostic::error(&self.file_name, start, length, message, code));
        }
        self.current_token
    }

    #[inline]
    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_token == kind
    }

    #[inline]
    pub(crate) fn is_identifier_or_keyword(&self) -> bool {
        self.current_token.is_identifier_or_keyword()
    }

    pub(crate) fn token_pos(&self) -> u32 {
        self.scanner.token_pos()
    }

    pub(crate) fn token_end(&self) -> u32 {
        self.scanner.token_end()
    }

    pub(crate) fn prev_token_end(&self) -> u32 {
        self.prev_token_end
    }

    /// Consume the token if it matches; report whether it did.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Consume the expected token, or emit TOKEN_EXPECTED and leave the
    /// current token in place for recovery.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            self.parse_error_at_current_token(
                &format!("'{}' expected.", token_display(kind)),
                diagnostic_codes::TOKEN_EXPECTED,
            );
            false
        }
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    pub(crate) fn parse_error_at(&mut self, start: u32, length: u32, message: &str, code: u32) {
        self.diagnostics
            .push(Diagnostic::error(&self.file_name, start, length, message, code));
    }

    pub(crate) fn parse_error_at_current_token(&mut self, message: &str, code: u32) {
        let start = self.token_pos();
        let length = self.token_end().saturating_sub(start);
        self.parse_error_at(start, length, message, code);
    }

    // =========================================================================
    // List construction
    // =========================================================================

    pub(crate) fn make_node_list(&self, nodes: Vec<NodeIndex>) -> NodeList {
        NodeList::new(nodes)
    }

    pub(crate) fn make_separated_list(&self, children: Vec<NodeIndex>) -> SeparatedNodeList {
        SeparatedNodeList::new(children)
    }
}

/// Human-readable token text for diagnostics.
fn token_display(kind: SyntaxKind) -> &'static str {
    match kind {
        SyntaxKind::OpenBraceToken => "{",
        SyntaxKind::CloseBraceToken => "}",
        SyntaxKind::OpenParenToken => "(",
        SyntaxKind::CloseParenToken => ")",
        SyntaxKind::OpenBracketToken => "[",
        SyntaxKind::CloseBracketToken => "]",
        SyntaxKind::LessThanToken => "<",
        SyntaxKind::GreaterThanToken => ">",
        SyntaxKind::CommaToken => ",",
        SyntaxKind::ColonToken => ":",
        SyntaxKind::SemicolonToken => ";",
        SyntaxKind::QuestionToken => "?",
        SyntaxKind::EqualsToken => "=",
        SyntaxKind::EqualsGreaterThanToken => "=>",
        SyntaxKind::DotDotDotToken => "...",
        SyntaxKind::Identifier => "identifier",
        _ => "token",
    }
}
