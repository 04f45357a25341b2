//! Parser state - type parsing.
//!
//! The grammar subset mirrors what the translator understands structurally:
//! primitive keywords, type references, generic types, `T[]` array suffixes,
//! arrow function types, and object type literals. Everything else (unions,
//! intersections, tuples, constructor types, `typeof` queries, literal
//! types) becomes an UNKNOWN_TYPE raw-span node that downstream resolves by
//! text passthrough.

use super::base::NodeIndex;
use super::node::{ArrayTypeData, FunctionTypeData, GenericTypeData, LiteralData};
use super::state::ParserState;
use super::syntax_kind_ext;
use kotgen_common::diagnostics::diagnostic_codes;
use kotgen_common::limits;
use kotgen_scanner::SyntaxKind;

impl ParserState {
    /// Parse a type. Unions and intersections collapse into one raw-span
    /// node covering the whole written type.
    pub(crate) fn parse_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let first = self.parse_postfix_type();

        if !self.is_token(SyntaxKind::BarToken) && !self.is_token(SyntaxKind::AmpersandToken) {
            return first;
        }

        while self.is_token(SyntaxKind::BarToken) || self.is_token(SyntaxKind::AmpersandToken) {
            self.next_token();
            self.parse_postfix_type();
        }
        let end_pos = self.prev_token_end();
        self.arena
            .add_token(syntax_kind_ext::UNKNOWN_TYPE, start_pos, end_pos)
    }

    /// Parse a primary type with `[]` array suffixes applied.
    fn parse_postfix_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut ty = self.parse_primary_type();

        while self.is_token(SyntaxKind::OpenBracketToken) {
            self.next_token();
            self.parse_expected(SyntaxKind::CloseBracketToken);
            let end_pos = self.prev_token_end();
            ty = self.arena.add_array_type(
                syntax_kind_ext::ARRAY_TYPE,
                start_pos,
                end_pos,
                ArrayTypeData { element_type: ty },
            );
        }
        ty
    }

    fn parse_primary_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        match self.current_token {
            SyntaxKind::AnyKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::VoidKeyword => {
                let kind = self.current_token as u16;
                let end_pos = self.token_end();
                self.next_token();
                self.arena.add_token(kind, start_pos, end_pos)
            }
            SyntaxKind::OpenBraceToken => self.parse_object_type(),
            SyntaxKind::OpenParenToken => self.parse_function_type_or_unknown(),
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => {
                // Literal types have no structural mapping; keep the token,
                // resolution falls back to its raw text.
                let kind = self.current_token as u16;
                let end_pos = self.token_end();
                let text = self.scanner.token_value_ref().to_string();
                self.next_token();
                self.arena
                    .add_literal(kind, start_pos, end_pos, LiteralData { text })
            }
            SyntaxKind::NewKeyword | SyntaxKind::TypeofKeyword => {
                self.skip_unknown_type(start_pos)
            }
            _ if self.is_identifier_or_keyword() => self.parse_type_reference(),
            _ => {
                self.error_type_expected();
                self.error_node()
            }
        }
    }

    /// Parse `Name` or `Name<Args>` (the name may be qualified: `A.B.C`).
    fn parse_type_reference(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let name = self.parse_entity_name();

        if !self.is_token(SyntaxKind::LessThanToken) {
            // A plain reference resolves by raw text; the name node itself
            // carries the span.
            return name;
        }

        let type_arguments = self.parse_type_argument_list();
        let end_pos = self.prev_token_end();
        self.arena.add_generic_type(
            syntax_kind_ext::GENERIC_TYPE,
            start_pos,
            end_pos,
            GenericTypeData {
                name,
                type_arguments,
            },
        )
    }

    /// Parse `A` or `A.B.C`; dotted names become one QUALIFIED_NAME raw-span
    /// node.
    fn parse_entity_name(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let first = self.parse_identifier_name();

        if !self.is_token(SyntaxKind::DotToken) {
            return first;
        }
        while self.parse_optional(SyntaxKind::DotToken) {
            self.parse_identifier_name();
        }
        let end_pos = self.prev_token_end();
        self.arena
            .add_token(syntax_kind_ext::QUALIFIED_NAME, start_pos, end_pos)
    }

    fn parse_type_argument_list(&mut self) -> super::base::SeparatedNodeList {
        self.parse_expected(SyntaxKind::LessThanToken);

        let mut children = Vec::new();
        while !self.is_token(SyntaxKind::GreaterThanToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            children.push(self.parse_type());

            if !self.is_token(SyntaxKind::CommaToken) {
                break;
            }
            let comma_pos = self.token_pos();
            let comma_end = self.token_end();
            self.next_token();
            if self.is_token(SyntaxKind::GreaterThanToken) {
                break;
            }
            children.push(self.arena.add_token(
                SyntaxKind::CommaToken as u16,
                comma_pos,
                comma_end,
            ));
        }
        self.parse_expected(SyntaxKind::GreaterThanToken);

        self.make_separated_list(children)
    }

    /// Object type literal `{ ... }`: skip the balanced body and keep the raw
    /// span. The members are not structurally translated.
    fn parse_object_type(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut depth = 0u32;
        loop {
            match self.current_token {
                SyntaxKind::EndOfFileToken => {
                    self.parse_error_at_current_token(
                        "'}' expected.",
                        diagnostic_codes::TOKEN_EXPECTED,
                    );
                    break;
                }
                SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseBraceToken => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        self.next_token();
                        break;
                    }
                }
                _ => {}
            }
            self.next_token();
        }
        let end_pos = self.prev_token_end();
        self.arena
            .add_token(syntax_kind_ext::OBJECT_TYPE, start_pos, end_pos)
    }

    /// `(` in type position: an arrow function type, or some parenthesized
    /// shape we keep as raw text. Try the arrow form speculatively and
    /// rewind when `=>` does not follow the parameter list.
    fn parse_function_type_or_unknown(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let snapshot = self.scanner.save_state();
        let saved_token = self.current_token;
        let saved_prev_end = self.prev_token_end;
        let diagnostic_count = self.diagnostics.len();

        self.next_token(); // consume (
        let parameters = self.parse_parameter_list();
        let close_ok = self.parse_optional(SyntaxKind::CloseParenToken);

        if close_ok && self.is_token(SyntaxKind::EqualsGreaterThanToken) {
            self.next_token();
            let return_type = self.parse_type();
            let end_pos = self.prev_token_end();
            return self.arena.add_function_type(
                syntax_kind_ext::FUNCTION_TYPE,
                start_pos,
                end_pos,
                FunctionTypeData {
                    parameters,
                    return_type,
                },
            );
        }

        // Not an arrow type. Rewind (speculative nodes stay orphaned in the
        // arena) and capture the raw parenthesized text instead.
        self.scanner.restore_state(snapshot);
        self.current_token = saved_token;
        self.prev_token_end = saved_prev_end;
        self.diagnostics.truncate(diagnostic_count);
        self.skip_unknown_type(start_pos)
    }

    /// Consume a type-shaped region we do not model and produce an
    /// UNKNOWN_TYPE raw-span node. Stops at a type boundary token at bracket
    /// depth zero.
    fn skip_unknown_type(&mut self, start_pos: u32) -> NodeIndex {
        let mut depth = 0u32;
        let mut consumed = 0u32;
        loop {
            match self.current_token {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::LessThanToken => depth += 1,
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::GreaterThanToken => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                SyntaxKind::CommaToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::EqualsToken
                | SyntaxKind::BarToken
                | SyntaxKind::AmpersandToken
                    if depth == 0 =>
                {
                    break;
                }
                _ => {}
            }
            self.next_token();
            consumed += 1;
            if consumed >= limits::MAX_RECOVERY_SCAN_TOKENS {
                break;
            }
        }

        if consumed == 0 {
            self.error_type_expected();
            return self.error_node();
        }
        let end_pos = self.prev_token_end();
        self.arena
            .add_token(syntax_kind_ext::UNKNOWN_TYPE, start_pos, end_pos)
    }

    pub(crate) fn error_type_expected(&mut self) {
        self.parse_error_at_current_token("Type expected.", diagnostic_codes::TYPE_EXPECTED);
    }

    /// Create an empty error node for recovery when parsing fails.
    pub(crate) fn error_node(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.arena
            .add_token(SyntaxKind::Identifier as u16, start_pos, start_pos)
    }
}
