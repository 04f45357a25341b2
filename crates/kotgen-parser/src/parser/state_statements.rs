//! Parser state - top-level declarations, parameters, and members.

use super::base::{NodeIndex, SeparatedNodeList};
use super::node::{
    FunctionData, IdentifierData, InterfaceData, LiteralData, MethodSignatureData, ParameterData,
    PropertySignatureData, SignatureData, SourceFileData, TypeParameterData,
    VariableDeclarationData, VariableStatementData,
};
use super::state::ParserState;
use super::syntax_kind_ext;
use kotgen_common::diagnostics::diagnostic_codes;
use kotgen_common::limits;
use kotgen_scanner::SyntaxKind;

impl ParserState {
    /// Parse the whole file into a SOURCE_FILE node.
    pub fn parse_source_file(&mut self) -> NodeIndex {
        let mut statements = Vec::new();

        while !self.is_token(SyntaxKind::EndOfFileToken) {
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                continue;
            }
            let statement = self.parse_statement();
            if statement.is_some() {
                statements.push(statement);
            }
        }

        let end_pos = self.token_end();
        let statements = self.make_node_list(statements);
        self.arena.add_source_file(
            syntax_kind_ext::SOURCE_FILE,
            0,
            end_pos,
            SourceFileData { statements },
        )
    }

    /// Parse one top-level statement. Returns NONE when the statement was
    /// malformed and skipped during recovery.
    pub(crate) fn parse_statement(&mut self) -> NodeIndex {
        // `declare` / `export` prefixes carry no information for the output;
        // consume and ignore them.
        while self.is_token(SyntaxKind::DeclareKeyword) || self.is_token(SyntaxKind::ExportKeyword)
        {
            self.next_token();
        }

        match self.current_token {
            SyntaxKind::VarKeyword | SyntaxKind::LetKeyword | SyntaxKind::ConstKeyword => {
                self.parse_variable_statement()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(),
            SyntaxKind::InterfaceKeyword => self.parse_interface_declaration(),
            _ => {
                self.parse_error_at_current_token(
                    "Declaration expected.",
                    diagnostic_codes::DECLARATION_EXPECTED,
                );
                self.skip_to_statement_boundary();
                NodeIndex::NONE
            }
        }
    }

    /// Skip tokens until a plausible statement boundary: a top-level `;`
    /// (consumed) or the start of the next recognizable declaration.
    fn skip_to_statement_boundary(&mut self) {
        let mut depth = 0u32;
        let mut consumed = 0u32;
        loop {
            match self.current_token {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseBraceToken => depth = depth.saturating_sub(1),
                SyntaxKind::SemicolonToken if depth == 0 => {
                    self.next_token();
                    break;
                }
                SyntaxKind::DeclareKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::VarKeyword
                | SyntaxKind::LetKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::InterfaceKeyword
                    if depth == 0 && consumed > 0 =>
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
    }

    // =========================================================================
    // Variable statements
    // =========================================================================

    pub(crate) fn parse_variable_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_const = self.is_token(SyntaxKind::ConstKeyword);
        self.next_token(); // var / let / const

        let mut children = Vec::new();
        loop {
            let declarator = self.parse_variable_declaration();
            children.push(declarator);

            if !self.is_token(SyntaxKind::CommaToken) {
                break;
            }
            let comma_pos = self.token_pos();
            let comma_end = self.token_end();
            self.next_token();
            if !self.is_identifier_or_keyword() {
                self.parse_error_at_current_token(
                    "Identifier expected.",
                    diagnostic_codes::IDENTIFIER_EXPECTED,
                );
                break;
            }
            children.push(self.arena.add_token(
                SyntaxKind::CommaToken as u16,
                comma_pos,
                comma_end,
            ));
        }
        self.parse_optional(SyntaxKind::SemicolonToken);

        let end_pos = self.prev_token_end();
        let declarations = self.make_separated_list(children);
        self.arena.add_variable_statement(
            syntax_kind_ext::VARIABLE_STATEMENT,
            start_pos,
            end_pos,
            VariableStatementData {
                declarations,
                is_const,
            },
        )
    }

    fn parse_variable_declaration(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let name = self.parse_identifier_name();

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };

        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_opaque_expression()
        } else {
            NodeIndex::NONE
        };

        let end_pos = self.prev_token_end();
        self.arena.add_variable_declaration(
            syntax_kind_ext::VARIABLE_DECLARATION,
            start_pos,
            end_pos,
            VariableDeclarationData {
                name,
                type_annotation,
                initializer,
            },
        )
    }

    // =========================================================================
    // Function declarations and call signatures
    // =========================================================================

    pub(crate) fn parse_function_declaration(&mut self) -> NodeIndex {
        tracing::trace!(pos = self.token_pos(), "parse_function_declaration");
        let start_pos = self.token_pos();
        self.next_token(); // function

        let name = self.parse_identifier_name();
        let signature = self.parse_call_signature();
        self.parse_optional(SyntaxKind::SemicolonToken);

        let end_pos = self.prev_token_end();
        self.arena.add_function(
            syntax_kind_ext::FUNCTION_DECLARATION,
            start_pos,
            end_pos,
            FunctionData { name, signature },
        )
    }

    /// Parse `<T extends U>? ( params ) : ReturnType?` into a CALL_SIGNATURE
    /// node. The return type stays NONE when no annotation is written.
    pub(crate) fn parse_call_signature(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        let type_parameters = self.parse_type_parameter_list();

        self.parse_expected(SyntaxKind::OpenParenToken);
        let parameters = self.parse_parameter_list();
        self.parse_expected(SyntaxKind::CloseParenToken);

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };

        let end_pos = self.prev_token_end();
        self.arena.add_signature(
            syntax_kind_ext::CALL_SIGNATURE,
            start_pos,
            end_pos,
            SignatureData {
                type_parameters,
                parameters,
                type_annotation,
            },
        )
    }

    pub(crate) fn parse_type_parameter_list(&mut self) -> Option<SeparatedNodeList> {
        if !self.parse_optional(SyntaxKind::LessThanToken) {
            return None;
        }

        let mut children = Vec::new();
        while !self.is_token(SyntaxKind::GreaterThanToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let start_pos = self.token_pos();
            let name = self.parse_identifier_name();
            let constraint = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
                self.parse_type()
            } else {
                NodeIndex::NONE
            };
            let end_pos = self.prev_token_end();
            children.push(self.arena.add_type_parameter(
                syntax_kind_ext::TYPE_PARAMETER,
                start_pos,
                end_pos,
                TypeParameterData { name, constraint },
            ));

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

        Some(self.make_separated_list(children))
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    pub(crate) fn parse_parameter_list(&mut self) -> SeparatedNodeList {
        let mut children = Vec::new();
        let mut seen_rest_parameter = false;
        let mut emitted_rest_error = false;

        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            // A rest parameter must be last; check before parsing the next
            // parameter, but only emit once.
            if seen_rest_parameter && !emitted_rest_error {
                self.parse_error_at_current_token(
                    "A rest parameter must be last in a parameter list.",
                    diagnostic_codes::REST_PARAMETER_MUST_BE_LAST,
                );
                emitted_rest_error = true;
            }

            let param = self.parse_parameter();

            let is_rest_param = self
                .arena
                .get(param)
                .and_then(|node| self.arena.get_parameter(node))
                .is_some_and(|data| data.dot_dot_dot_token);
            seen_rest_parameter = seen_rest_parameter || is_rest_param;
            children.push(param);

            if !self.is_token(SyntaxKind::CommaToken) {
                break;
            }
            let comma_pos = self.token_pos();
            let comma_end = self.token_end();
            self.next_token();
            // Trailing commas are allowed; drop the dangling separator so the
            // list stays well formed.
            if self.is_token(SyntaxKind::CloseParenToken) {
                break;
            }
            children.push(self.arena.add_token(
                SyntaxKind::CommaToken as u16,
                comma_pos,
                comma_end,
            ));
        }

        self.make_separated_list(children)
    }

    /// Parse parameter modifiers (public, private, protected, readonly).
    pub(crate) fn parse_parameter_modifiers(&mut self) -> Option<super::base::NodeList> {
        let mut modifiers = Vec::new();
        while matches!(
            self.current_token,
            SyntaxKind::PublicKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::ReadonlyKeyword
        ) {
            let mod_kind = self.current_token;
            let mod_start = self.token_pos();
            let mod_end = self.token_end();
            self.next_token();
            modifiers
                .push(self.arena.add_token(mod_kind as u16, mod_start, mod_end));
        }

        if modifiers.is_empty() {
            None
        } else {
            Some(self.make_node_list(modifiers))
        }
    }

    /// Parse a single parameter.
    pub(crate) fn parse_parameter(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        let modifiers = self.parse_parameter_modifiers();
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = self.parse_identifier_name();
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };

        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            if question_token {
                self.parse_error_at_current_token(
                    "A parameter cannot have question mark and initializer.",
                    diagnostic_codes::PARAMETER_QUESTION_MARK_AND_INITIALIZER,
                );
            }
            self.parse_opaque_expression()
        } else {
            NodeIndex::NONE
        };

        let end_pos = self.prev_token_end();
        self.arena.add_parameter(
            syntax_kind_ext::PARAMETER,
            start_pos,
            end_pos,
            ParameterData {
                modifiers,
                dot_dot_dot_token,
                name,
                question_token,
                type_annotation,
                initializer,
            },
        )
    }

    /// Capture an initializer expression as an opaque raw-text span. The
    /// expression is never evaluated; balanced brackets are skipped so
    /// nested commas do not end the fragment early.
    pub(crate) fn parse_opaque_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut depth = 0u32;
        let mut consumed = 0u32;
        loop {
            match self.current_token {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                SyntaxKind::CommaToken | SyntaxKind::SemicolonToken if depth == 0 => break,
                _ => {}
            }
            self.next_token();
            consumed += 1;
            if consumed >= limits::MAX_RECOVERY_SCAN_TOKENS {
                break;
            }
        }

        if consumed == 0 {
            self.parse_error_at_current_token(
                "Expression expected.",
                diagnostic_codes::EXPRESSION_EXPECTED,
            );
            let pos = self.token_pos();
            return self
                .arena
                .add_token(syntax_kind_ext::OPAQUE_EXPRESSION, pos, pos);
        }

        let end_pos = self.prev_token_end();
        self.arena
            .add_token(syntax_kind_ext::OPAQUE_EXPRESSION, start_pos, end_pos)
    }

    // =========================================================================
    // Interfaces
    // =========================================================================

    pub(crate) fn parse_interface_declaration(&mut self) -> NodeIndex {
        tracing::trace!(pos = self.token_pos(), "parse_interface_declaration");
        let start_pos = self.token_pos();
        self.next_token(); // interface

        let name = self.parse_identifier_name();
        let type_parameters = self.parse_type_parameter_list();

        // Heritage clauses carry no information for the declaration output
        // we produce; skip `extends A, B` up to the body.
        if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            while !self.is_token(SyntaxKind::OpenBraceToken)
                && !self.is_token(SyntaxKind::EndOfFileToken)
            {
                self.next_token();
            }
        }

        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            if self.parse_optional(SyntaxKind::SemicolonToken)
                || self.parse_optional(SyntaxKind::CommaToken)
            {
                continue;
            }
            let member = self.parse_type_member();
            if member.is_some() {
                members.push(member);
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.parse_optional(SyntaxKind::SemicolonToken);

        let end_pos = self.prev_token_end();
        let members = self.make_node_list(members);
        self.arena.add_interface(
            syntax_kind_ext::INTERFACE_DECLARATION,
            start_pos,
            end_pos,
            InterfaceData {
                name,
                type_parameters,
                members,
            },
        )
    }

    /// Parse one interface member: a property signature or a method
    /// signature. Returns NONE for member shapes we do not model (index
    /// signatures and call/construct members), which are skipped with a
    /// diagnostic.
    fn parse_type_member(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();

        let mut readonly = false;
        while self.is_token(SyntaxKind::ReadonlyKeyword) {
            readonly = true;
            self.next_token();
        }

        if !self.is_identifier_or_keyword() && !self.is_token(SyntaxKind::StringLiteral) {
            self.parse_error_at_current_token(
                "Property or method name expected.",
                diagnostic_codes::IDENTIFIER_EXPECTED,
            );
            self.skip_type_member();
            return NodeIndex::NONE;
        }

        let name = self.parse_property_name();
        let question_token = self.parse_optional(SyntaxKind::QuestionToken);

        if self.is_token(SyntaxKind::OpenParenToken) || self.is_token(SyntaxKind::LessThanToken) {
            let signature = self.parse_call_signature();
            let end_pos = self.prev_token_end();
            return self.arena.add_method_signature(
                syntax_kind_ext::METHOD_SIGNATURE,
                start_pos,
                end_pos,
                MethodSignatureData {
                    name,
                    question_token,
                    signature,
                },
            );
        }

        let type_annotation = if self.parse_optional(SyntaxKind::ColonToken) {
            self.parse_type()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.prev_token_end();
        self.arena.add_property_signature(
            syntax_kind_ext::PROPERTY_SIGNATURE,
            start_pos,
            end_pos,
            PropertySignatureData {
                name,
                question_token,
                readonly,
                type_annotation,
            },
        )
    }

    /// Skip a malformed member up to `;`, `,`, `}` or EOF.
    fn skip_type_member(&mut self) {
        let mut depth = 0u32;
        let mut consumed = 0u32;
        loop {
            match self.current_token {
                SyntaxKind::EndOfFileToken => break,
                SyntaxKind::OpenBraceToken
                | SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken => depth += 1,
                SyntaxKind::CloseParenToken | SyntaxKind::CloseBracketToken => {
                    depth = depth.saturating_sub(1);
                }
                SyntaxKind::CloseBraceToken => {
                    if depth == 0 {
                        break;
                    }
                    depth -= 1;
                }
                SyntaxKind::SemicolonToken | SyntaxKind::CommaToken if depth == 0 => {
                    self.next_token();
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
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Parse an identifier (keywords allowed as names), or emit
    /// IDENTIFIER_EXPECTED and produce an empty error node.
    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        if self.is_identifier_or_keyword() {
            let start_pos = self.token_pos();
            let end_pos = self.token_end();
            let text = self.scanner.token_value_ref().to_string();
            self.next_token();
            return self.arena.add_identifier(
                SyntaxKind::Identifier as u16,
                start_pos,
                end_pos,
                IdentifierData { text },
            );
        }

        self.parse_error_at_current_token(
            "Identifier expected.",
            diagnostic_codes::IDENTIFIER_EXPECTED,
        );
        self.error_node()
    }

    /// Parse a member name: identifier or quoted string-literal name.
    pub(crate) fn parse_property_name(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::StringLiteral) {
            let start_pos = self.token_pos();
            let end_pos = self.token_end();
            let text = self.scanner.token_value_ref().to_string();
            self.next_token();
            return self.arena.add_literal(
                SyntaxKind::StringLiteral as u16,
                start_pos,
                end_pos,
                LiteralData { text },
            );
        }
        self.parse_identifier_name()
    }
}
