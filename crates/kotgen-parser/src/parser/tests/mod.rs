//! Tests for declaration parsing.

use crate::parser::{NodeIndex, ParserState, syntax_kind_ext};
use kotgen_scanner::SyntaxKind;

fn parse_source(source: &str) -> crate::parser::ParsedFile {
    ParserState::parse("test.d.ts", source)
}

fn statements(file: &crate::parser::ParsedFile) -> Vec<NodeIndex> {
    let root = file.arena.get(file.root).expect("root");
    file.arena
        .get_source_file(root)
        .expect("source file data")
        .statements
        .nodes
        .clone()
}

#[test]
fn parse_variable_statement_with_declarator_list() {
    let file = parse_source("declare var a: number, b: string;");
    assert!(file.diagnostics.is_empty());

    let stmts = statements(&file);
    assert_eq!(stmts.len(), 1);
    let node = file.arena.get(stmts[0]).unwrap();
    assert_eq!(node.kind, syntax_kind_ext::VARIABLE_STATEMENT);

    let data = file.arena.get_variable_statement(node).unwrap();
    assert!(!data.is_const);
    // payload, comma, payload
    assert_eq!(data.declarations.child_count(), 3);
    assert_eq!(data.declarations.non_separator_count(), 2);

    let first = file.arena.get(data.declarations.non_separator_at(0)).unwrap();
    let first = file.arena.get_variable_declaration(first).unwrap();
    assert_eq!(file.identifier_text(first.name), "a");
    assert_eq!(
        file.node_kind(first.type_annotation),
        SyntaxKind::NumberKeyword as u16
    );
}

#[test]
fn parse_const_statement_sets_flag() {
    let file = parse_source("declare const PI: number;");
    let stmts = statements(&file);
    let node = file.arena.get(stmts[0]).unwrap();
    assert!(file.arena.get_variable_statement(node).unwrap().is_const);
}

#[test]
fn parse_function_declaration_with_signature() {
    let file = parse_source("declare function greet(name: string, loud?: boolean): void;");
    assert!(file.diagnostics.is_empty());

    let stmts = statements(&file);
    let node = file.arena.get(stmts[0]).unwrap();
    let func = file.arena.get_function(node).unwrap();
    assert_eq!(file.identifier_text(func.name), "greet");

    let sig_node = file.arena.get(func.signature).unwrap();
    let sig = file.arena.get_signature(sig_node).unwrap();
    assert!(sig.type_parameters.is_none());
    assert_eq!(sig.parameters.non_separator_count(), 2);
    assert_eq!(
        file.node_kind(sig.type_annotation),
        SyntaxKind::VoidKeyword as u16
    );

    let second = file.arena.get(sig.parameters.non_separator_at(1)).unwrap();
    let second = file.arena.get_parameter(second).unwrap();
    assert!(second.question_token);
    assert!(!second.dot_dot_dot_token);
}

#[test]
fn parse_rest_parameter_marker() {
    let file = parse_source("declare function log(...items: any[]): void;");
    let stmts = statements(&file);
    let node = file.arena.get(stmts[0]).unwrap();
    let func = file.arena.get_function(node).unwrap();
    let sig_node = file.arena.get(func.signature).unwrap();
    let sig = file.arena.get_signature(sig_node).unwrap();

    let param = file.arena.get(sig.parameters.non_separator_at(0)).unwrap();
    let param = file.arena.get_parameter(param).unwrap();
    assert!(param.dot_dot_dot_token);
    assert_eq!(
        file.node_kind(param.type_annotation),
        syntax_kind_ext::ARRAY_TYPE
    );
}

#[test]
fn rest_parameter_not_last_emits_diagnostic() {
    let file = parse_source("declare function f(...xs: any[], y: number): void;");
    assert!(
        file.diagnostics
            .iter()
            .any(|d| d.code
                == kotgen_common::diagnostics::diagnostic_codes::REST_PARAMETER_MUST_BE_LAST)
    );
}

#[test]
fn parse_type_parameters_with_constraint() {
    let file = parse_source("declare function id<T extends object_like>(value: T): T;");
    let stmts = statements(&file);
    let node = file.arena.get(stmts[0]).unwrap();
    let func = file.arena.get_function(node).unwrap();
    let sig_node = file.arena.get(func.signature).unwrap();
    let sig = file.arena.get_signature(sig_node).unwrap();

    let type_params = sig.type_parameters.as_ref().expect("type parameters");
    assert_eq!(type_params.non_separator_count(), 1);
    let tp = file.arena.get(type_params.non_separator_at(0)).unwrap();
    let tp = file.arena.get_type_parameter(tp).unwrap();
    assert_eq!(file.identifier_text(tp.name), "T");
    assert!(tp.constraint.is_some());
}

#[test]
fn parse_interface_with_members() {
    let file = parse_source(
        "interface Point {\n    x: number;\n    y: number;\n    readonly tag?: string;\n    move(dx: number, dy: number): void;\n    'quoted-name': any;\n}",
    );
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);

    let stmts = statements(&file);
    let node = file.arena.get(stmts[0]).unwrap();
    let interface = file.arena.get_interface(node).unwrap();
    assert_eq!(file.identifier_text(interface.name), "Point");
    assert_eq!(interface.members.len(), 5);

    let tag = file.arena.get(interface.members.nodes[2]).unwrap();
    let tag = file.arena.get_property_signature(tag).unwrap();
    assert!(tag.readonly);
    assert!(tag.question_token);

    let method = file.arena.get(interface.members.nodes[3]).unwrap();
    assert_eq!(method.kind, syntax_kind_ext::METHOD_SIGNATURE);

    let quoted = file.arena.get(interface.members.nodes[4]).unwrap();
    let quoted = file.arena.get_property_signature(quoted).unwrap();
    let name_node = file.arena.get(quoted.name).unwrap();
    assert_eq!(name_node.kind, SyntaxKind::StringLiteral as u16);
    assert_eq!(
        file.arena.get_literal(name_node).unwrap().text,
        "'quoted-name'"
    );
}

#[test]
fn parameter_initializer_is_captured_as_raw_text() {
    let file = parse_source("declare function f(mode: string = compute(1, 2)): void;");
    let stmts = statements(&file);
    let node = file.arena.get(stmts[0]).unwrap();
    let func = file.arena.get_function(node).unwrap();
    let sig_node = file.arena.get(func.signature).unwrap();
    let sig = file.arena.get_signature(sig_node).unwrap();

    let param = file.arena.get(sig.parameters.non_separator_at(0)).unwrap();
    let param = file.arena.get_parameter(param).unwrap();
    assert_eq!(
        file.node_kind(param.initializer),
        syntax_kind_ext::OPAQUE_EXPRESSION
    );
    assert_eq!(file.text_of(param.initializer), "compute(1, 2)");
}

#[test]
fn malformed_statement_recovers_and_keeps_parsing() {
    let file = parse_source("garbage garbage;\ndeclare var ok: number;");
    assert!(!file.diagnostics.is_empty());
    let stmts = statements(&file);
    assert_eq!(stmts.len(), 1);
    let node = file.arena.get(stmts[0]).unwrap();
    assert_eq!(node.kind, syntax_kind_ext::VARIABLE_STATEMENT);
}
