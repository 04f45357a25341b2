//! Tests for call-signature assembly.

use kotgen_kotlin::CallSignature;
use kotgen_parser::{NodeIndex, ParsedFile, ParserState};
use kotgen_translate::assemble_call_signature;

fn parse_function(source: &str) -> (ParsedFile, NodeIndex) {
    let file = ParserState::parse("test.d.ts", source);
    assert!(
        file.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        file.diagnostics
    );
    let root = file.arena.get(file.root).unwrap();
    let statements = &file.arena.get_source_file(root).unwrap().statements;
    let statement = file.arena.get(statements.nodes[0]).unwrap();
    let signature = file.arena.get_function(statement).unwrap().signature;
    (file, signature)
}

fn assemble(source: &str) -> CallSignature {
    let (file, signature) = parse_function(source);
    assemble_call_signature(&file, signature).unwrap()
}

#[test]
fn missing_return_type_defaults_to_unit() {
    let signature = assemble("declare function f();");
    assert_eq!(signature.return_type.type_name, "Unit");
    assert!(signature.params.is_empty());
    assert!(signature.type_params.is_none());
}

#[test]
fn declared_return_type_is_resolved() {
    let signature = assemble("declare function f(): string[];");
    assert_eq!(signature.return_type.type_name, "Array<String>");
}

#[test]
fn type_parameters_carry_resolved_bounds() {
    let signature = assemble("declare function pick<T, U extends Keys<T>>(obj: T, key: U): any;");
    let type_params = signature.type_params.expect("type params");
    assert_eq!(type_params.len(), 2);
    assert_eq!(type_params[0].name, "T");
    assert!(type_params[0].upper_bound.is_none());
    assert_eq!(type_params[1].name, "U");
    assert_eq!(type_params[1].upper_bound.as_deref(), Some("Keys<T>"));
}

#[test]
fn parameters_preserve_document_order() {
    let signature = assemble("declare function f(first: number, second: string, third?: any);");
    let names: Vec<&str> = signature.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
    assert!(signature.params[2].type_annotation.is_nullable);
}

#[test]
fn parameter_failure_propagates_out_of_assembly() {
    let (file, signature) = parse_function("declare function f(a: number, ...bad: string): void;");
    assert!(assemble_call_signature(&file, signature).is_err());
}
