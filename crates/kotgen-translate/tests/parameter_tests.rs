//! Tests for parameter translation.

use kotgen_kotlin::FunParam;
use kotgen_parser::{ParsedFile, ParserState, SeparatedNodeList};
use kotgen_translate::{TranslateError, translate_parameter_list};

fn parse_function(params_text: &str) -> ParsedFile {
    let file = ParserState::parse(
        "test.d.ts",
        format!("declare function f({params_text}): void;"),
    );
    assert!(
        file.diagnostics.is_empty(),
        "unexpected diagnostics for `{params_text}`: {:?}",
        file.diagnostics
    );
    file
}

fn parameters(file: &ParsedFile) -> SeparatedNodeList {
    let root = file.arena.get(file.root).unwrap();
    let statements = &file.arena.get_source_file(root).unwrap().statements;
    let statement = file.arena.get(statements.nodes[0]).unwrap();
    let function = file.arena.get_function(statement).unwrap();
    let signature = file.arena.get(function.signature).unwrap();
    file.arena.get_signature(signature).unwrap().parameters.clone()
}

fn translate(params_text: &str) -> Result<Vec<FunParam>, TranslateError> {
    let file = parse_function(params_text);
    let parameters = parameters(&file);
    translate_parameter_list(&file, &parameters)
}

#[test]
fn simple_parameter_list_end_to_end() {
    let params = translate("a: boolean, b: any, c: SomeType").unwrap();
    assert_eq!(params.len(), 3);

    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    let types: Vec<&str> = params
        .iter()
        .map(|p| p.type_annotation.type_name.as_str())
        .collect();
    assert_eq!(types, vec!["Boolean", "Any", "SomeType"]);
    for param in &params {
        assert!(!param.type_annotation.is_vararg);
        assert!(!param.type_annotation.is_nullable);
        assert!(param.default_value.is_none());
    }
}

#[test]
fn untyped_parameter_defaults_to_any() {
    let params = translate("x").unwrap();
    assert_eq!(params[0].type_annotation.type_name, "Any");
}

#[test]
fn vararg_with_array_suffix_type_uses_element_type() {
    let params = translate("...nums: number[]").unwrap();
    assert!(params[0].type_annotation.is_vararg);
    assert_eq!(params[0].type_annotation.type_name, "Number");
}

#[test]
fn vararg_with_array_generic_uses_argument_type() {
    let params = translate("...strs: Array<string>").unwrap();
    assert!(params[0].type_annotation.is_vararg);
    assert_eq!(params[0].type_annotation.type_name, "String");
}

#[test]
fn vararg_with_nested_array_keeps_inner_structure() {
    let params = translate("...rows: number[][]").unwrap();
    assert_eq!(params[0].type_annotation.type_name, "Array<Number>");
}

#[test]
fn vararg_with_plain_type_is_an_error() {
    let error = translate("...bad: number").unwrap_err();
    assert!(matches!(error, TranslateError::RestParameterShape { .. }));
    assert_eq!(error.to_string(), "rest parameter must be an array type");
}

#[test]
fn vararg_with_wrong_array_arity_is_fatal() {
    let error = translate("...bad: Array<string, number>").unwrap_err();
    match error {
        TranslateError::ArrayArityInvariant { count, .. } => assert_eq!(count, 2),
        other => panic!("expected ArrayArityInvariant, got {other:?}"),
    }
}

#[test]
fn vararg_without_type_annotation_is_any() {
    let params = translate("...rest").unwrap();
    assert!(params[0].type_annotation.is_vararg);
    assert_eq!(params[0].type_annotation.type_name, "Any");
}

#[test]
fn optional_untyped_parameter_gets_null_default() {
    let params = translate("x?").unwrap();
    assert!(params[0].type_annotation.is_nullable);
    assert_eq!(params[0].type_annotation.type_name, "Any");
    assert_eq!(params[0].default_value.as_deref(), Some("null"));
}

#[test]
fn optional_typed_parameter_gets_null_default() {
    let params = translate("mode?: string").unwrap();
    assert!(params[0].type_annotation.is_nullable);
    assert_eq!(params[0].type_annotation.type_name, "String");
    assert_eq!(params[0].default_value.as_deref(), Some("null"));
}

#[test]
fn initializer_text_is_carried_verbatim() {
    let params = translate("mode: string = compute(1, 2)").unwrap();
    assert_eq!(params[0].default_value.as_deref(), Some("compute(1, 2)"));
    assert!(!params[0].type_annotation.is_nullable);
}

#[test]
fn function_typed_parameter_is_a_lambda() {
    let params = translate("callback: (value: number) => void").unwrap();
    assert!(params[0].type_annotation.is_lambda);
    assert_eq!(params[0].type_annotation.type_name, "(Number) -> Unit");
}

#[test]
fn vararg_of_function_array_is_a_lambda() {
    let params = translate("...callbacks: Array<() => void>").unwrap();
    assert!(params[0].type_annotation.is_vararg);
    assert!(params[0].type_annotation.is_lambda);
    assert_eq!(params[0].type_annotation.type_name, "() -> Unit");
}

#[test]
fn reserved_and_marked_names_are_escaped() {
    let params = translate("val: number, x$y: string, normalName: boolean").unwrap();
    assert_eq!(params[0].name, "`val`");
    assert_eq!(params[1].name, "`x$y`");
    assert_eq!(params[2].name, "normalName");
}

#[test]
fn visibility_modifier_marks_parameter_as_var() {
    let params = translate("public x: number, y: string").unwrap();
    assert!(params[0].is_var);
    assert!(!params[1].is_var);
}
