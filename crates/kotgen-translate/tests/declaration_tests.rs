//! Tests for per-file declaration translation and the skip/report policy.

use kotgen_common::diagnostics::diagnostic_codes;
use kotgen_kotlin::{KtDeclaration, KtMember};
use kotgen_parser::ParserState;
use kotgen_translate::{FileTranslation, TranslateError, translate_source_file};

fn translate(source: &str) -> FileTranslation {
    let file = ParserState::parse("test.d.ts", source);
    assert!(
        file.diagnostics.is_empty(),
        "unexpected parse diagnostics: {:?}",
        file.diagnostics
    );
    translate_source_file(&file).unwrap()
}

#[test]
fn variable_statement_fans_out_per_declarator() {
    let translation = translate("declare var a: number, b: string, c;");
    assert_eq!(translation.declarations.len(), 3);

    let KtDeclaration::Variable(a) = &translation.declarations[0] else {
        panic!("expected variable");
    };
    assert_eq!(a.name, "a");
    assert_eq!(a.type_annotation.type_name, "Number");
    assert!(a.is_var);

    let KtDeclaration::Variable(c) = &translation.declarations[2] else {
        panic!("expected variable");
    };
    assert_eq!(c.type_annotation.type_name, "Any");
}

#[test]
fn const_becomes_val() {
    let translation = translate("declare const VERSION: string;");
    let KtDeclaration::Variable(version) = &translation.declarations[0] else {
        panic!("expected variable");
    };
    assert!(!version.is_var);
}

#[test]
fn function_declaration_translates_to_kt_function() {
    let translation = translate("declare function greet(name: string): void;");
    let KtDeclaration::Function(greet) = &translation.declarations[0] else {
        panic!("expected function");
    };
    assert_eq!(greet.name, "greet");
    assert_eq!(greet.signature.return_type.type_name, "Unit");
    assert_eq!(greet.signature.params[0].type_annotation.type_name, "String");
}

#[test]
fn interface_translates_members() {
    let translation = translate(
        "interface Point<T extends Coord> {\n    x: number;\n    readonly tag?: string;\n    move(dx: number): void;\n    'val': any;\n}",
    );
    let KtDeclaration::Trait(point) = &translation.declarations[0] else {
        panic!("expected trait");
    };
    assert_eq!(point.name, "Point");
    let type_params = point.type_params.as_ref().unwrap();
    assert_eq!(type_params[0].upper_bound.as_deref(), Some("Coord"));
    assert_eq!(point.members.len(), 4);

    let KtMember::Property {
        name,
        type_annotation,
        is_var,
    } = &point.members[1]
    else {
        panic!("expected property");
    };
    assert_eq!(name, "tag");
    assert!(type_annotation.is_nullable);
    assert!(!is_var);

    let KtMember::Function { name, signature } = &point.members[2] else {
        panic!("expected method");
    };
    assert_eq!(name, "move");
    assert_eq!(signature.params[0].type_annotation.type_name, "Number");

    // Quoted member name: quotes stripped, then escaped as a reserved word.
    let KtMember::Property { name, .. } = &point.members[3] else {
        panic!("expected property");
    };
    assert_eq!(name, "`val`");
}

#[test]
fn untranslatable_declaration_is_skipped_and_reported() {
    let file = ParserState::parse(
        "test.d.ts",
        "declare function bad(...xs: number): void;\ndeclare var ok: string;",
    );
    let translation = translate_source_file(&file).unwrap();

    assert_eq!(translation.declarations.len(), 1);
    let KtDeclaration::Variable(ok) = &translation.declarations[0] else {
        panic!("expected the surviving variable");
    };
    assert_eq!(ok.name, "ok");

    assert_eq!(translation.diagnostics.len(), 1);
    let report = &translation.diagnostics[0];
    assert_eq!(report.code, diagnostic_codes::REST_PARAMETER_MUST_BE_ARRAY_TYPE);
    assert!(report.message_text.contains("rest parameter must be an array type"));
}

#[test]
fn array_arity_invariant_aborts_the_file() {
    let file = ParserState::parse(
        "test.d.ts",
        "declare var ok: string;\ndeclare function bad(...xs: Array<number, string>): void;",
    );
    let error = translate_source_file(&file).unwrap_err();
    assert!(matches!(error, TranslateError::ArrayArityInvariant { count: 2, .. }));
}

#[test]
fn method_rest_parameter_failure_skips_whole_interface() {
    let file = ParserState::parse(
        "test.d.ts",
        "interface Broken {\n    ok: number;\n    bad(...xs: string): void;\n}\ndeclare var after: boolean;",
    );
    let translation = translate_source_file(&file).unwrap();
    assert_eq!(translation.declarations.len(), 1);
    assert!(matches!(
        translation.declarations[0],
        KtDeclaration::Variable(_)
    ));
    assert_eq!(translation.diagnostics.len(), 1);
}
