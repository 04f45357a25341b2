//! Per-file declaration translation.
//!
//! Walks the top-level statements and produces Kotlin declarations. A
//! declaration that cannot be represented (`RestParameterShape`) is skipped
//! and reported as a diagnostic; the remaining declarations still translate.
//! `ArrayArityInvariant` aborts the whole file.

use crate::error::TranslateError;
use crate::escape::escaped_name_text;
use crate::lists::{iter_separated_of_kind, map_list};
use crate::params::{assemble_call_signature, translate_type_parameters};
use crate::types::resolve_type_name;
use kotgen_common::diagnostics::{Diagnostic, diagnostic_codes};
use kotgen_kotlin::{
    ANY, KtDeclaration, KtFunction, KtMember, KtTrait, KtVariable, TypeAnnotation,
};
use kotgen_parser::parser::node::{InterfaceData, VariableStatementData};
use kotgen_parser::parser::syntax_kind_ext;
use kotgen_parser::{NodeIndex, ParsedFile};

/// Result of translating one parsed file.
#[derive(Debug)]
pub struct FileTranslation {
    pub declarations: Vec<KtDeclaration>,
    pub diagnostics: Vec<Diagnostic>,
}

#[tracing::instrument(level = "trace", skip(file), fields(file_name = %file.file_name))]
pub fn translate_source_file(file: &ParsedFile) -> Result<FileTranslation, TranslateError> {
    let mut declarations = Vec::new();
    let mut diagnostics = Vec::new();

    let Some(source) = file
        .arena
        .get(file.root)
        .and_then(|node| file.arena.get_source_file(node))
    else {
        return Ok(FileTranslation {
            declarations,
            diagnostics,
        });
    };

    let translated = map_list(&source.statements, |statement| {
        translate_statement(file, statement)
    });
    for result in translated {
        match result {
            Ok(mut batch) => declarations.append(&mut batch),
            Err(error @ TranslateError::RestParameterShape { .. }) => {
                let span = error.span();
                tracing::debug!(
                    file = %file.file_name,
                    start = span.start,
                    "skipping untranslatable declaration"
                );
                diagnostics.push(Diagnostic::error(
                    &file.file_name,
                    span.start,
                    span.len(),
                    format!("{error}; the declaration was skipped"),
                    diagnostic_codes::REST_PARAMETER_MUST_BE_ARRAY_TYPE,
                ));
            }
            Err(fatal) => return Err(fatal),
        }
    }

    Ok(FileTranslation {
        declarations,
        diagnostics,
    })
}

/// Translate one top-level statement into zero or more declarations (a
/// variable statement fans out to one declaration per declarator).
fn translate_statement(
    file: &ParsedFile,
    statement: NodeIndex,
) -> Result<Vec<KtDeclaration>, TranslateError> {
    let Some(node) = file.arena.get(statement) else {
        return Ok(Vec::new());
    };

    if let Some(variable) = file.arena.get_variable_statement(node) {
        return Ok(translate_variable_statement(file, variable));
    }
    if let Some(function) = file.arena.get_function(node) {
        return Ok(vec![KtDeclaration::Function(KtFunction {
            name: escaped_name_text(file, function.name),
            signature: assemble_call_signature(file, function.signature)?,
        })]);
    }
    if let Some(interface) = file.arena.get_interface(node) {
        return Ok(vec![translate_interface(file, interface)?]);
    }

    // The parser only emits the statement kinds above; anything else was
    // already skipped with a parse diagnostic.
    Ok(Vec::new())
}

fn translate_variable_statement(
    file: &ParsedFile,
    data: &VariableStatementData,
) -> Vec<KtDeclaration> {
    let mut declarations = Vec::new();
    for declarator in iter_separated_of_kind(
        &file.arena,
        &data.declarations,
        syntax_kind_ext::VARIABLE_DECLARATION,
    ) {
        let Some(declaration) = file
            .arena
            .get(declarator)
            .and_then(|node| file.arena.get_variable_declaration(node))
        else {
            continue;
        };
        let type_name = if declaration.type_annotation.is_none() {
            ANY.to_string()
        } else {
            resolve_type_name(file, declaration.type_annotation)
        };
        declarations.push(KtDeclaration::Variable(KtVariable {
            name: escaped_name_text(file, declaration.name),
            type_annotation: TypeAnnotation::new(type_name),
            is_var: !data.is_const,
        }));
    }
    declarations
}

fn translate_interface(
    file: &ParsedFile,
    data: &InterfaceData,
) -> Result<KtDeclaration, TranslateError> {
    let type_params = data
        .type_parameters
        .as_ref()
        .map(|list| translate_type_parameters(file, list));
    let members = map_list(&data.members, |member| translate_member(file, member))
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .flatten()
        .collect();

    Ok(KtDeclaration::Trait(KtTrait {
        name: escaped_name_text(file, data.name),
        type_params,
        members,
    }))
}

fn translate_member(
    file: &ParsedFile,
    member: NodeIndex,
) -> Result<Option<KtMember>, TranslateError> {
    let Some(node) = file.arena.get(member) else {
        return Ok(None);
    };

    if let Some(property) = file.arena.get_property_signature(node) {
        let type_name = if property.type_annotation.is_none() {
            ANY.to_string()
        } else {
            resolve_type_name(file, property.type_annotation)
        };
        let mut type_annotation = TypeAnnotation::new(type_name);
        type_annotation.is_nullable = property.question_token;
        type_annotation.is_lambda =
            file.node_kind(property.type_annotation) == syntax_kind_ext::FUNCTION_TYPE;
        return Ok(Some(KtMember::Property {
            name: escaped_name_text(file, property.name),
            type_annotation,
            is_var: !property.readonly,
        }));
    }
    if let Some(method) = file.arena.get_method_signature(node) {
        return Ok(Some(KtMember::Function {
            name: escaped_name_text(file, method.name),
            signature: assemble_call_signature(file, method.signature)?,
        }));
    }

    Ok(None)
}
