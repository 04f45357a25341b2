//! Parameter and call-signature translation.

use crate::error::TranslateError;
use crate::escape::escaped_name_text;
use crate::lists::{list_contains_kind, map_separated};
use crate::types::resolve_type_name;
use kotgen_common::span::Span;
use kotgen_kotlin::{ANY, CallSignature, FunParam, TypeAnnotation, TypeParam, UNIT};
use kotgen_parser::parser::syntax_kind_ext;
use kotgen_parser::{NodeIndex, ParsedFile, SeparatedNodeList};
use kotgen_scanner::SyntaxKind;

fn span_of(file: &ParsedFile, node: NodeIndex) -> Span {
    file.arena
        .get(node)
        .map_or(Span::default(), |n| Span::new(n.pos, n.end))
}

/// Translate one parameter node into a `FunParam`.
///
/// Rest parameters must be declared as an array type or a one-argument
/// `Array` generic; the element type becomes the parameter type. Any other
/// rest shape is a `RestParameterShape` error, and an `Array` generic with
/// an argument count other than one is the file-fatal `ArrayArityInvariant`.
pub fn translate_parameter(
    file: &ParsedFile,
    node: NodeIndex,
) -> Result<FunParam, TranslateError> {
    let data = file
        .arena
        .get(node)
        .and_then(|n| file.arena.get_parameter(n))
        .expect("parameter list payloads are parameter nodes");

    let declared_type = data.type_annotation;
    let is_vararg = data.dot_dot_dot_token;

    let effective_type = if is_vararg && declared_type.is_some() {
        match file.node_kind(declared_type) {
            syntax_kind_ext::ARRAY_TYPE => file
                .arena
                .get(declared_type)
                .and_then(|n| file.arena.get_array_type(n))
                .map_or(NodeIndex::NONE, |array| array.element_type),
            syntax_kind_ext::GENERIC_TYPE => {
                let generic = file
                    .arena
                    .get(declared_type)
                    .and_then(|n| file.arena.get_generic_type(n));
                match generic {
                    Some(generic) if file.text_of(generic.name) == "Array" => {
                        let count = generic.type_arguments.non_separator_count();
                        if count != 1 {
                            return Err(TranslateError::ArrayArityInvariant {
                                span: span_of(file, declared_type),
                                count,
                            });
                        }
                        generic.type_arguments.non_separator_at(0)
                    }
                    _ => {
                        return Err(TranslateError::RestParameterShape {
                            span: span_of(file, node),
                        });
                    }
                }
            }
            _ => {
                return Err(TranslateError::RestParameterShape {
                    span: span_of(file, node),
                });
            }
        }
    } else {
        declared_type
    };

    let type_name = if effective_type.is_none() {
        ANY.to_string()
    } else {
        resolve_type_name(file, effective_type)
    };
    let is_nullable = data.question_token;
    let is_lambda = file.node_kind(effective_type) == syntax_kind_ext::FUNCTION_TYPE;
    let is_var = data.modifiers.as_ref().is_some_and(|modifiers| {
        list_contains_kind(&file.arena, modifiers, SyntaxKind::PublicKeyword as u16)
            || list_contains_kind(&file.arena, modifiers, SyntaxKind::PrivateKeyword as u16)
    });

    let default_value = if data.initializer.is_some() {
        Some(file.text_of(data.initializer).trim().to_string())
    } else if is_nullable {
        Some("null".to_string())
    } else {
        None
    };

    Ok(FunParam {
        name: escaped_name_text(file, data.name),
        type_annotation: TypeAnnotation {
            type_name,
            is_nullable,
            is_lambda,
            is_vararg,
        },
        default_value,
        is_var,
    })
}

/// Translate a whole parameter list, preserving document order. Fails on the
/// first parameter that cannot be represented.
pub fn translate_parameter_list(
    file: &ParsedFile,
    parameters: &SeparatedNodeList,
) -> Result<Vec<FunParam>, TranslateError> {
    map_separated(parameters, |parameter| translate_parameter(file, parameter))
        .into_iter()
        .collect()
}

/// Translate a type-parameter list. The name goes through the type-name
/// resolver (identifiers fall out as their own text); the `extends`
/// constraint, when present, becomes the upper bound.
pub fn translate_type_parameters(
    file: &ParsedFile,
    type_parameters: &SeparatedNodeList,
) -> Vec<TypeParam> {
    map_separated(type_parameters, |type_parameter| {
        let data = file
            .arena
            .get(type_parameter)
            .and_then(|n| file.arena.get_type_parameter(n))?;
        Some(TypeParam {
            name: resolve_type_name(file, data.name),
            upper_bound: data
                .constraint
                .is_some()
                .then(|| resolve_type_name(file, data.constraint)),
        })
    })
    .into_iter()
    .flatten()
    .collect()
}

/// Assemble a CALL_SIGNATURE node into a `CallSignature`. The return type
/// defaults to `Unit` when no annotation is written. Fails only by
/// delegation from parameter translation.
pub fn assemble_call_signature(
    file: &ParsedFile,
    node: NodeIndex,
) -> Result<CallSignature, TranslateError> {
    let data = file
        .arena
        .get(node)
        .and_then(|n| file.arena.get_signature(n))
        .expect("call signature node");

    let type_params = data
        .type_parameters
        .as_ref()
        .map(|list| translate_type_parameters(file, list));
    let params = translate_parameter_list(file, &data.parameters)?;
    let return_type = if data.type_annotation.is_none() {
        UNIT.to_string()
    } else {
        resolve_type_name(file, data.type_annotation)
    };

    Ok(CallSignature {
        params,
        type_params,
        return_type: TypeAnnotation::new(return_type),
    })
}
