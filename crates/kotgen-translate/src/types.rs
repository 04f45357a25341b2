//! Type-name resolution.
//!
//! `resolve_type_name` is total: every type node produces a Kotlin type
//! name. Structurally understood shapes (primitive keywords, arrays,
//! generics, function types) are mapped recursively; everything else,
//! including inline object-type literals, falls back to the node's raw
//! source text.

use crate::lists::map_separated;
use kotgen_common::limits;
use kotgen_kotlin::{ANY, ARRAY, BOOLEAN, NUMBER, STRING, UNIT};
use kotgen_parser::parser::syntax_kind_ext;
use kotgen_parser::{NodeIndex, ParsedFile};
use kotgen_scanner::SyntaxKind;

const ANY_KEYWORD: u16 = SyntaxKind::AnyKeyword as u16;
const NUMBER_KEYWORD: u16 = SyntaxKind::NumberKeyword as u16;
const STRING_KEYWORD: u16 = SyntaxKind::StringKeyword as u16;
const BOOLEAN_KEYWORD: u16 = SyntaxKind::BooleanKeyword as u16;
const VOID_KEYWORD: u16 = SyntaxKind::VoidKeyword as u16;

/// Resolve a type node to its Kotlin type name.
pub fn resolve_type_name(file: &ParsedFile, node: NodeIndex) -> String {
    resolve_with_depth(file, node, 0)
}

fn resolve_with_depth(file: &ParsedFile, node: NodeIndex, depth: u32) -> String {
    resolve_standard_type(file, node, depth)
        .unwrap_or_else(|| file.text_of(node).trim().to_string())
}

/// Structural resolution for the shapes we understand; `None` means the
/// caller falls back to raw-text passthrough. Depth past the nesting limit
/// also answers `None`, which keeps resolution total on pathological input
/// instead of overflowing the stack.
fn resolve_standard_type(file: &ParsedFile, node: NodeIndex, depth: u32) -> Option<String> {
    if depth >= limits::MAX_TYPE_NESTING_DEPTH {
        return None;
    }

    match file.node_kind(node) {
        ANY_KEYWORD => Some(ANY.to_string()),
        NUMBER_KEYWORD => Some(NUMBER.to_string()),
        STRING_KEYWORD => Some(STRING.to_string()),
        BOOLEAN_KEYWORD => Some(BOOLEAN.to_string()),
        VOID_KEYWORD => Some(UNIT.to_string()),
        syntax_kind_ext::ARRAY_TYPE => {
            let data = file
                .arena
                .get(node)
                .and_then(|n| file.arena.get_array_type(n))?;
            let element = resolve_with_depth(file, data.element_type, depth + 1);
            Some(format!("{ARRAY}<{element}>"))
        }
        syntax_kind_ext::GENERIC_TYPE => {
            let data = file
                .arena
                .get(node)
                .and_then(|n| file.arena.get_generic_type(n))?;
            let arguments = map_separated(&data.type_arguments, |argument| {
                resolve_with_depth(file, argument, depth + 1)
            });
            Some(format!(
                "{}<{}>",
                file.text_of(data.name),
                arguments.join(", ")
            ))
        }
        syntax_kind_ext::FUNCTION_TYPE => {
            let data = file
                .arena
                .get(node)
                .and_then(|n| file.arena.get_function_type(n))?;
            let parameter_types = map_separated(&data.parameters, |parameter| {
                let declared = file
                    .arena
                    .get(parameter)
                    .and_then(|n| file.arena.get_parameter(n))
                    .map_or(NodeIndex::NONE, |p| p.type_annotation);
                if declared.is_none() {
                    ANY.to_string()
                } else {
                    resolve_with_depth(file, declared, depth + 1)
                }
            });
            let return_type = resolve_with_depth(file, data.return_type, depth + 1);
            Some(format!("({}) -> {return_type}", parameter_types.join(", ")))
        }
        // Inline object types are deliberately not translated structurally;
        // their trimmed source text is the name.
        syntax_kind_ext::OBJECT_TYPE => Some(file.text_of(node).trim().to_string()),
        _ => None,
    }
}
