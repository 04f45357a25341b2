//! Node kind constants.
//!
//! Token kinds come from `kotgen_scanner::SyntaxKind` (`0..=LAST_TOKEN`);
//! node kinds occupy a disjoint `u16` range above them. Thin nodes store
//! either in their `kind` field.

use kotgen_scanner::SyntaxKind;

const BASE: u16 = SyntaxKind::LAST_TOKEN + 256;

pub const SOURCE_FILE: u16 = BASE;
pub const VARIABLE_STATEMENT: u16 = BASE + 1;
pub const VARIABLE_DECLARATION: u16 = BASE + 2;
pub const FUNCTION_DECLARATION: u16 = BASE + 3;
pub const INTERFACE_DECLARATION: u16 = BASE + 4;
pub const PROPERTY_SIGNATURE: u16 = BASE + 5;
pub const METHOD_SIGNATURE: u16 = BASE + 6;
pub const CALL_SIGNATURE: u16 = BASE + 7;
pub const PARAMETER: u16 = BASE + 8;
pub const TYPE_PARAMETER: u16 = BASE + 9;
pub const QUALIFIED_NAME: u16 = BASE + 10;
pub const GENERIC_TYPE: u16 = BASE + 11;
pub const ARRAY_TYPE: u16 = BASE + 12;
pub const FUNCTION_TYPE: u16 = BASE + 13;
pub const OBJECT_TYPE: u16 = BASE + 14;
pub const UNKNOWN_TYPE: u16 = BASE + 15;
pub const OPAQUE_EXPRESSION: u16 = BASE + 16;
