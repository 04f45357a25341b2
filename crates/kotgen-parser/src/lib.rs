//! Declaration-file parser and thin AST for kotgen.
//!
//! The parser reads the TypeScript declaration subset kotgen understands and
//! builds an immutable, arena-backed syntax tree. Nodes are thin `{kind, pos,
//! end}` records; kind-specific payloads live in typed pools on the
//! `NodeArena`. The tree is fully built before any translation runs and is
//! never mutated afterwards.

pub mod parser;

pub use parser::{NodeArena, NodeIndex, NodeList, ParsedFile, ParserState, SeparatedNodeList};
