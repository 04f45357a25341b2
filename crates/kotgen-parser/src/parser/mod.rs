//! Parser internals: thin nodes, arena pools, and the parser state machine.

pub mod base;
pub mod node;
pub mod node_access;
pub mod node_arena;
pub mod state;
pub mod state_statements;
pub mod state_types;
pub mod syntax_kind_ext;

pub use base::{NodeIndex, NodeList, SeparatedNodeList};
pub use node::{Node, NodeArena};
pub use state::{ParsedFile, ParserState};

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
