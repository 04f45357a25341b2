//! Kotlin declaration AST and printer for kotgen.
//!
//! The translator produces these descriptor values; the printer renders them
//! to Kotlin source. Descriptors are created once per syntax node and never
//! reference the input tree: all text is resolved eagerly.

pub mod ast;
pub mod printer;

pub use ast::{
    ANY, ARRAY, BOOLEAN, CallSignature, FunParam, KtDeclaration, KtFile, KtFunction, KtMember,
    KtTrait, KtVariable, NUMBER, STRING, TypeAnnotation, TypeParam, UNIT,
};
pub use printer::render_file;
