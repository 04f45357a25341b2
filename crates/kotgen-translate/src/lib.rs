//! Translation core: maps parsed declaration syntax onto the Kotlin output
//! AST.
//!
//! The pieces, leaves first:
//! - [`lists`] - generic traversal over the two child-list shapes; the only
//!   way translation code walks child nodes.
//! - [`escape`] - reserved-word escaping for identifiers and quoted names.
//! - [`types`] - type-name resolution; total, with raw-text passthrough for
//!   shapes that have no structural mapping.
//! - [`params`] - parameter and call-signature translation.
//! - [`declarations`] - per-file orchestration with the skip/report policy
//!   for failed declarations.

pub mod declarations;
pub mod error;
pub mod escape;
pub mod lists;
pub mod params;
pub mod types;

pub use declarations::{FileTranslation, translate_source_file};
pub use error::TranslateError;
pub use escape::{escape_if_needed, escaped_name_text};
pub use params::{
    assemble_call_signature, translate_parameter, translate_parameter_list,
    translate_type_parameters,
};
pub use types::resolve_type_name;
