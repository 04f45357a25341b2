//! Kotlin-side value types.
//!
//! `TypeAnnotation`, `FunParam`, `TypeParam`, and `CallSignature` are the
//! descriptors the translator emits per syntax node; the `Kt*` declaration
//! types aggregate them into a printable file.

use serde::Serialize;
use std::fmt;

pub const ANY: &str = "Any";
pub const NUMBER: &str = "Number";
pub const STRING: &str = "String";
pub const BOOLEAN: &str = "Boolean";
pub const UNIT: &str = "Unit";
pub const ARRAY: &str = "Array";

/// A resolved Kotlin type with the parameter-level flags that change how it
/// prints. `is_vararg` is only set when the declared source type was an array
/// type or a one-argument `Array` generic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeAnnotation {
    pub type_name: String,
    pub is_nullable: bool,
    pub is_lambda: bool,
    pub is_vararg: bool,
}

impl TypeAnnotation {
    pub fn new(type_name: impl Into<String>) -> TypeAnnotation {
        TypeAnnotation {
            type_name: type_name.into(),
            is_nullable: false,
            is_lambda: false,
            is_vararg: false,
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nullable {
            // A nullable function type needs parentheses: ((Int) -> Unit)?
            if self.is_lambda {
                write!(f, "({})?", self.type_name)
            } else {
                write!(f, "{}?", self.type_name)
            }
        } else {
            write!(f, "{}", self.type_name)
        }
    }
}

/// One value parameter. `name` is already escaped. When the source parameter
/// was optional and carried no initializer, `default_value` holds the
/// literal text "null".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunParam {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    pub default_value: Option<String>,
    pub is_var: bool,
}

impl fmt::Display for FunParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.type_annotation.is_vararg {
            write!(f, "vararg ")?;
        }
        if self.is_var {
            write!(f, "var ")?;
        }
        write!(f, "{}: {}", self.name, self.type_annotation)?;
        if let Some(default_value) = &self.default_value {
            write!(f, " = {default_value}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypeParam {
    pub name: String,
    pub upper_bound: Option<String>,
}

impl fmt::Display for TypeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.upper_bound {
            Some(upper_bound) => write!(f, "{} : {}", self.name, upper_bound),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallSignature {
    pub params: Vec<FunParam>,
    pub type_params: Option<Vec<TypeParam>>,
    pub return_type: TypeAnnotation,
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KtFile {
    pub package_name: Option<String>,
    pub declarations: Vec<KtDeclaration>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum KtDeclaration {
    Function(KtFunction),
    Variable(KtVariable),
    Trait(KtTrait),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KtFunction {
    pub name: String,
    pub signature: CallSignature,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KtVariable {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    /// `var` when true, `val` otherwise (source `const` / `readonly`).
    pub is_var: bool,
}

/// Kotlin interface produced from a source interface declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KtTrait {
    pub name: String,
    pub type_params: Option<Vec<TypeParam>>,
    pub members: Vec<KtMember>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum KtMember {
    Function {
        name: String,
        signature: CallSignature,
    },
    Property {
        name: String,
        type_annotation: TypeAnnotation,
        is_var: bool,
    },
}
