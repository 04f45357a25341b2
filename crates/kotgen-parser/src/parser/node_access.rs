//! NodeArena access methods: kind-guarded payload lookup.
//!
//! Every accessor checks the node's kind before touching its pool, so a
//! mismatched index yields `None` instead of a wrong payload.

use super::base::NodeIndex;
use super::node::*;
use super::syntax_kind_ext;
use kotgen_scanner::SyntaxKind;

impl NodeArena {
    /// Get a thin node by index.
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Kind of the node at `index`, or `SyntaxKind::Unknown as u16` for NONE.
    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> u16 {
        self.get(index)
            .map_or(SyntaxKind::Unknown as u16, |node| node.kind)
    }

    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        if node.has_data() && node.kind == SyntaxKind::Identifier as u16 {
            self.identifiers.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        if node.has_data()
            && (node.kind == SyntaxKind::StringLiteral as u16
                || node.kind == SyntaxKind::NumericLiteral as u16)
        {
            self.literals.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        if node.has_data() && node.kind == syntax_kind_ext::PARAMETER {
            self.parameters.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_type_parameter(&self, node: &Node) -> Option<&TypeParameterData> {
        if node.has_data() && node.kind == syntax_kind_ext::TYPE_PARAMETER {
            self.type_parameters.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_signature(&self, node: &Node) -> Option<&SignatureData> {
        if node.has_data() && node.kind == syntax_kind_ext::CALL_SIGNATURE {
            self.signatures.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_function(&self, node: &Node) -> Option<&FunctionData> {
        if node.has_data() && node.kind == syntax_kind_ext::FUNCTION_DECLARATION {
            self.functions.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_statement(&self, node: &Node) -> Option<&VariableStatementData> {
        if node.has_data() && node.kind == syntax_kind_ext::VARIABLE_STATEMENT {
            self.variables.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_variable_declaration(&self, node: &Node) -> Option<&VariableDeclarationData> {
        if node.has_data() && node.kind == syntax_kind_ext::VARIABLE_DECLARATION {
            self.variable_declarations.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_interface(&self, node: &Node) -> Option<&InterfaceData> {
        if node.has_data() && node.kind == syntax_kind_ext::INTERFACE_DECLARATION {
            self.interfaces.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_property_signature(&self, node: &Node) -> Option<&PropertySignatureData> {
        if node.has_data() && node.kind == syntax_kind_ext::PROPERTY_SIGNATURE {
            self.property_signatures.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_method_signature(&self, node: &Node) -> Option<&MethodSignatureData> {
        if node.has_data() && node.kind == syntax_kind_ext::METHOD_SIGNATURE {
            self.method_signatures.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_generic_type(&self, node: &Node) -> Option<&GenericTypeData> {
        if node.has_data() && node.kind == syntax_kind_ext::GENERIC_TYPE {
            self.generic_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_array_type(&self, node: &Node) -> Option<&ArrayTypeData> {
        if node.has_data() && node.kind == syntax_kind_ext::ARRAY_TYPE {
            self.array_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_function_type(&self, node: &Node) -> Option<&FunctionTypeData> {
        if node.has_data() && node.kind == syntax_kind_ext::FUNCTION_TYPE {
            self.function_types.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        if node.has_data() && node.kind == syntax_kind_ext::SOURCE_FILE {
            self.source_files.get(node.data_index as usize)
        } else {
            None
        }
    }
}
