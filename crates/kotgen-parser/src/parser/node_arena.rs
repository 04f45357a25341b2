//! NodeArena creation methods (add_* methods).

use super::base::NodeIndex;
use super::node::*;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push_node(&mut self, kind: u16, pos: u32, end: u32, data_index: u32) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(Node {
            kind,
            pos,
            end,
            data_index,
        });
        NodeIndex(index)
    }

    /// Add a token node or a raw-span node (no payload).
    pub fn add_token(&mut self, kind: u16, pos: u32, end: u32) -> NodeIndex {
        self.push_node(kind, pos, end, Node::NO_DATA)
    }

    pub fn add_identifier(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: IdentifierData,
    ) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_literal(&mut self, kind: u16, pos: u32, end: u32, data: LiteralData) -> NodeIndex {
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_parameter(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: ParameterData,
    ) -> NodeIndex {
        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_type_parameter(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: TypeParameterData,
    ) -> NodeIndex {
        let data_index = self.type_parameters.len() as u32;
        self.type_parameters.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_signature(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: SignatureData,
    ) -> NodeIndex {
        let data_index = self.signatures.len() as u32;
        self.signatures.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_function(&mut self, kind: u16, pos: u32, end: u32, data: FunctionData) -> NodeIndex {
        let data_index = self.functions.len() as u32;
        self.functions.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_variable_statement(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: VariableStatementData,
    ) -> NodeIndex {
        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_variable_declaration(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: VariableDeclarationData,
    ) -> NodeIndex {
        let data_index = self.variable_declarations.len() as u32;
        self.variable_declarations.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_interface(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: InterfaceData,
    ) -> NodeIndex {
        let data_index = self.interfaces.len() as u32;
        self.interfaces.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_property_signature(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: PropertySignatureData,
    ) -> NodeIndex {
        let data_index = self.property_signatures.len() as u32;
        self.property_signatures.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_method_signature(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: MethodSignatureData,
    ) -> NodeIndex {
        let data_index = self.method_signatures.len() as u32;
        self.method_signatures.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_generic_type(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: GenericTypeData,
    ) -> NodeIndex {
        let data_index = self.generic_types.len() as u32;
        self.generic_types.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_array_type(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: ArrayTypeData,
    ) -> NodeIndex {
        let data_index = self.array_types.len() as u32;
        self.array_types.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_function_type(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: FunctionTypeData,
    ) -> NodeIndex {
        let data_index = self.function_types.len() as u32;
        self.function_types.push(data);
        self.push_node(kind, pos, end, data_index)
    }

    pub fn add_source_file(
        &mut self,
        kind: u16,
        pos: u32,
        end: u32,
        data: SourceFileData,
    ) -> NodeIndex {
        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        self.push_node(kind, pos, end, data_index)
    }
}
