//! Node indices and the two child-list shapes.

/// Index of a node in the arena. `NONE` marks absent optional children.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Plain ordered child list: every entry is a payload node.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    pub nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Separator-delimited child list.
///
/// Children interleave payload nodes with separator token nodes, in document
/// order: payload, separator, payload, ... Payloads sit at even positions.
/// A well-formed list never starts or ends with a separator; the parser
/// upholds that invariant when it builds one.
#[derive(Clone, Debug, Default)]
pub struct SeparatedNodeList {
    pub children: Vec<NodeIndex>,
}

impl SeparatedNodeList {
    pub fn new(children: Vec<NodeIndex>) -> SeparatedNodeList {
        SeparatedNodeList { children }
    }

    /// Total child count, separators included.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_at(&self, index: usize) -> NodeIndex {
        self.children.get(index).copied().unwrap_or(NodeIndex::NONE)
    }

    /// Number of payload entries.
    pub fn non_separator_count(&self) -> usize {
        self.children.len().div_ceil(2)
    }

    /// Payload at payload-position `index` (separators not counted).
    pub fn non_separator_at(&self, index: usize) -> NodeIndex {
        self.children
            .get(index * 2)
            .copied()
            .unwrap_or(NodeIndex::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separated_list_counts_payloads_only() {
        // payload, separator, payload, separator, payload
        let list = SeparatedNodeList::new(
            [3, 4, 5, 6, 7].iter().map(|&i| NodeIndex(i)).collect(),
        );
        assert_eq!(list.child_count(), 5);
        assert_eq!(list.non_separator_count(), 3);
        assert_eq!(list.non_separator_at(0), NodeIndex(3));
        assert_eq!(list.non_separator_at(1), NodeIndex(5));
        assert_eq!(list.non_separator_at(2), NodeIndex(7));
        assert_eq!(list.non_separator_at(3), NodeIndex::NONE);
    }

    #[test]
    fn empty_separated_list_has_no_payloads() {
        let list = SeparatedNodeList::default();
        assert_eq!(list.child_count(), 0);
        assert_eq!(list.non_separator_count(), 0);
        assert_eq!(list.non_separator_at(0), NodeIndex::NONE);
    }
}
