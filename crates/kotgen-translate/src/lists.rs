//! Generic traversal over the two child-list shapes.
//!
//! The tree stores children either as a plain list (every entry a payload)
//! or as a separator-delimited list (payloads interleaved with separator
//! tokens). Translation code never indexes children directly; it goes
//! through the projection, search, and iteration operations here, generic
//! over the two capability traits.

use kotgen_parser::{NodeArena, NodeIndex, NodeList, SeparatedNodeList};

/// Ordered child access for plain lists.
pub trait SyntaxListView {
    fn child_count(&self) -> usize;
    fn child_at(&self, index: usize) -> NodeIndex;
}

impl SyntaxListView for NodeList {
    fn child_count(&self) -> usize {
        self.nodes.len()
    }

    fn child_at(&self, index: usize) -> NodeIndex {
        self.nodes.get(index).copied().unwrap_or(NodeIndex::NONE)
    }
}

/// Ordered payload access for separator-delimited lists. `child_*` sees
/// every entry, separators included; `non_separator_*` sees payloads only.
pub trait SeparatedListView {
    fn child_count(&self) -> usize;
    fn child_at(&self, index: usize) -> NodeIndex;
    fn non_separator_count(&self) -> usize;
    fn non_separator_at(&self, index: usize) -> NodeIndex;
}

impl SeparatedListView for SeparatedNodeList {
    fn child_count(&self) -> usize {
        SeparatedNodeList::child_count(self)
    }

    fn child_at(&self, index: usize) -> NodeIndex {
        SeparatedNodeList::child_at(self, index)
    }

    fn non_separator_count(&self) -> usize {
        SeparatedNodeList::non_separator_count(self)
    }

    fn non_separator_at(&self, index: usize) -> NodeIndex {
        SeparatedNodeList::non_separator_at(self, index)
    }
}

/// Project `f` over every child of a plain list, in document order.
pub fn map_list<L, R>(list: &L, mut f: impl FnMut(NodeIndex) -> R) -> Vec<R>
where
    L: SyntaxListView + ?Sized,
{
    let mut results = Vec::with_capacity(list.child_count());
    for i in 0..list.child_count() {
        results.push(f(list.child_at(i)));
    }
    results
}

/// Project `f` over every payload of a separated list, in document order.
/// Separator entries are never visited.
pub fn map_separated<L, R>(list: &L, mut f: impl FnMut(NodeIndex) -> R) -> Vec<R>
where
    L: SeparatedListView + ?Sized,
{
    let mut results = Vec::with_capacity(list.non_separator_count());
    for i in 0..list.non_separator_count() {
        results.push(f(list.non_separator_at(i)));
    }
    results
}

/// Whether any child of a plain list projects (through `f`) to a value equal
/// to `target`. Short-circuits on the first match; false on an empty list.
pub fn list_contains_by<L, T>(
    list: &L,
    target: &T,
    mut f: impl FnMut(NodeIndex) -> T,
) -> bool
where
    L: SyntaxListView + ?Sized,
    T: PartialEq,
{
    for i in 0..list.child_count() {
        if f(list.child_at(i)) == *target {
            return true;
        }
    }
    false
}

/// Whether a plain list contains a child of the given kind.
pub fn list_contains_kind<L>(arena: &NodeArena, list: &L, kind: u16) -> bool
where
    L: SyntaxListView + ?Sized,
{
    list_contains_by(list, &kind, |index| arena.kind_of(index))
}

/// Restartable forward iterator over the payloads of one expected kind in a
/// separated list. Used for declarator-list scans; iteration state lives in
/// the iterator value, so independent scans never interfere.
pub struct SeparatedKindIter<'a, L: SeparatedListView + ?Sized> {
    arena: &'a NodeArena,
    list: &'a L,
    expected_kind: u16,
    position: usize,
}

impl<'a, L: SeparatedListView + ?Sized> Iterator for SeparatedKindIter<'a, L> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        while self.position < self.list.child_count() {
            let index = self.list.child_at(self.position);
            self.position += 1;
            if self.arena.kind_of(index) == self.expected_kind {
                return Some(index);
            }
        }
        None
    }
}

pub fn iter_separated_of_kind<'a, L>(
    arena: &'a NodeArena,
    list: &'a L,
    expected_kind: u16,
) -> SeparatedKindIter<'a, L>
where
    L: SeparatedListView + ?Sized,
{
    SeparatedKindIter {
        arena,
        list,
        expected_kind,
        position: 0,
    }
}
