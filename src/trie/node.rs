use std::fmt;

use super::node_arena::{Node, NodeArena, NodeId};

/// A read-only view of a node inside a [`Trie`](super::Trie).
///
/// Handles borrow the trie, so they cannot outlive it or observe a mutation.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    arena: &'t NodeArena,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub(crate) fn new(arena: &'t NodeArena, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    #[inline]
    fn node(&self) -> &'t Node {
        self.arena.get(self.id)
    }

    /// True if the path from the root to this node spells a word in the trie.
    #[inline]
    pub fn completes_word(&self) -> bool {
        self.node().word
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: char) -> Option<NodeRef<'t>> {
        let arena = self.arena;
        self.node()
            .children
            .get(letter)
            .map(|id| NodeRef::new(arena, id))
    }

    /// Returns an iterator over all children of this node, in symbol order.
    pub fn children(&self) -> impl ExactSizeIterator<Item = (char, NodeRef<'t>)> + 't {
        let arena = self.arena;
        self.node()
            .children
            .iter()
            .map(move |(ch, id)| (ch, NodeRef::new(arena, id)))
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, rhs: &Self) -> bool {
        std::ptr::eq(self.arena, rhs.arena) && self.id == rhs.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("completes_word", &self.completes_word())
            .field("children", &self.children().map(|(ch, _)| ch).collect::<String>())
            .finish()
    }
}
