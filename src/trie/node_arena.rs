//! An index-addressed arena for trie nodes.
//!
//! Nodes refer to their children by [`NodeId`]. Slots freed by removal go onto a
//! free list and are handed out again by later insertions, so the arena does not
//! grow under repeated insert/remove cycles.

use super::children::Children;

/// Index of a node in a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

impl NodeId {
    /// The root is always the first slot and is never freed.
    pub(crate) const ROOT: NodeId = NodeId(0);

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    #[inline]
    fn index(self) -> usize {
        self.0
    }
}

/// A node in the trie.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) children: Children,
    pub(crate) word: bool,
}

impl Node {
    /// True if this node has no children and does not complete a word.
    #[inline]
    pub(crate) fn is_dead(&self) -> bool {
        !self.word && self.children.is_empty()
    }
}

pub(crate) struct NodeArena {
    slots: Vec<Node>,
    free_list: Vec<NodeId>,
}

impl NodeArena {
    /// Creates an arena holding only an empty root.
    pub(crate) fn new() -> Self {
        NodeArena {
            slots: vec![Node::default()],
            free_list: Vec::new(),
        }
    }

    /// Stores `node` in a recycled slot if one is available, otherwise in a new one.
    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            self.slots[id.index()] = node;
            id
        } else {
            let id = NodeId(self.slots.len());
            self.slots.push(node);
            id
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.slots[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.index()]
    }

    /// Frees `id` and every node below it. The caller must already have detached
    /// `id` from its parent.
    pub(crate) fn release_subtree(&mut self, id: NodeId) {
        debug_assert_ne!(id, NodeId::ROOT, "the root is never released");
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let node = std::mem::take(self.get_mut(id));
            stack.extend(node.children.iter().map(|(_, child)| child));
            self.free_list.push(id);
        }
    }

    /// Returns the number of live nodes, root included.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Returns the number of slots ever allocated, live or free.
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}
