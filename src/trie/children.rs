use super::node_arena::NodeId;

/// A compact representation of the children of a trie node that doesn't allocate until
/// there are at least three children.
///
/// Edges are always kept sorted by symbol, so iteration order is symbol order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Children {
    /// No children.
    #[default]
    None,
    /// Exactly one child (letter, node).
    One((char, NodeId)),
    /// Exactly two children (letter1, node1, letter2, node2), with letter1 < letter2.
    Two((char, NodeId, char, NodeId)),
    /// Three or more children stored in a sorted vector.
    Many(Vec<(char, NodeId)>),
}

impl Children {
    /// Gets the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub(crate) fn get_index(&self, index: usize) -> Option<(char, NodeId)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub(crate) fn get(&self, letter: char) -> Option<NodeId> {
        match self {
            Children::None => None,
            Children::One((ch, node)) => (*ch == letter).then_some(*node),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(children) => children
                .binary_search_by_key(&letter, |&(c, _)| c)
                .ok()
                .map(|pos| children[pos].1),
        }
    }

    /// Adds an edge in sorted position.
    pub(crate) fn insert(&mut self, letter: char, child: NodeId) {
        debug_assert!(self.get(letter).is_none(), "insert: letter already exists");
        *self = match std::mem::take(self) {
            Children::None => Children::One((letter, child)),
            Children::One((c1, n1)) => {
                if letter < c1 {
                    Children::Two((letter, child, c1, n1))
                } else {
                    Children::Two((c1, n1, letter, child))
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                let mut v = vec![(c1, n1), (c2, n2), (letter, child)];
                v.sort_by_key(|&(c, _)| c);
                Children::Many(v)
            }
            Children::Many(mut children) => {
                let pos = children.partition_point(|&(c, _)| c < letter);
                children.insert(pos, (letter, child));
                Children::Many(children)
            }
        };
    }

    /// Removes the edge labeled `letter`, returning the node it led to.
    pub(crate) fn remove(&mut self, letter: char) -> Option<NodeId> {
        let (removed, rest) = match std::mem::take(self) {
            Children::None => (None, Children::None),
            Children::One((c, n)) => {
                if c == letter {
                    (Some(n), Children::None)
                } else {
                    (None, Children::One((c, n)))
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                if c1 == letter {
                    (Some(n1), Children::One((c2, n2)))
                } else if c2 == letter {
                    (Some(n2), Children::One((c1, n1)))
                } else {
                    (None, Children::Two((c1, n1, c2, n2)))
                }
            }
            Children::Many(mut children) => {
                match children.binary_search_by_key(&letter, |&(c, _)| c) {
                    Ok(pos) => {
                        let (_, n) = children.remove(pos);
                        (Some(n), Self::from_sorted(children))
                    }
                    Err(_) => (None, Children::Many(children)),
                }
            }
        };
        *self = rest;
        removed
    }

    fn from_sorted(children: Vec<(char, NodeId)>) -> Children {
        match children.len() {
            0 => Children::None,
            1 => Children::One(children[0]),
            2 => Children::Two((children[0].0, children[0].1, children[1].0, children[1].1)),
            _ => Children::Many(children),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Returns an iterator over all edges, in symbol order.
    #[inline]
    pub(crate) fn iter(&self) -> ChildIter<'_> {
        ChildIter {
            children: self,
            index: Some(0),
        }
    }
}

/// An iterator over the edges of a trie node.
#[derive(Clone)]
pub(crate) struct ChildIter<'a> {
    children: &'a Children,
    index: Option<usize>,
}

impl Iterator for ChildIter<'_> {
    type Item = (char, NodeId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index?;
        let next_child = self.children.get_index(index);
        self.index = if next_child.is_some() {
            index.checked_add(1)
        } else {
            None
        };
        next_child
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.index {
            Some(i) => self.children.len().saturating_sub(i),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

#[cfg(test)]
mod test {
    use super::*;

    fn id(i: usize) -> NodeId {
        NodeId::from_index(i)
    }

    #[test]
    fn no_children() {
        let c = Children::None;
        assert_eq!(c.iter().next(), None);
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn children_stay_sorted() {
        let mut c = Children::None;
        c.insert('m', id(1));
        c.insert('c', id(2));
        assert_eq!(c, Children::Two(('c', id(2), 'm', id(1))));
        c.insert('z', id(3));
        c.insert('a', id(4));
        let letters: Vec<char> = c.iter().map(|(ch, _)| ch).collect();
        assert_eq!(letters, ['a', 'c', 'm', 'z']);
        assert_eq!(c.iter().len(), 4);
    }

    #[test]
    fn get_finds_every_edge() {
        let mut c = Children::None;
        for (i, ch) in "qwertyuiop".chars().enumerate() {
            c.insert(ch, id(i));
        }
        for (i, ch) in "qwertyuiop".chars().enumerate() {
            assert_eq!(c.get(ch), Some(id(i)));
        }
        assert_eq!(c.get('a'), None);
    }

    #[test]
    fn remove_shrinks_representation() {
        let mut c = Children::None;
        c.insert('a', id(1));
        c.insert('b', id(2));
        c.insert('c', id(3));
        assert_eq!(c.remove('b'), Some(id(2)));
        assert_eq!(c, Children::Two(('a', id(1), 'c', id(3))));
        assert_eq!(c.remove('x'), None);
        assert_eq!(c.remove('a'), Some(id(1)));
        assert_eq!(c, Children::One(('c', id(3))));
        assert_eq!(c.remove('c'), Some(id(3)));
        assert!(c.is_empty());
        assert_eq!(c.remove('c'), None);
    }

    #[test]
    fn a_thousand_children() {
        let mut c = Children::None;
        let letters = (0..).filter_map(std::char::from_u32).take(1000);
        for (i, ch) in letters.clone().enumerate().collect::<Vec<_>>().into_iter().rev() {
            c.insert(ch, id(i));
        }
        let mut children = c.iter();
        for (i, ch) in letters.enumerate() {
            assert_eq!(children.next(), Some((ch, id(i))));
        }
        assert_eq!(children.next(), None);
        assert_eq!(c.len(), 1000);
    }
}
