use std::fmt;

use smallvec::SmallVec;
use tracing::debug;

use super::node_arena::NodeId;
use super::tree::Trie;

/// Errors that can occur when removing a word from a [`Trie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The word's last node has children, so other words depend on its path.
    #[error("dependent suffixes exist preventing word deletion")]
    DependentSuffixesExist,
}

/// The outcome of a successful [`Trie::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The word was not in the trie. Nothing changed.
    NotFound,
    /// The word's own nodes were removed up to an ancestor another word still needs.
    Partial {
        /// The removed word.
        word: String,
    },
    /// Every node of the word was removed, including its first symbol under the root.
    Full {
        /// The removed word.
        word: String,
        /// The word's first symbol, which no remaining word starts with.
        first: char,
    },
}

impl Removal {
    /// Describes the outcome. Empty for [`Removal::NotFound`].
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Removal::NotFound => Ok(()),
            Removal::Partial { word } => {
                write!(f, "some suffixes of '{word}' were removed from trie")
            }
            Removal::Full { word, first } => {
                write!(f, "removed '{word}'; no other '{first}' words remain")
            }
        }
    }
}

impl Trie {
    /// Removes a word from the trie.
    ///
    /// Removing a word that is not there is not an error. A word whose last node has
    /// children cannot be removed, because longer words run through it; the trie is left
    /// unchanged and [`TrieError::DependentSuffixesExist`] is returned. The same applies to
    /// a path that only exists as a prefix of other words.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::{Removal, Trie, TrieError};
    ///
    /// let mut trie: Trie = ["test", "testing"].into_iter().collect();
    /// assert_eq!(trie.remove("test"), Err(TrieError::DependentSuffixesExist));
    ///
    /// let removal = trie.remove("testing").unwrap();
    /// assert_eq!(removal.message(), "some suffixes of 'testing' were removed from trie");
    /// assert!(trie.contains("test"));
    ///
    /// assert!(matches!(trie.remove("test"), Ok(Removal::Full { first: 't', .. })));
    /// assert_eq!(trie.remove("test"), Ok(Removal::NotFound));
    /// ```
    pub fn remove(&mut self, word: &str) -> Result<Removal, TrieError> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(Removal::NotFound);
        }

        // Phase 1: Walk the full path. path[i] is the edge taken for word's i-th symbol.
        let mut path: SmallVec<[(char, NodeId); 32]> = SmallVec::new();
        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            match self.arena.get(current).children.get(ch) {
                Some(child) => {
                    path.push((ch, child));
                    current = child;
                }
                None => {
                    debug!(word, "word not in trie, nothing removed");
                    return Ok(Removal::NotFound);
                }
            }
        }

        if !self.arena.get(current).children.is_empty() {
            debug!(word, "dependent suffixes exist, word not removed");
            return Err(TrieError::DependentSuffixesExist);
        }
        debug_assert!(self.arena.get(current).word, "dead leaf in trie");

        // Phase 2: Climb while the parent would be left as a dead leaf. path[cut] ends up
        // as the highest node to detach.
        let mut cut = path.len() - 1;
        while cut > 0 {
            let parent = self.arena.get(path[cut - 1].1);
            if parent.word || parent.children.len() > 1 {
                break;
            }
            cut -= 1;
        }
        debug_assert!(
            path[cut..path.len() - 1].iter().all(|&(_, id)| {
                let node = self.arena.get(id);
                !node.word && node.children.len() == 1
            }),
            "detached chain holds a live node"
        );

        // Phase 3: Detach the chain with one edge removal and free its slots.
        let parent = match cut {
            0 => NodeId::ROOT,
            _ => path[cut - 1].1,
        };
        let (symbol, head) = path[cut];
        self.arena.get_mut(parent).children.remove(symbol);
        self.arena.release_subtree(head);
        self.len -= 1;
        debug_assert!(!self.arena.get(parent).is_dead() || parent == NodeId::ROOT);

        let removal = if cut == 0 {
            Removal::Full {
                word: word.to_owned(),
                first: symbol,
            }
        } else {
            Removal::Partial {
                word: word.to_owned(),
            }
        };
        debug!(word, detached = path.len() - cut, "{removal}");
        Ok(removal)
    }
}
