use std::fmt;

use tracing::trace;

use super::node::NodeRef;
use super::node_arena::{Node, NodeArena, NodeId};
use super::search::FanOut;

/// A prefix tree of words with autocomplete search and safe removal.
///
/// Words are trimmed of surrounding whitespace and split into `char`s, one node per
/// `char`. Blank words are ignored everywhere.
///
/// # Examples
///
/// ```
/// use libtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("test");
/// trie.insert("tester");
/// trie.insert("testing");
///
/// assert!(trie.contains("tester"));
/// assert!(trie.exists("tes"));
/// assert_eq!(trie.search("test"), ["er", "ing"]);
/// ```
pub struct Trie {
    pub(super) arena: NodeArena,
    pub(super) len: usize,
    fan_out: FanOut,
}

impl Trie {
    /// Creates an empty trie using the default [`FanOut`].
    pub fn new() -> Self {
        Self::with_fan_out(FanOut::default())
    }

    /// Creates an empty trie whose [`search`](Trie::search) scans branches according to `fan_out`.
    pub fn with_fan_out(fan_out: FanOut) -> Self {
        Trie {
            arena: NodeArena::new(),
            len: 0,
            fan_out,
        }
    }

    /// Returns the fan-out policy used by [`search`](Trie::search).
    pub fn fan_out(&self) -> FanOut {
        self.fan_out
    }

    /// Returns the number of words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns a read-only view of the root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(&self.arena, NodeId::ROOT)
    }

    /// Adds a word to the trie.
    ///
    /// Returns `true` if the word was added, `false` if it was blank or already present.
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(trie.insert("apple"));
    /// assert!(!trie.insert(" apple ")); // already present
    /// assert!(!trie.insert("   "));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            current = match self.arena.get(current).children.get(ch) {
                Some(child) => child,
                None => {
                    let child = self.arena.alloc(Node::default());
                    self.arena.get_mut(current).children.insert(ch, child);
                    child
                }
            };
        }

        let terminal = self.arena.get_mut(current);
        if terminal.word {
            return false;
        }
        terminal.word = true;
        self.len += 1;
        trace!(word, "inserted word");
        true
    }

    /// Follows `word` from the root. `word` must already be trimmed.
    pub(super) fn walk(&self, word: &str) -> Option<NodeId> {
        word.chars()
            .try_fold(NodeId::ROOT, |id, ch| self.arena.get(id).children.get(ch))
    }

    /// Returns true if `word` is a path in the trie, whether or not it is a complete word.
    ///
    /// Use [`contains`](Trie::contains) to ask for an exact word.
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let trie: Trie = ["apple"].into_iter().collect();
    /// assert!(trie.exists("apple"));
    /// assert!(trie.exists("app"));
    /// assert!(!trie.exists("apples"));
    /// assert!(!trie.exists(""));
    /// ```
    pub fn exists(&self, word: &str) -> bool {
        let word = word.trim();
        !word.is_empty() && self.walk(word).is_some()
    }

    /// Returns the node `word` leads to, or `None` if `word` is blank or not a path.
    ///
    /// The node may be a pure prefix; check [`NodeRef::completes_word`] for an exact word.
    pub fn find_completes_string(&self, word: &str) -> Option<NodeRef<'_>> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }
        self.walk(word).map(|id| NodeRef::new(&self.arena, id))
    }

    /// Returns true if `word` was inserted and has not been removed.
    pub fn contains(&self, word: &str) -> bool {
        self.find_completes_string(word)
            .is_some_and(|n| n.completes_word())
    }

    /// Returns all words in the trie, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut stack = vec![(NodeId::ROOT, String::new())];
        while let Some((id, prefix)) = stack.pop() {
            let node = self.arena.get(id);
            for (ch, child) in node.children.iter() {
                let mut word = prefix.clone();
                word.push(ch);
                stack.push((child, word));
            }
            if node.word {
                words.push(prefix);
            }
        }
        words.sort_unstable();
        words
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("node_count", &self.node_count())
            .field("fan_out", &self.fan_out)
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn insert_then_find() {
        let mut trie = Trie::new();
        trie.insert("test");
        assert!(trie.exists("test"));
        let node = trie.find_completes_string("test").unwrap();
        assert!(node.completes_word());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert("test"));
        let nodes = trie.node_count();
        assert!(!trie.insert("test"));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("test"));
    }

    #[test]
    fn blank_words_are_ignored() {
        let mut trie = Trie::new();
        trie.insert("");
        trie.insert("   ");
        trie.insert("\t\n");
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.root().child_count(), 0);
        assert!(!trie.exists(""));
        assert!(!trie.exists(" "));
        assert!(trie.is_empty());
    }

    #[test]
    fn insert_trims_whitespace() {
        let mut trie = Trie::new();
        trie.insert("  pear ");
        assert!(trie.contains("pear"));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn insert_shares_prefix_nodes() {
        let trie: Trie = ["test", "testing"].into_iter().collect();
        // root + t,e,s,t + i,n,g
        assert_eq!(trie.node_count(), 8);
        assert!(trie.exists("test"));
        assert!(trie.exists("testing"));
    }

    #[test]
    fn insert_prefix_of_existing() {
        let mut trie: Trie = ["cart"].into_iter().collect();
        assert!(!trie.contains("car"));
        assert!(trie.insert("car"));
        assert!(trie.contains("car"));
        assert!(trie.contains("cart"));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn exists_is_prefix_existence() {
        let trie: Trie = ["apple"].into_iter().collect();
        assert!(trie.exists("appl"));
        assert!(!trie.contains("appl"));
        assert!(!trie.exists("apples"));
        assert!(!trie.exists("banana"));
    }

    #[test]
    fn find_completes_string_edge_cases() {
        let trie: Trie = ["apple"].into_iter().collect();
        assert_eq!(trie.find_completes_string(""), None);
        assert_eq!(trie.find_completes_string("apples"), None);
        assert!(trie.find_completes_string("apple").is_some());
        assert!(!trie.find_completes_string("app").unwrap().completes_word());
    }

    #[test]
    fn unicode_symbols() {
        let trie: Trie = ["授人以鱼", "授人以渔", "smörgås"].into_iter().collect();
        assert!(trie.contains("授人以渔"));
        assert!(trie.exists("授人"));
        assert!(trie.contains("smörgås"));
        assert!(!trie.contains("smorgas"));
    }

    #[test]
    fn words_are_sorted() {
        let trie: Trie = ["pear", "apple", "app", "banana"].into_iter().collect();
        assert_eq!(trie.words(), ["app", "apple", "banana", "pear"]);
        assert_eq!(trie.len(), 4);
        assert!(Trie::new().words().is_empty());
    }

    #[test]
    fn trie_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Trie>();
    }
}
