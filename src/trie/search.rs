use smallvec::SmallVec;

use super::node_arena::NodeId;
use super::tree::Trie;

/// Which children of the node a search prefix ends on are scanned for suggestions.
///
/// The two policies only differ when that node has a child labeled outside `'a'..='z'`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FanOut {
    /// Scan only children labeled `'a'..='z'`, in alphabetical order. Branches under any
    /// other label are skipped.
    #[default]
    LowercaseLatin,
    /// Scan every child, in symbol order.
    AllChildren,
}

impl FanOut {
    #[inline]
    fn admits(self, symbol: char) -> bool {
        match self {
            FanOut::LowercaseLatin => symbol.is_ascii_lowercase(),
            FanOut::AllChildren => true,
        }
    }
}

impl Trie {
    /// Suggests completions for `prefix`.
    ///
    /// The prefix is followed as far as it matches; a prefix that matches nothing gives no
    /// suggestions. From the node reached, every branch admitted by the [`FanOut`] policy is
    /// searched for the nearest words below its first symbol. Each path stops at the first
    /// word found on it, and that word is reported without the matched prefix. The result is
    /// sorted.
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let trie: Trie = ["test", "tester", "testing"].into_iter().collect();
    /// assert_eq!(trie.search("t"), ["est"]);
    /// assert_eq!(trie.search("test"), ["er", "ing"]);
    /// assert!(trie.search("x").is_empty());
    /// ```
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim();

        let mut current = NodeId::ROOT;
        let mut matched = 0;
        for ch in prefix.chars() {
            match self.arena.get(current).children.get(ch) {
                Some(child) => {
                    current = child;
                    matched += 1;
                }
                None => break,
            }
        }
        if matched == 0 && !prefix.is_empty() {
            return Vec::new();
        }

        let mut suggestions: Vec<String> = Vec::new();
        let mut stack: Vec<(NodeId, SmallVec<[char; 16]>)> = Vec::new();
        for (head, branch) in self.arena.get(current).children.iter() {
            if !self.fan_out().admits(head) {
                continue;
            }
            // The branch head is never reported on its own, only the words below it.
            for (ch, child) in self.arena.get(branch).children.iter() {
                stack.push((child, SmallVec::from_slice(&[head, ch])));
            }
            while let Some((id, suffix)) = stack.pop() {
                let node = self.arena.get(id);
                if node.word {
                    suggestions.push(suffix.iter().collect());
                    continue;
                }
                for (ch, child) in node.children.iter() {
                    let mut longer = suffix.clone();
                    longer.push(ch);
                    stack.push((child, longer));
                }
            }
        }

        suggestions.sort_unstable();
        suggestions
    }
}
