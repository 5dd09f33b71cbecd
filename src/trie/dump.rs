//! Structural dump of a trie for debugging and snapshot tests.
//!
//! Each node serializes as `{"completes_word": bool, "children": {"<symbol>": node, ...}}`
//! with children in symbol order, so equal tries always dump to equal text.

use serde::ser::{Serialize, SerializeMap, SerializeStruct, Serializer};

use super::node::NodeRef;
use super::tree::Trie;

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 2)?;
        state.serialize_field("completes_word", &self.completes_word())?;
        state.serialize_field("children", &ChildMap(*self))?;
        state.end()
    }
}

struct ChildMap<'t>(NodeRef<'t>);

impl Serialize for ChildMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.child_count()))?;
        for (symbol, child) in self.0.children() {
            map.serialize_entry(&symbol, &child)?;
        }
        map.end()
    }
}

impl Serialize for Trie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root().serialize(serializer)
    }
}

impl Trie {
    /// Returns an indented JSON dump of the whole tree.
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let trie: Trie = ["ab"].into_iter().collect();
    /// let dump = trie.dump().unwrap();
    /// assert!(dump.contains("\"completes_word\": true"));
    /// ```
    pub fn dump(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
