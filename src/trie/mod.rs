/// Compact, sorted child edges of a node.
mod children;
/// Structural JSON dump of a trie.
pub mod dump;
/// Read-only node handles.
pub mod node;
/// Index-addressed node storage with slot reuse.
pub(crate) mod node_arena;
/// Word removal with dependent-suffix protection.
pub mod remove;
/// Autocomplete search and its fan-out policy.
pub mod search;
/// The trie itself: insertion and lookup.
pub mod tree;
/// Loading word lists from text and JSON.
pub mod wordlist;

pub use node::NodeRef;
pub use remove::{Removal, TrieError};
pub use search::FanOut;
pub use tree::Trie;
pub use wordlist::LoadError;
