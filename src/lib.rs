//! # libtrie
//!
//! A prefix tree ([trie](https://en.wikipedia.org/wiki/Trie)) of words with autocomplete
//! search and removal that never breaks words sharing structure with other words.
//!
//! ## Features
//!
//! - **Autocomplete**: [`search`](Trie::search) suggests the nearest completions below a
//!   prefix, sorted, with a configurable [`FanOut`] policy
//! - **Safe removal**: [`remove`](Trie::remove) prunes dead nodes eagerly and refuses to
//!   remove a word that longer words run through
//! - **Compact**: arena-allocated nodes whose child maps don't allocate below three children,
//!   with freed slots reused
//! - **Debuggable**: a deterministic JSON [`dump`](Trie::dump) of the whole tree
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::{Trie, TrieError};
//!
//! let mut trie: Trie = ["test", "tester", "testing"].into_iter().collect();
//!
//! assert!(trie.contains("tester"));
//! assert_eq!(trie.search("test"), ["er", "ing"]);
//!
//! assert_eq!(trie.remove("test"), Err(TrieError::DependentSuffixesExist));
//! assert!(trie.remove("tester").is_ok());
//! assert_eq!(trie.search("test"), ["ing"]);
//! ```
//!
//! ## Word lists
//!
//! ```
//! use libtrie::Trie;
//!
//! let trie = Trie::from_json_weights(r#"{"aardvark": 7, "aardwolf": 2, "aaron": 5}"#).unwrap();
//! assert_eq!(trie.search("aar"), ["dvark", "dwolf", "on"]);
//! ```
//!
//! A [`Trie`] has no internal locking. Mutation takes `&mut self`, so sharing one between
//! threads that write needs an external lock such as `RwLock<Trie>`.

#![warn(missing_docs)]

/// Core trie data structure: nodes, search, removal and loading.
pub mod trie;

pub use trie::{FanOut, LoadError, NodeRef, Removal, Trie, TrieError};
