use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use tracing::debug;

use super::tree::Trie;

/// Errors that can occur when loading a word list.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    /// The word list is not a JSON object of words to weights.
    #[error("failed to decode word list: {0}")]
    Json(#[from] serde_json::Error),
}

impl Trie {
    /// Builds a trie from a text reader holding one word per line.
    ///
    /// Lines starting with '#' are treated as comments and ignored. Blank lines are skipped.
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let list = "# fruit\napple\n\nbanana\n";
    /// let trie = Trie::from_reader(list.as_bytes()).unwrap();
    /// assert_eq!(trie.words(), ["apple", "banana"]);
    /// ```
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, LoadError> {
        let mut trie = Trie::new();

        // Reuse one buffer for every line instead of allocating a new string per line.
        let mut buf = String::with_capacity(80);
        loop {
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            let word = buf.trim();
            if !word.is_empty() && !is_comment(word) {
                trie.insert(word);
            }
            buf.clear();
        }
        debug!(words = trie.len(), nodes = trie.node_count(), "loaded word list");
        Ok(trie)
    }

    /// Builds a trie from a text file holding one word per line.
    ///
    /// See [`from_reader`](Trie::from_reader) for the format.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds a trie from the keys of a JSON object mapping words to weights.
    ///
    /// Weights must be integers. They are validated and then discarded.
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let trie = Trie::from_json_weights(r#"{"apple": 3, "apricot": 1}"#).unwrap();
    /// assert_eq!(trie.search("ap"), ["ple", "ricot"]);
    /// ```
    pub fn from_json_weights(json: &str) -> Result<Self, LoadError> {
        let weights: HashMap<String, i64> = serde_json::from_str(json)?;
        Ok(Self::from_weights(weights))
    }

    /// Builds a trie from a JSON file mapping words to weights.
    ///
    /// See [`from_json_weights`](Trie::from_json_weights) for the format.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        let weights: HashMap<String, i64> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::from_weights(weights))
    }

    fn from_weights(weights: HashMap<String, i64>) -> Self {
        let trie: Trie = weights.keys().collect();
        debug!(
            entries = weights.len(),
            words = trie.len(),
            nodes = trie.node_count(),
            "loaded weighted word list"
        );
        trie
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
        assert!(!is_comment(" REVERBERATE"));
    }

    #[test]
    fn reader_skips_comments_and_blank_lines() {
        let list = "# header\n\ntest\n   \ntester  \n  # indented comment\ntesting";
        let trie = Trie::from_reader(list.as_bytes()).unwrap();
        assert_eq!(trie.words(), ["test", "tester", "testing"]);
    }

    #[test]
    fn file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aardvark\naardwolf\naaron").unwrap();
        let trie = Trie::from_file(file.path()).unwrap();
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.search("aar"), ["dvark", "dwolf", "on"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let res = Trie::from_file(dir.path().join("missing.txt"));
        assert!(matches!(res, Err(LoadError::Io(_))));
    }

    #[test]
    fn json_weights_are_ignored() {
        let trie = Trie::from_json_weights(r#"{"test": 10, "tester": 1, "testing": 5, " ": 2}"#)
            .unwrap();
        assert_eq!(trie.words(), ["test", "tester", "testing"]);
        assert_eq!(trie.search("test"), ["er", "ing"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let res = Trie::from_json_weights(r#"["not", "an", "object"]"#);
        assert!(matches!(res, Err(LoadError::Json(_))));
        let res = Trie::from_json_weights(r#"{"word": "heavy"}"#);
        assert!(matches!(res, Err(LoadError::Json(_))));
    }

    #[test]
    fn json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"apple": 1, "apricot": 2, "banana": 3}}"#).unwrap();
        let trie = Trie::from_json_file(file.path()).unwrap();
        assert_eq!(trie.words(), ["apple", "apricot", "banana"]);
    }
}
