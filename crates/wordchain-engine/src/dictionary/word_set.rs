// Hash-set backed word list

use std::io::BufRead;

use hashbrown::HashSet;
use wordchain_core::LoadError;

use super::Dictionary;

/// An immutable set of words.
///
/// Words are stored exactly as given; no case folding or trimming beyond
/// line endings is applied. The empty string is never a member.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// Build a word set from an in-memory sequence of words.
    ///
    /// Empty strings are dropped; duplicates collapse.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read a line-delimited word list.
    ///
    /// Each line is one word with its `\n` or `\r\n` terminator removed.
    /// Empty lines are skipped. Any read failure (including invalid UTF-8)
    /// aborts the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            words.insert(line);
        }
        Ok(Self { words })
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordSet {
    fn valid(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
