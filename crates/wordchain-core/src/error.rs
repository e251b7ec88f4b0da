// Error taxonomy: dictionary loading and search failures.
//
// An unreachable target is not an error; the engine reports it as `None`.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for word list loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The word list file could not be opened.
    #[error("cannot open word list {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list file was opened but reading it failed.
    #[error("cannot read word list {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an in-memory or streamed source failed.
    #[error("cannot read word list: {0}")]
    Read(#[from] io::Error),
}

/// Which side of a search a word was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordRole {
    Source,
    Target,
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordRole::Source => f.write_str("source"),
            WordRole::Target => f.write_str("target"),
        }
    }
}

/// Error type for building and querying a search tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The source or target word is not in the dictionary.
    #[error("{role} word {word:?} is not in the dictionary")]
    InvalidWord { role: WordRole, word: String },

    /// A path was requested without a target, and the last search had none.
    #[error("no target word given and none was set by the last search")]
    MissingTarget,
}

impl SearchError {
    pub fn invalid_source(word: &str) -> Self {
        SearchError::InvalidWord {
            role: WordRole::Source,
            word: word.to_string(),
        }
    }

    pub fn invalid_target(word: &str) -> Self {
        SearchError::InvalidWord {
            role: WordRole::Target,
            word: word.to_string(),
        }
    }
}
