// Word list loading from an explicitly configured file

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;
use wordchain_core::LoadError;

use super::WordSet;

/// Names the word list a dictionary is loaded from.
///
/// There is no implicit default; callers decide which file to use (the CLI
/// resolves one from its flags, environment, and well-known locations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Path to a line-delimited word list.
    pub path: PathBuf,
}

impl DictionaryConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSet {
    /// Load the word list named by `config`.
    ///
    /// Open failures and read failures are both reported with the path.
    pub fn load(config: &DictionaryConfig) -> Result<Self, LoadError> {
        let path = config.path();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let words = WordSet::from_reader(BufReader::new(file)).map_err(|e| match e {
            LoadError::Read(source) => LoadError::ReadFile {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        debug!(path = %path.display(), words = words.len(), "loaded word list");
        Ok(words)
    }
}
