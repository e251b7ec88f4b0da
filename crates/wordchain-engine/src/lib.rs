//! Word-ladder search engine.
//!
//! Finds shortest chains of dictionary words where each step is a single
//! substitution, deletion, or insertion.
//!
//! # Architecture
//!
//! - [`dictionary`] -- the membership oracle ([`Dictionary`]) and the bundled
//!   hash-set word list ([`WordSet`]) with its line-delimited loader
//! - [`adjacency`] -- one-edit neighbor generation in a fixed, reproducible order
//! - [`search`] -- breadth-first exploration producing a predecessor map
//! - [`report`] -- path reconstruction and depth listing from that map
//! - [`chainer`] -- [`WordChainer`], the handle that owns a dictionary and the
//!   current search session
//!
//! ```
//! use wordchain_engine::{WordChainer, WordSet};
//!
//! let words = WordSet::from_words(["cat", "cot", "cog", "dog", "dot"]);
//! let mut chainer = WordChainer::new(words);
//! chainer.build_tree("cat", Some("dog")).unwrap();
//! let path = chainer.find_path(None).unwrap().unwrap();
//! assert_eq!(path, ["cat", "cot", "dot", "dog"]);
//! ```

pub mod adjacency;
pub mod chainer;
pub mod dictionary;
pub mod report;
pub mod search;

pub use adjacency::AdjacencyGenerator;
pub use chainer::{SearchState, WordChainer};
pub use dictionary::{Dictionary, DictionaryConfig, WordSet};
pub use search::{SearchLimits, SearchOutcome, VisitedMap};
pub use wordchain_core::{LoadError, SearchError};
