//! Shared types for the wordchain word-ladder solver.
//!
//! - [`alphabet`] -- the letters tried by substitution and insertion
//! - [`edit`] -- classification of single-edit relations between two words
//! - [`error`] -- error taxonomy shared by the engine and the CLI

pub mod alphabet;
pub mod edit;
pub mod error;

pub use edit::{EditKind, classify_edit};
pub use error::{LoadError, SearchError, WordRole};
