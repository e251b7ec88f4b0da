// Dictionary module: membership oracle and the bundled word list

pub mod loader;
pub mod word_set;

use std::rc::Rc;
use std::sync::Arc;

pub use loader::DictionaryConfig;
pub use word_set::WordSet;

/// Trait for dictionaries.
///
/// A dictionary answers one question: is this exact string a known word?
/// Implementations are read-only; a search never mutates its dictionary, so
/// one dictionary can back any number of sessions.
pub trait Dictionary {
    /// Returns `true` iff `word` is a member of the dictionary.
    fn valid(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn valid(&self, word: &str) -> bool {
        (**self).valid(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn valid(&self, word: &str) -> bool {
        (**self).valid(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Rc<D> {
    fn valid(&self, word: &str) -> bool {
        (**self).valid(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Arc<D> {
    fn valid(&self, word: &str) -> bool {
        (**self).valid(word)
    }
}
