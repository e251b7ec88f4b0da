// Predecessor map: the breadth-first tree encoded as word -> parent word.

use hashbrown::HashMap;

/// Maps every reached word to the word it was first reached from.
///
/// The source maps to `None`. Entries are write-once, so the map is always a
/// tree rooted at the source. Iteration follows insertion order, which for a
/// breadth-first search is discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedMap {
    parents: HashMap<String, Option<String>>,
    order: Vec<String>,
}

impl VisitedMap {
    /// A map holding only `source`, with no predecessor.
    pub fn with_root(source: &str) -> Self {
        let mut parents = HashMap::new();
        parents.insert(source.to_string(), None);
        Self {
            parents,
            order: vec![source.to_string()],
        }
    }

    /// Record `word` as reached from `parent`.
    ///
    /// Returns `false` and leaves the map unchanged if `word` is already
    /// present. `parent` must already be a key.
    pub fn insert(&mut self, word: String, parent: &str) -> bool {
        debug_assert!(self.parents.contains_key(parent), "parent {parent:?} not visited");
        if self.parents.contains_key(&word) {
            return false;
        }
        self.parents.insert(word.clone(), Some(parent.to_string()));
        self.order.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.parents.contains_key(word)
    }

    /// The predecessor of `word`.
    ///
    /// `None` if `word` was never reached; `Some(None)` for the source.
    pub fn parent(&self, word: &str) -> Option<Option<&str>> {
        self.parents.get(word).map(Option::as_deref)
    }

    /// The root of the tree, if any word has been recorded.
    pub fn source(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reached words in discovery order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(word, predecessor)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.order.iter().map(|w| {
            let parent = self.parents.get(w).and_then(Option::as_deref);
            (w.as_str(), parent)
        })
    }
}
