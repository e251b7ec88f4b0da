// WordChainer: top-level handle for word-ladder queries.
//
// Owns a dictionary, the adjacency generator, and the most recent search
// session. `build_tree` replaces the session; `find_path` and `tree` read it.
//
// Design notes:
// - The dictionary is a type parameter so one loaded word list can be shared
//   by several chainers through `&WordSet` or `Arc<WordSet>`; each chainer
//   keeps its own session and nothing mutable is shared.
// - A failed `build_tree` (unknown source or target) leaves the previous
//   session in place.

use tracing::instrument;
use wordchain_core::{LoadError, SearchError};

use crate::adjacency::AdjacencyGenerator;
use crate::dictionary::{Dictionary, DictionaryConfig, WordSet};
use crate::report;
use crate::search::{self, SearchLimits, SearchOutcome, VisitedMap};

/// Observable state of a chainer's search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No search has been built yet.
    Idle,
    /// The last `build_tree` finished with this outcome.
    Done(SearchOutcome),
}

/// The state left behind by one `build_tree` call.
#[derive(Debug, Clone)]
struct Session {
    target: Option<String>,
    visited: VisitedMap,
    outcome: SearchOutcome,
    expansions: usize,
}

/// Word-ladder solver bound to one dictionary.
pub struct WordChainer<D = WordSet> {
    dictionary: D,
    adjacency: AdjacencyGenerator,
    limits: SearchLimits,
    session: Option<Session>,
}

impl WordChainer<WordSet> {
    /// Load the word list named by `config` and wrap it in a chainer.
    pub fn from_config(config: &DictionaryConfig) -> Result<Self, LoadError> {
        WordSet::load(config).map(Self::new)
    }
}

impl<D: Dictionary> WordChainer<D> {
    /// Create a chainer with the standard adjacency order and no search budget.
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            adjacency: AdjacencyGenerator::standard(),
            limits: SearchLimits::unlimited(),
            session: None,
        }
    }

    /// Replace the adjacency generator (builder style).
    pub fn with_adjacency(mut self, adjacency: AdjacencyGenerator) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Set the expansion budget applied to every later search (builder style).
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Whether `word` is in the dictionary.
    pub fn valid(&self, word: &str) -> bool {
        self.dictionary.valid(word)
    }

    /// Dictionary words one edit away from `word`, in search order.
    pub fn adjacent_words(&self, word: &str) -> Vec<String> {
        self.adjacency.neighbors(word, &self.dictionary)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Build a shortest-path tree rooted at `source`.
    ///
    /// With a target the search stops once the target is reached; without one
    /// it covers every word reachable from `source`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidWord`] if `source` or `target` is not in the
    /// dictionary. The previous session is kept in that case.
    #[instrument(level = "debug", skip(self))]
    pub fn build_tree(
        &mut self,
        source: &str,
        target: Option<&str>,
    ) -> Result<SearchOutcome, SearchError> {
        let run = search::breadth_first(
            &self.dictionary,
            &self.adjacency,
            source,
            target,
            self.limits,
        )?;

        let outcome = run.outcome;
        self.session = Some(Session {
            target: target.map(str::to_string),
            visited: run.visited,
            outcome,
            expansions: run.expansions,
        });
        Ok(outcome)
    }

    pub fn state(&self) -> SearchState {
        match &self.session {
            None => SearchState::Idle,
            Some(session) => SearchState::Done(session.outcome),
        }
    }

    /// The source of the last search.
    pub fn source(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.visited.source())
    }

    /// The target of the last search, if it had one.
    pub fn target(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.target.as_deref())
    }

    /// The predecessor map of the last search.
    pub fn visited(&self) -> Option<&VisitedMap> {
        self.session.as_ref().map(|s| &s.visited)
    }

    /// Number of words expanded by the last search.
    pub fn expansions(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.expansions)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Path from the last search's source to `target`.
    ///
    /// `target` defaults to the target given to `build_tree`. Returns
    /// `Ok(None)` if the word was not reached (or no search has run).
    ///
    /// # Errors
    ///
    /// [`SearchError::MissingTarget`] if no target is given here and the
    /// last search had none.
    pub fn find_path(&self, target: Option<&str>) -> Result<Option<Vec<String>>, SearchError> {
        let target = target.or_else(|| self.target()).ok_or(SearchError::MissingTarget)?;
        Ok(self
            .visited()
            .and_then(|visited| report::find_path(visited, target)))
    }

    /// Every word reached by the last search with its distance from the
    /// source, in discovery order. Empty before the first search.
    pub fn tree(&self) -> Vec<(String, usize)> {
        self.visited().map(report::tree).unwrap_or_default()
    }
}
