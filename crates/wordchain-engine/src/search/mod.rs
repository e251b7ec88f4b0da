// Breadth-first exploration from a source word.
//
// The search grows a `VisitedMap` outward from the source one frontier word
// at a time. When a target is given the search stops as soon as the target is
// recorded, including mid-way through the neighbors of the word that reached
// it: neighbors after the target in generator order are never recorded, so
// the map can hold fewer words at the target's depth than a full search would.

pub mod visited;

use std::collections::VecDeque;

use tracing::{debug, trace};
use wordchain_core::SearchError;

use crate::adjacency::AdjacencyGenerator;
use crate::dictionary::Dictionary;

pub use visited::VisitedMap;

/// Caller-supplied bound on how much work one search may do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of frontier words to expand. `None` is unbounded.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }

    fn allows(&self, expansions: usize) -> bool {
        self.max_expansions.is_none_or(|max| expansions < max)
    }
}

/// How a completed search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// The target was recorded in the visited map.
    Reached,
    /// The frontier emptied: every word reachable from the source was found,
    /// or the target is unreachable.
    Exhausted,
    /// The expansion budget ran out first.
    Truncated,
}

impl SearchOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchOutcome::Reached => "reached",
            SearchOutcome::Exhausted => "exhausted",
            SearchOutcome::Truncated => "truncated",
        }
    }
}

/// The product of one breadth-first search.
#[derive(Debug, Clone)]
pub struct SearchRun {
    pub visited: VisitedMap,
    pub outcome: SearchOutcome,
    /// Number of frontier words whose neighbors were generated.
    pub expansions: usize,
}

/// Run a breadth-first search from `source`.
///
/// Fails if `source`, or `target` when given, is not in the dictionary.
/// A `source` equal to `target` is reached without expanding anything.
pub fn breadth_first(
    dictionary: &dyn Dictionary,
    adjacency: &AdjacencyGenerator,
    source: &str,
    target: Option<&str>,
    limits: SearchLimits,
) -> Result<SearchRun, SearchError> {
    if !dictionary.valid(source) {
        return Err(SearchError::invalid_source(source));
    }
    if let Some(t) = target {
        if !dictionary.valid(t) {
            return Err(SearchError::invalid_target(t));
        }
    }

    let mut visited = VisitedMap::with_root(source);
    let mut frontier = VecDeque::from([source.to_string()]);
    let mut expansions = 0;

    let outcome = loop {
        if target.is_some_and(|t| visited.contains(t)) {
            break SearchOutcome::Reached;
        }
        if !limits.allows(expansions) && !frontier.is_empty() {
            break SearchOutcome::Truncated;
        }
        let Some(current) = frontier.pop_front() else {
            break SearchOutcome::Exhausted;
        };
        expansions += 1;

        let candidates = adjacency.neighbors(&current, dictionary);
        trace!(word = %current, candidates = candidates.len(), "expanding");

        for candidate in candidates {
            if visited.contains(&candidate) {
                continue;
            }
            visited.insert(candidate.clone(), &current);
            if target == Some(candidate.as_str()) {
                break;
            }
            frontier.push_back(candidate);
        }
    };

    debug!(
        source,
        target,
        visited = visited.len(),
        expansions,
        outcome = outcome.as_str(),
        "search finished"
    );

    Ok(SearchRun {
        visited,
        outcome,
        expansions,
    })
}
