// Adjacency generation: all dictionary words one edit away from a word.
//
// Architecture:
//   - `generators`: the three edit classes (EditGenerator trait)
//   - `AdjacencyGenerator`: runs them in a fixed order and concatenates results
//
// The order is part of the contract. Breadth-first search records the first
// predecessor that reaches a word, so a stable neighbor order makes the chosen
// shortest path reproducible.

pub mod generators;

pub use generators::{Deletion, EditGenerator, Insertion, Substitution};

use crate::dictionary::Dictionary;

/// Composes edit generators into one neighbor enumeration.
pub struct AdjacencyGenerator {
    generators: Vec<Box<dyn EditGenerator>>,
}

impl AdjacencyGenerator {
    /// Substitution, then deletion, then insertion, each over `a`..`z`.
    pub fn standard() -> Self {
        Self::from_generators(vec![
            Box::new(Substitution::default()),
            Box::new(Deletion),
            Box::new(Insertion::default()),
        ])
    }

    /// Build a generator from an explicit, ordered list of edit generators.
    pub fn from_generators(generators: Vec<Box<dyn EditGenerator>>) -> Self {
        Self { generators }
    }

    /// Every dictionary word one edit away from `word`.
    ///
    /// Results follow generator order and are not deduplicated: the same word
    /// may appear more than once when different edits reach it. The word
    /// itself is never returned.
    pub fn neighbors(&self, word: &str, dictionary: &dyn Dictionary) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut out = Vec::new();
        for generator in &self.generators {
            generator.generate(&chars, dictionary, &mut out);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for AdjacencyGenerator {
    fn default() -> Self {
        Self::standard()
    }
}
