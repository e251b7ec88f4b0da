// Single-edit classification between two words.

use std::fmt;

/// The kind of single-character edit that turns one word into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// One character replaced by a different one.
    Substitution,
    /// One character removed.
    Deletion,
    /// One character added.
    Insertion,
}

impl EditKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EditKind::Substitution => "substitution",
            EditKind::Deletion => "deletion",
            EditKind::Insertion => "insertion",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine which single edit turns `from` into `to`.
///
/// Returns `None` when the words are equal or differ by more than one
/// substitution, deletion, or insertion. Comparison is per `char`.
pub fn classify_edit(from: &str, to: &str) -> Option<EditKind> {
    let a: Vec<char> = from.chars().collect();
    let b: Vec<char> = to.chars().collect();

    if a.len() == b.len() {
        let diffs = a.iter().zip(&b).filter(|(x, y)| x != y).count();
        return (diffs == 1).then_some(EditKind::Substitution);
    }
    if a.len() == b.len() + 1 {
        return is_single_removal(&a, &b).then_some(EditKind::Deletion);
    }
    if b.len() == a.len() + 1 {
        return is_single_removal(&b, &a).then_some(EditKind::Insertion);
    }
    None
}

/// `true` if removing exactly one character from `longer` yields `shorter`.
fn is_single_removal(longer: &[char], shorter: &[char]) -> bool {
    let prefix = longer
        .iter()
        .zip(shorter)
        .take_while(|(x, y)| x == y)
        .count();
    longer[prefix + 1..] == shorter[prefix..]
}
