// Path and tree reconstruction from a visited map

use crate::search::VisitedMap;

/// The chain of words from the source to `target`.
///
/// Returns `None` if `target` was not reached. The first element is the
/// source, the last is `target`.
pub fn find_path(visited: &VisitedMap, target: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    let mut current = target;
    loop {
        let parent = visited.parent(current)?;
        path.push(current.to_string());
        match parent {
            Some(p) => current = p,
            None => break,
        }
    }
    path.reverse();
    Some(path)
}

/// Every reached word with its distance (in edges) from the source.
///
/// Entries follow discovery order, so distances are non-decreasing.
pub fn tree(visited: &VisitedMap) -> Vec<(String, usize)> {
    visited
        .words()
        .filter_map(|word| {
            let path = find_path(visited, word)?;
            Some((word.to_string(), path.len() - 1))
        })
        .collect()
}
