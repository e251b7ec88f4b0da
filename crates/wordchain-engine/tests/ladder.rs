//! End-to-end searches over the bundled word list.
//!
//! Shortest-path claims are checked against an independent graph built by
//! comparing every pair of words, so the engine's neighbor generation is not
//! trusted to verify itself.

use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use wordchain_core::classify_edit;
use wordchain_engine::{
    Dictionary, DictionaryConfig, SearchError, SearchOutcome, SearchState, WordChainer, WordSet,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn wordlist_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/words.txt")
}

fn load_words() -> Vec<String> {
    std::fs::read_to_string(wordlist_path())
        .unwrap_or_else(|e| panic!("failed to read word list: {e}"))
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

fn chainer() -> WordChainer {
    WordChainer::from_config(&DictionaryConfig::new(wordlist_path()))
        .unwrap_or_else(|e| panic!("failed to load word list: {e}"))
}

/// Distances from `source` over the brute-force edit graph.
fn reference_distances(words: &[String], source: &str) -> HashMap<String, usize> {
    let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();
    for a in words {
        for b in words {
            if classify_edit(a, b).is_some() {
                edges.entry(a.as_str()).or_default().push(b.as_str());
            }
        }
    }

    let mut dist = HashMap::new();
    dist.insert(source.to_string(), 0);
    let mut queue = VecDeque::from([source]);
    while let Some(word) = queue.pop_front() {
        let d = dist[word];
        for &next in edges.get(word).map(Vec::as_slice).unwrap_or_default() {
            if !dist.contains_key(next) {
                dist.insert(next.to_string(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

fn assert_is_ladder(path: &[String], words: &WordSet) {
    for pair in path.windows(2) {
        assert!(
            classify_edit(&pair[0], &pair[1]).is_some(),
            "{} -> {} is not a single edit",
            pair[0],
            pair[1]
        );
    }
    for word in path {
        assert!(words.valid(word), "{word} is not a dictionary word");
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn five_word_ladder_is_deterministic() {
    let words = WordSet::from_words(["cat", "cot", "cog", "dog", "dot"]);
    let mut c = WordChainer::new(words);
    c.build_tree("cat", Some("dog")).unwrap();
    assert_eq!(c.find_path(None).unwrap().unwrap(), ["cat", "cot", "dot", "dog"]);
}

#[test]
fn unrelated_words_are_not_found() {
    let words = WordSet::from_words(["cat", "xyz"]);
    let mut c = WordChainer::new(words);
    assert_eq!(c.build_tree("cat", None), Ok(SearchOutcome::Exhausted));
    let visited: Vec<&str> = c.visited().unwrap().words().collect();
    assert_eq!(visited, ["cat"]);
    assert_eq!(c.find_path(Some("xyz")), Ok(None));
}

#[test]
fn known_ladders_over_word_list() {
    let mut c = chainer();
    let cases: &[(&str, &str, &[&str])] = &[
        ("cat", "dog", &["cat", "cot", "dot", "dog"]),
        ("hard", "love", &["hard", "hand", "land", "lane", "lone", "love"]),
        ("a", "dogs", &["a", "an", "can", "con", "cog", "dog", "dogs"]),
        ("cat", "gold", &["cat", "bat", "boat", "bolt", "bold", "gold"]),
    ];
    for (source, target, expected) in cases {
        assert_eq!(c.build_tree(source, Some(*target)), Ok(SearchOutcome::Reached));
        let path = c.find_path(None).unwrap().unwrap();
        assert_eq!(&path, expected, "{source} -> {target}");
    }
}

#[test]
fn isolated_target_exhausts_the_component() {
    let mut c = chainer();
    assert_eq!(c.build_tree("cat", Some("zebra")), Ok(SearchOutcome::Exhausted));
    assert_eq!(c.find_path(None), Ok(None));
    // Everything but the zebra/quartz islands is reachable from "cat".
    assert_eq!(c.visited().unwrap().len(), load_words().len() - 3);
}

#[test]
fn unknown_words_are_rejected() {
    let mut c = chainer();
    assert!(matches!(
        c.build_tree("xylophone", None),
        Err(SearchError::InvalidWord { .. })
    ));
    assert!(matches!(
        c.build_tree("cat", Some("xylophone")),
        Err(SearchError::InvalidWord { .. })
    ));
    assert_eq!(c.state(), SearchState::Idle);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn every_word_list_entry_is_valid() {
    let c = chainer();
    for word in load_words() {
        assert!(c.dictionary().valid(&word), "{word} should be valid");
    }
    assert!(!c.dictionary().valid("catz"));
}

#[test]
fn full_tree_matches_reference_distances() {
    let words = load_words();
    let mut c = chainer();
    for source in ["cat", "a", "gold", "zebra"] {
        c.build_tree(source, None).unwrap();
        let expected = reference_distances(&words, source);
        let tree = c.tree();
        assert_eq!(tree.len(), expected.len(), "reachable set from {source}");
        for (word, depth) in &tree {
            assert_eq!(Some(depth), expected.get(word), "{source} -> {word}");
        }
    }
}

#[test]
fn tree_lists_each_word_once_with_nondecreasing_depth() {
    let mut c = chainer();
    c.build_tree("cat", None).unwrap();
    let tree = c.tree();
    let mut seen = std::collections::HashSet::new();
    for (word, _) in &tree {
        assert!(seen.insert(word.clone()), "{word} listed twice");
    }
    assert!(tree.windows(2).all(|w| w[0].1 <= w[1].1));
    assert_eq!(tree[0], ("cat".to_string(), 0));
}

#[test]
fn early_exit_paths_are_shortest() {
    let words = load_words();
    let expected = reference_distances(&words, "cat");
    let mut c = chainer();
    for (target, distance) in &expected {
        c.build_tree("cat", Some(target.as_str())).unwrap();
        let path = c.find_path(None).unwrap().unwrap();
        assert_eq!(path.len() - 1, *distance, "cat -> {target}");
        assert_eq!(path.first().map(String::as_str), Some("cat"));
        assert_eq!(path.last(), Some(target));
        assert_is_ladder(&path, c.dictionary());
    }
}

#[test]
fn repeated_searches_build_identical_maps() {
    let mut a = chainer();
    let mut b = chainer();
    a.build_tree("boot", Some("dime")).unwrap();
    b.build_tree("boot", Some("dime")).unwrap();
    assert_eq!(a.visited(), b.visited());

    a.build_tree("boot", None).unwrap();
    b.build_tree("boot", None).unwrap();
    assert_eq!(a.tree(), b.tree());
}

#[test]
fn early_exit_map_is_a_subset_of_the_full_tree() {
    let mut c = chainer();
    c.build_tree("cat", None).unwrap();
    let full = c.visited().unwrap().clone();

    c.build_tree("cat", Some("dog")).unwrap();
    let partial = c.visited().unwrap();
    assert!(partial.len() < full.len());
    for (word, parent) in partial.iter() {
        assert_eq!(full.parent(word), Some(parent), "{word}");
    }
}
