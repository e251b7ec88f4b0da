// Individual edit generators: each applies one class of single-character
// edit to produce candidate words, then keeps the ones the dictionary accepts.

use wordchain_core::alphabet::LOWERCASE;

use crate::dictionary::Dictionary;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual edit generators.
///
/// A generator appends every dictionary-valid candidate it produces for
/// `word` to `out`, in its own fixed order. Candidates are not deduplicated.
pub trait EditGenerator: Send + Sync {
    fn generate(&self, word: &[char], dictionary: &dyn Dictionary, out: &mut Vec<String>);
}

// ---------------------------------------------------------------------------
// Shared helper
// ---------------------------------------------------------------------------

/// Check a candidate buffer against the dictionary and keep it if valid.
///
/// `scratch` is reused across calls so that only accepted candidates
/// allocate.
fn emit_if_valid(
    dictionary: &dyn Dictionary,
    candidate: &[char],
    scratch: &mut String,
    out: &mut Vec<String>,
) {
    scratch.clear();
    scratch.extend(candidate);
    if dictionary.valid(scratch) {
        out.push(scratch.clone());
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace one character with another letter.
///
/// Positions are visited left to right and, at each position, letters in
/// alphabet order. The letter already at a position is skipped.
#[derive(Debug, Clone)]
pub struct Substitution {
    /// Letters to substitute in, in trial order.
    pub alphabet: Vec<char>,
}

impl Default for Substitution {
    fn default() -> Self {
        Self {
            alphabet: LOWERCASE.to_vec(),
        }
    }
}

impl EditGenerator for Substitution {
    fn generate(&self, word: &[char], dictionary: &dyn Dictionary, out: &mut Vec<String>) {
        let mut buffer = word.to_vec();
        let mut scratch = String::with_capacity(word.len() * 4);

        for i in 0..word.len() {
            for &letter in &self.alphabet {
                if letter == word[i] {
                    continue;
                }
                buffer[i] = letter;
                emit_if_valid(dictionary, &buffer, &mut scratch, out);
            }
            buffer[i] = word[i];
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove one character, at each position from left to right.
///
/// A one-letter word yields the empty string, which no dictionary accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deletion;

impl EditGenerator for Deletion {
    fn generate(&self, word: &[char], dictionary: &dyn Dictionary, out: &mut Vec<String>) {
        let mut buffer = Vec::with_capacity(word.len());
        let mut scratch = String::with_capacity(word.len() * 4);

        for i in 0..word.len() {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            emit_if_valid(dictionary, &buffer, &mut scratch, out);
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert one letter at every position, including both ends.
///
/// Positions `0..=len` are visited left to right and, at each position,
/// letters in alphabet order.
#[derive(Debug, Clone)]
pub struct Insertion {
    /// Letters to insert, in trial order.
    pub alphabet: Vec<char>,
}

impl Default for Insertion {
    fn default() -> Self {
        Self {
            alphabet: LOWERCASE.to_vec(),
        }
    }
}

impl EditGenerator for Insertion {
    fn generate(&self, word: &[char], dictionary: &dyn Dictionary, out: &mut Vec<String>) {
        let mut buffer = Vec::with_capacity(word.len() + 1);
        let mut scratch = String::with_capacity((word.len() + 1) * 4);

        for i in 0..=word.len() {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.push('\0');
            buffer.extend_from_slice(&word[i..]);
            for &letter in &self.alphabet {
                buffer[i] = letter;
                emit_if_valid(dictionary, &buffer, &mut scratch, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn run(generator: &dyn EditGenerator, word: &str, words: &[&str]) -> Vec<String> {
        let dict = WordSet::from_words(words.iter().copied());
        let mut out = Vec::new();
        generator.generate(&chars(word), &dict, &mut out);
        out
    }

    #[test]
    fn substitution_orders_by_position_then_letter() {
        let out = run(
            &Substitution::default(),
            "cot",
            &["cat", "cog", "dot", "bot", "cut", "cox"],
        );
        assert_eq!(out, ["bot", "dot", "cat", "cut", "cog", "cox"]);
    }

    #[test]
    fn substitution_never_returns_the_word_itself() {
        let out = run(&Substitution::default(), "cat", &["cat", "bat"]);
        assert_eq!(out, ["bat"]);
    }

    #[test]
    fn substitution_restores_each_position() {
        // Two changes at once must never appear.
        let out = run(&Substitution::default(), "ab", &["bb", "aa", "ba"]);
        assert_eq!(out, ["bb", "aa"]);
    }

    #[test]
    fn substitution_uses_configured_alphabet() {
        let generator = Substitution {
            alphabet: vec!['z', 'b'],
        };
        let out = run(&generator, "a", &["b", "c", "z"]);
        assert_eq!(out, ["z", "b"]);
    }

    #[test]
    fn deletion_orders_left_to_right() {
        let out = run(&Deletion, "cart", &["art", "cat", "car", "crt"]);
        assert_eq!(out, ["art", "crt", "cat", "car"]);
    }

    #[test]
    fn deletion_keeps_duplicates_from_repeated_letters() {
        let out = run(&Deletion, "boot", &["bot"]);
        assert_eq!(out, ["bot", "bot"]);
    }

    #[test]
    fn deletion_of_single_letter_finds_nothing() {
        let out = run(&Deletion, "a", &["a", "b"]);
        assert!(out.is_empty());
    }

    #[test]
    fn insertion_covers_both_ends() {
        let out = run(&Insertion::default(), "at", &["bat", "ate", "art", "cat", "act"]);
        assert_eq!(out, ["bat", "cat", "act", "art", "ate"]);
    }

    #[test]
    fn insertion_into_single_letter() {
        let out = run(&Insertion::default(), "a", &["ab", "ba", "za", "az"]);
        assert_eq!(out, ["ba", "za", "ab", "az"]);
    }

    #[test]
    fn generators_ignore_non_members() {
        let dict: &[&str] = &[];
        assert!(run(&Substitution::default(), "cat", dict).is_empty());
        assert!(run(&Deletion, "cat", dict).is_empty());
        assert!(run(&Insertion::default(), "cat", dict).is_empty());
    }
}
