// Letters used when generating neighbors of a word.

/// The lowercase ASCII letters, in the order substitution and insertion try them.
pub const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Returns `true` if `word` is a non-empty run of lowercase ASCII letters.
///
/// Dictionary membership never depends on this check; the CLI uses it to warn
/// about input words that cannot appear in a lowercase word list.
pub fn is_plain_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
