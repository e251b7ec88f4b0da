// Output rendering: plain text for terminals, JSON for scripts.
//
// Text formats:
//   path      one word per line, or "no path from SOURCE to TARGET"
//   tree      "WORD<TAB>DISTANCE" per line, in discovery order

use std::io::{self, Write};

use serde::Serialize;
use wordchain_core::classify_edit;
use wordchain_engine::SearchOutcome;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

// ============================================================================
// Serde-serializable DTO types
// ============================================================================

/// One step of a ladder and the edit it makes.
#[derive(Debug, Serialize)]
struct JsonStep<'a> {
    from: &'a str,
    to: &'a str,
    edit: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct JsonPath<'a> {
    source: &'a str,
    target: &'a str,
    outcome: &'static str,
    path: Option<&'a [String]>,
    steps: Vec<JsonStep<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonTreeEntry<'a> {
    word: &'a str,
    distance: usize,
}

#[derive(Debug, Serialize)]
struct JsonTree<'a> {
    source: &'a str,
    outcome: &'static str,
    words: Vec<JsonTreeEntry<'a>>,
}

// ============================================================================
// Writers
// ============================================================================

/// Write the result of a targeted search.
pub fn write_path<W: Write>(
    out: &mut W,
    format: Format,
    source: &str,
    target: &str,
    outcome: SearchOutcome,
    path: Option<&[String]>,
) -> io::Result<()> {
    match format {
        Format::Text => match path {
            Some(words) => {
                for word in words {
                    writeln!(out, "{word}")?;
                }
                Ok(())
            }
            None if outcome == SearchOutcome::Truncated => writeln!(
                out,
                "no path from {source} to {target} within the expansion limit"
            ),
            None => writeln!(out, "no path from {source} to {target}"),
        },
        Format::Json => {
            let steps = path
                .map(|words| {
                    words
                        .windows(2)
                        .map(|pair| JsonStep {
                            from: &pair[0],
                            to: &pair[1],
                            edit: classify_edit(&pair[0], &pair[1]).map(|e| e.as_str()),
                        })
                        .collect()
                })
                .unwrap_or_default();
            let doc = JsonPath {
                source,
                target,
                outcome: outcome.as_str(),
                path,
                steps,
            };
            serde_json::to_writer(&mut *out, &doc)?;
            writeln!(out)
        }
    }
}

/// Write every reached word with its distance from `source`.
pub fn write_tree<W: Write>(
    out: &mut W,
    format: Format,
    source: &str,
    outcome: SearchOutcome,
    tree: &[(String, usize)],
) -> io::Result<()> {
    match format {
        Format::Text => {
            for (word, distance) in tree {
                writeln!(out, "{word}\t{distance}")?;
            }
            Ok(())
        }
        Format::Json => {
            let doc = JsonTree {
                source,
                outcome: outcome.as_str(),
                words: tree
                    .iter()
                    .map(|(word, distance)| JsonTreeEntry {
                        word,
                        distance: *distance,
                    })
                    .collect(),
            };
            serde_json::to_writer(&mut *out, &doc)?;
            writeln!(out)
        }
    }
}
