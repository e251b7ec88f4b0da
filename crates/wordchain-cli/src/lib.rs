// wordchain-cli: dictionary discovery, argument handling, and the command
// dispatch shared by the `wordchain` binary and its tests.

pub mod render;
pub mod repl;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};
use wordchain_core::alphabet::is_plain_word;
use wordchain_core::{LoadError, SearchError};
use wordchain_engine::{DictionaryConfig, SearchLimits, WordChainer};

use crate::render::Format;

/// Word list looked up in the current directory.
const LOCAL_WORDLIST: &str = "dictionary.txt";

/// Word list shipped by most Unix systems.
const SYSTEM_WORDLIST: &str = "/usr/share/dict/words";

/// Error type for the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No word list was given and none of the fallback locations exist.
    #[error("could not find a word list in any of the search paths:\n{}", list_paths(.searched))]
    NoDictionary { searched: Vec<PathBuf> },

    /// A SOURCE was given without a TARGET outside `--tree` mode.
    #[error("no target word given for \"{word}\" (pass TARGET or --tree)")]
    MissingTarget { word: String },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Find the shortest word ladder between two words.
///
/// Each step changes one letter, removes one letter, or adds one letter, and
/// every word on the way must be in the word list.
#[derive(Debug, Parser)]
#[command(name = "wordchain", version)]
pub struct Args {
    /// Word list, one word per line
    #[arg(short, long = "dict-path", value_name = "PATH", env = "WORDCHAIN_DICT")]
    pub dict_path: Option<PathBuf>,

    /// Print every word reachable from SOURCE with its distance
    #[arg(long, requires = "source")]
    pub tree: bool,

    /// Read "SOURCE TARGET" pairs from stdin, one per line (the default
    /// when no SOURCE is given)
    #[arg(short, long, conflicts_with_all = ["tree", "source", "target"])]
    pub interactive: bool,

    /// Emit JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Give up after expanding this many words
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<usize>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Word to start from
    pub source: Option<String>,

    /// Word to reach
    #[arg(requires = "source")]
    pub target: Option<String>,
}

impl Args {
    pub fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Text }
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_expansions: self.max_expansions,
        }
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` applies when no `-v` flag is given; otherwise verbosity wins.
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

/// Fallback word list locations, in search order.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_WORDLIST));
    }
    paths.push(PathBuf::from(SYSTEM_WORDLIST));
    paths
}

/// Pick the word list to load.
///
/// An explicit path is used as given, so a typo surfaces as a load error
/// naming that path. Otherwise the first existing file in `fallbacks` wins.
pub fn resolve_dictionary(
    explicit: Option<&Path>,
    fallbacks: &[PathBuf],
) -> Result<DictionaryConfig, CliError> {
    if let Some(path) = explicit {
        return Ok(DictionaryConfig::new(path));
    }
    fallbacks
        .iter()
        .find(|p| p.is_file())
        .map(DictionaryConfig::new)
        .ok_or_else(|| CliError::NoDictionary {
            searched: fallbacks.to_vec(),
        })
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Run the command described by `args`.
///
/// Returns `Ok(false)` when the command completed but found nothing (no
/// path between the two words); the binary turns that into exit status 1.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> Result<bool, CliError> {
    let config = resolve_dictionary(args.dict_path.as_deref(), &default_search_paths())?;
    debug!(path = %config.path().display(), "using word list");
    let mut chainer = WordChainer::from_config(&config)?.with_limits(args.limits());

    let Some(source) = args.source.as_deref() else {
        repl::run(&mut chainer, input, out, args.format())?;
        return Ok(true);
    };

    warn_if_unusual(source);
    if let Some(target) = args.target.as_deref() {
        warn_if_unusual(target);
    }

    if args.tree {
        tree_command(&mut chainer, source, args.target.as_deref(), out, args.format())?;
        return Ok(true);
    }

    let target = args
        .target
        .as_deref()
        .ok_or_else(|| CliError::MissingTarget {
            word: source.to_string(),
        })?;
    path_command(&mut chainer, source, target, out, args.format())
}

/// Search for a ladder and print it. Returns whether one was found.
pub fn path_command<W: Write>(
    chainer: &mut WordChainer,
    source: &str,
    target: &str,
    out: &mut W,
    format: Format,
) -> Result<bool, CliError> {
    let outcome = chainer.build_tree(source, Some(target))?;
    let path = chainer.find_path(None)?;
    render::write_path(out, format, source, target, outcome, path.as_deref())?;
    Ok(path.is_some())
}

/// Build a tree from `source` and print every reached word with its distance.
pub fn tree_command<W: Write>(
    chainer: &mut WordChainer,
    source: &str,
    target: Option<&str>,
    out: &mut W,
    format: Format,
) -> Result<(), CliError> {
    let outcome = chainer.build_tree(source, target)?;
    render::write_tree(out, format, source, outcome, &chainer.tree())?;
    Ok(())
}

fn warn_if_unusual(word: &str) {
    if !is_plain_word(word) {
        warn!(word, "word is not plain lowercase letters; lookup is exact");
    }
}
