// Interactive mode: one query per input line.
//
//   SOURCE TARGET   print the ladder from SOURCE to TARGET
//   SOURCE          print every word reachable from SOURCE
//
// A bad query prints "error: ..." and the loop moves on to the next line.

use std::io::{BufRead, Write};

use tracing::debug;
use wordchain_engine::WordChainer;

use crate::render::Format;
use crate::{CliError, path_command, tree_command};

/// Answer queries from `input` until it is exhausted.
pub fn run<R: BufRead, W: Write>(
    chainer: &mut WordChainer,
    input: R,
    out: &mut W,
    format: Format,
) -> Result<(), CliError> {
    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        let result = match words.as_slice() {
            [] => continue,
            [source] => tree_command(chainer, source, None, out, format),
            [source, target] => path_command(chainer, source, target, out, format).map(|_| ()),
            _ => {
                writeln!(out, "error: expected SOURCE [TARGET], got {} words", words.len())?;
                continue;
            }
        };

        match result {
            Ok(()) => {}
            Err(CliError::Search(e)) => {
                debug!(query = %line, error = %e, "query rejected");
                writeln!(out, "error: {e}")?;
            }
            Err(e) => return Err(e),
        }
        out.flush()?;
    }
    Ok(())
}
