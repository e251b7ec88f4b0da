// wordchain: find the shortest word ladder between two words.
//
// Usage:
//   wordchain [-d PATH] [OPTIONS] SOURCE TARGET
//   wordchain [-d PATH] --tree [OPTIONS] SOURCE
//   wordchain [-d PATH] [--interactive]     (queries on stdin)
//
// Without -d the word list is taken from $WORDCHAIN_DICT, ./dictionary.txt,
// or /usr/share/dict/words, in that order.
//
// Exit status: 0 on success, 1 if no ladder exists or on any error.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use wordchain_cli::Args;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    wordchain_cli::init_logging(args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = wordchain_cli::run(&args, stdin.lock(), &mut out);
    let flushed = out.flush();

    match (result, flushed) {
        (Ok(true), Ok(())) => ExitCode::SUCCESS,
        (Ok(false), Ok(())) => ExitCode::FAILURE,
        (Err(e), _) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
        (Ok(_), Err(e)) => {
            eprintln!("error: failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}
