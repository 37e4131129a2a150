//! backtocode -- a grid pursuit bot speaking the judge's line protocol.
//!
//! Reads the opponent count and then one input batch per round from stdin,
//! writes one `x y` move per round to stdout, and dumps the per-cell scores
//! to stderr.
//!
//! Usage:
//!   backtocode [--quiet]
//!
//! Options:
//!   --quiet   Suppress the per-round score dump on stderr

use std::env;
use std::io::{self, BufWriter};
use std::process;

use backtocode::agent::{run_session, AgentOptions};

fn main() {
    let mut options = AgentOptions::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--quiet" => options.dump_scores = false,
            other => eprintln!("ignoring unknown argument: {}", other),
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = BufWriter::new(stdout.lock());
    let mut diag = BufWriter::new(stderr.lock());

    if let Err(e) = run_session(stdin.lock(), &mut out, &mut diag, options) {
        drop(diag);
        eprintln!("fatal: {}", e);
        process::exit(1);
    }
}
