//! # Wisesaying CLI
//!
//! The binary is intentionally thin: the REPL lives in `src/wisesaying/cli/` and
//! this file only invokes `cli::run()` and handles process termination.
//!
//! Startup flags (`--reset`, `--seed`, `--db`, `--export`, `--page-size`) are
//! applied once before the first prompt. After that every line on stdin is one
//! command; storage errors end the process with exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
