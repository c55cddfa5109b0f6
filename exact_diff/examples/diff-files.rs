//! Prints the word-level changes between two files as JSON.
//!
//! ```sh
//! cargo run --example diff-files --features serde -- old.txt new.txt
//! ```

use std::{env, fs, process::ExitCode};

use exact_diff::{Granularity, compute_exact_diff};

fn main() -> ExitCode {
    let arguments: Vec<String> = env::args().skip(1).collect();
    let [old_path, new_path] = arguments.as_slice() else {
        eprintln!("usage: diff-files <old-file> <new-file>");
        return ExitCode::FAILURE;
    };

    let old = match fs::read_to_string(old_path) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("cannot read {old_path}: {error}");
            return ExitCode::FAILURE;
        }
    };
    let new = match fs::read_to_string(new_path) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("cannot read {new_path}: {error}");
            return ExitCode::FAILURE;
        }
    };

    let changes = compute_exact_diff(&old, &new, Granularity::Word);
    match serde_json::to_string_pretty(&changes) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("cannot serialize changes: {error}");
            ExitCode::FAILURE
        }
    }
}
