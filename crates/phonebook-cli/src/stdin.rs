// crates/phonebook-cli/src/stdin.rs - STDIN handling for batch input
//
// Follows the Unix convention: when a command's positional argument is
// omitted, read the input from a pipe instead.

use anyhow::{Result, anyhow};
use std::io::{self, BufRead, IsTerminal};

/// Read non-empty, trimmed lines from piped stdin
///
/// Enables batch imports:
/// ```bash
/// cat exported.csv | phonebook add
/// ```
pub fn read_lines_from_stdin() -> Result<Vec<String>> {
    if io::stdin().is_terminal() {
        return Err(anyhow!(
            "No input provided. Either provide an argument or pipe input.\n\nExamples:\n  phonebook add \"Иванов,Иван,Иванович,Orga,111,222\"\n  cat contacts.csv | phonebook add"
        ));
    }

    read_lines(io::stdin().lock())
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }

    if lines.is_empty() {
        return Err(anyhow!("No input lines provided"));
    }

    Ok(lines)
}
