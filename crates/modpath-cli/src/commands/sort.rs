//! Sort command implementation.

use modpath::ModuleVersion;
use std::io::{self, Read};

use crate::error::CliError;
use crate::output::{format_json, format_table_row};

pub fn run(input: Option<String>, json: bool) -> Result<(), CliError> {
    // Read lines from file or stdin
    let text = if let Some(path) = input {
        std::fs::read_to_string(&path).map_err(|source| CliError::Io {
            source_name: path.clone(),
            source,
        })?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Io {
                source_name: "stdin".to_string(),
                source,
            })?;
        buffer
    };

    let mut list = parse_lines(&text)?;
    tracing::debug!(count = list.len(), "sorting module versions");
    modpath::sort(&mut list);

    if json {
        println!("{}", format_json(&serde_json::to_value(&list)?));
    } else {
        for module in &list {
            println!("{}", format_table_row(module));
        }
    }
    Ok(())
}

/// Parses `path@version` or whitespace-separated `path version [rest]` lines.
fn parse_lines(text: &str) -> Result<Vec<ModuleVersion>, CliError> {
    let mut list = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let first = fields.next().unwrap_or_default();
        let module = match fields.next() {
            Some(version) if !first.contains('@') => ModuleVersion::new(first, version),
            Some(_) => {
                return Err(CliError::BadLine {
                    line: idx + 1,
                    text: line.to_string(),
                })
            }
            None => match first.parse::<ModuleVersion>() {
                Ok(module) => module,
                Err(never) => match never {},
            },
        };
        list.push(module);
    }
    Ok(list)
}
