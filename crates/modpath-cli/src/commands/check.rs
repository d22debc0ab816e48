//! Check command implementation.

use clap::ValueEnum;
use serde_json::json;

use crate::error::CliError;
use crate::output::format_json;

/// Path dialect selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Module path
    Module,
    /// Import path
    Import,
    /// File path
    File,
}

pub fn run(path: String, version: Option<String>, kind: Kind, json: bool) -> Result<(), CliError> {
    match (&version, kind) {
        (Some(version), Kind::Module) => modpath::check(&path, version)?,
        (Some(_), _) => {
            return Err(CliError::Usage(
                "a version can only be checked against a module path".to_string(),
            ))
        }
        (None, Kind::Module) => modpath::check_path(&path)?,
        (None, Kind::Import) => modpath::check_import_path(&path)?,
        (None, Kind::File) => modpath::check_file_path(&path)?,
    }
    tracing::debug!(path = %path, ?kind, "check passed");

    if json {
        let output = json!({
            "path": path,
            "version": version,
            "kind": format!("{:?}", kind).to_lowercase(),
            "valid": true,
        });
        println!("{}", format_json(&output));
    } else {
        match version {
            Some(version) => println!("ok {}@{}", path, version),
            None => println!("ok {}", path),
        }
    }
    Ok(())
}
