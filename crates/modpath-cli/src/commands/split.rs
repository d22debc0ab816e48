//! Split command implementation.

use serde_json::json;

use crate::error::CliError;
use crate::output::format_json;

pub fn run(path: String, json: bool) -> Result<(), CliError> {
    let (prefix, path_major) =
        modpath::split_path_version(&path).ok_or_else(|| CliError::InvalidSuffix(path.clone()))?;

    if json {
        let output = json!({
            "prefix": prefix,
            "path_major": path_major,
        });
        println!("{}", format_json(&output));
    } else {
        println!("{}\t{}", prefix, path_major);
    }
    Ok(())
}
