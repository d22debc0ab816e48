//! Canonical command implementation.

use crate::error::CliError;

pub fn run(version: String) -> Result<(), CliError> {
    let canonical =
        modpath::canonical_version(&version).ok_or(CliError::InvalidVersion(version))?;
    println!("{}", canonical);
    Ok(())
}
