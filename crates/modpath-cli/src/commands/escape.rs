//! Escape and unescape command implementations.

use crate::error::CliError;

pub fn run(input: String, version: bool) -> Result<(), CliError> {
    let escaped = if version {
        modpath::escape_version(&input)?
    } else {
        modpath::escape_path(&input)?
    };
    println!("{}", escaped);
    Ok(())
}

pub fn run_unescape(input: String, version: bool) -> Result<(), CliError> {
    let plain = if version {
        modpath::unescape_version(&input)?
    } else {
        modpath::unescape_path(&input)?
    };
    println!("{}", plain);
    Ok(())
}
