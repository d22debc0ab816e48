//! Output formatting utilities.

use modpath::ModuleVersion;
use serde_json::Value;

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a module version as a table row.
pub fn format_table_row(module: &ModuleVersion) -> String {
    if module.version.is_empty() {
        return module.path.clone();
    }
    format!("{:<50} {}", module.path, module.version)
}
