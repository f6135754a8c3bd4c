use std::path::Path;

use tracing::info;

use super::{ReportError, write_file};
use crate::keywords::KeywordStore;

/// Pretty-printed category → records map. Hebrew text is written as-is, not `\u` escaped.
pub fn to_json(store: &KeywordStore) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(store)?)
}

pub fn save_json(store: &KeywordStore, path: &Path) -> Result<(), ReportError> {
    write_file(path, &to_json(store)?)?;
    info!(path = %path.display(), "saved JSON");
    Ok(())
}
