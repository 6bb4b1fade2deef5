//! JSON persistence of finished records

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use domain_claims::ClaimRecord;

use crate::error::CliError;

/// File name of the saved record
pub const RESULT_FILE_NAME: &str = "claim_result.json";

/// Writes the record as pretty JSON to `<dir>/claim_result.json`, creating
/// the directory if needed; returns the written path
pub fn save_record(record: &ClaimRecord, dir: &Path) -> Result<PathBuf, CliError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(RESULT_FILE_NAME);
    fs::write(&path, record.to_json()?)?;
    info!(path = %path.display(), "Saved claim result");
    Ok(path)
}
