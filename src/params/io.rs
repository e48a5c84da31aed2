use crate::consts::relation_consts::PARAMS_FILE;
use crate::errors::relation_error::RelationError;
use crate::types::relation_types::RelationParams;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn params_path(dir: &Path) -> std::path::PathBuf {
    dir.join(PARAMS_FILE)
}

pub fn load_params(dir: &Path) -> Result<RelationParams, RelationError> {
    let f = File::open(params_path(dir))?;
    let reader = BufReader::new(f);
    let params: RelationParams = serde_json::from_reader(reader)?;
    super::validate::validate_params(&params)?;
    Ok(params)
}

/// Rewrite the parameters record wholesale: write to a temp file in the
/// relation directory, then rename over the old record.
pub fn save_params_atomic(dir: &Path, params: &RelationParams) -> Result<(), RelationError> {
    let json = serde_json::to_string_pretty(params)?;
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut f = tmp.as_file();
        f.write_all(json.as_bytes())?;
        f.sync_all()?;
    }
    tmp.persist(params_path(dir))
        .map_err(|e| RelationError::Invalid(format!("persist failed: {}", e)))?;

    #[cfg(unix)]
    {
        let dirfd = File::open(dir)?;
        dirfd.sync_all()?;
    }
    Ok(())
}
