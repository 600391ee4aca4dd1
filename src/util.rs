use anyhow::{anyhow, Result};
use std::path::Path;

/// Reads the whole file at `path`. `kind` names the file in the error message
/// (e.g., "config").
pub fn read(path: &Path, kind: &str) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Err(e) => Err(anyhow!(
            "Reading {} file `{}`: {}",
            kind,
            path.display(),
            e
        )),
        Ok(bytes) => Ok(bytes),
    }
}
