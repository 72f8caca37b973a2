use std::path::Path;

use crate::error::{AnodraError, Result};

/// Read-only existence check, performed once before the first prompt so the
/// operator's answers are never discarded on a foregone failure.
pub fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(AnodraError::ProjectExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
