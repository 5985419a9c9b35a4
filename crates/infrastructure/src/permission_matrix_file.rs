use std::path::Path;

use estatedesk_core::{AppError, AppResult};
use estatedesk_domain::PermissionMatrix;
use tracing::info;

/// Parses a JSON permission matrix document.
///
/// Unknown role or module keys are rejected so that typos surface at startup
/// instead of silently denying access.
pub fn parse_permission_matrix(json: &str) -> AppResult<PermissionMatrix> {
    serde_json::from_str(json).map_err(|error| {
        AppError::Validation(format!("invalid permission matrix document: {error}"))
    })
}

/// Loads a JSON permission matrix document from disk.
pub fn load_permission_matrix(path: &Path) -> AppResult<PermissionMatrix> {
    let contents = std::fs::read_to_string(path).map_err(|error| {
        AppError::Internal(format!(
            "failed to read permission matrix '{}': {error}",
            path.display()
        ))
    })?;

    let matrix = parse_permission_matrix(contents.as_str())?;
    info!(
        path = %path.display(),
        version = matrix.version(),
        "loaded permission matrix"
    );

    Ok(matrix)
}
