//! Upload acceptance rules applied before a file reaches extraction.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use landcheck_contracts::error::{LandcheckError, LandcheckResult};

/// 10 MiB, the largest scan the upload area accepts.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Which files may be submitted for verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakePolicy {
    /// Lowercase extensions without the dot.
    pub allowed_extensions: Vec<String>,
    pub max_bytes: u64,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            allowed_extensions: ["pdf", "jpg", "jpeg", "png"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl IntakePolicy {
    /// Accept or reject a file by name and size. Extension matching ignores case.
    pub fn check(&self, file_name: &str, size_bytes: u64) -> LandcheckResult<()> {
        let accepted = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(ext)));

        if !accepted {
            warn!(file_name, "upload rejected: unsupported file type");
            return Err(LandcheckError::UploadRejected {
                reason: format!(
                    "'{}' is not a supported file type (accepted: {})",
                    file_name,
                    self.allowed_extensions.join(", ")
                ),
            });
        }

        if size_bytes > self.max_bytes {
            warn!(file_name, size_bytes, max_bytes = self.max_bytes, "upload rejected: too large");
            return Err(LandcheckError::UploadRejected {
                reason: format!(
                    "File size exceeds the {}MB limit",
                    self.max_bytes / (1024 * 1024)
                ),
            });
        }

        Ok(())
    }

    /// Check a file on disk by name and metadata size, without reading it.
    /// Returns the size in bytes of an accepted file.
    pub fn check_path(&self, path: &Path) -> LandcheckResult<u64> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size = std::fs::metadata(path)
            .map_err(|e| LandcheckError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
            .len();
        self.check(&name, size)?;
        Ok(size)
    }
}
