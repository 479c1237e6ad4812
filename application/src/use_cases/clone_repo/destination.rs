//! Clone destination resolution and ownership

use harvest_domain::repository::DestinationOwnership;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

/// Subdirectory of a temporary holder that git clones into
const HOLDER_SUBDIR: &str = "repo";

/// Where a clone is written.
///
/// When no destination was requested, `holder` owns a temporary directory
/// that is removed on drop unless [`Destination::hand_over`] is called.
#[derive(Debug)]
pub(crate) struct Destination {
    path: PathBuf,
    holder: Option<TempDir>,
}

impl Destination {
    /// Resolve the requested directory (or allocate a holder) and make sure
    /// the parent of the clone path exists.
    pub(crate) fn resolve(dest_dir: Option<&Path>, temp_prefix: &str) -> io::Result<Self> {
        match dest_dir {
            Some(dir) => {
                let path = normalize(&std::path::absolute(expand_home(dir))?);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                Ok(Self { path, holder: None })
            }
            None => {
                let holder = tempfile::Builder::new().prefix(temp_prefix).tempdir()?;
                Ok(Self {
                    path: holder.path().join(HOLDER_SUBDIR),
                    holder: Some(holder),
                })
            }
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Give the directory to the caller. A temporary holder is kept on disk
    /// from here on.
    pub(crate) fn hand_over(self) -> (PathBuf, DestinationOwnership) {
        match self.holder {
            Some(holder) => {
                let _ = holder.keep();
                (self.path, DestinationOwnership::TransferredTempDir)
            }
            None => (self.path, DestinationOwnership::CallerDirectory),
        }
    }
}

/// Replace a leading `~` with the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

/// Drop `.` and fold `..` components without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
