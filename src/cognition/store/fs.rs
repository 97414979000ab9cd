use super::{schema, UserStore};
use crate::config::StorageConfig;
use crate::error::{CognitionError, Result};
use crate::model::User;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// File-backed store holding all users in one JSON document.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Resolves the document path and creates its directory.
    ///
    /// Fails if the directory cannot be created. The document itself is only
    /// written on the first mutation.
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let dir = config.storage_dir();
        ensure_dir(&dir)?;
        Ok(Self {
            path: config.storage_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file and a zero-byte file are both empty.
    pub fn is_empty(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(CognitionError::Io(e)),
        }
    }

    fn dir(&self) -> Result<&Path> {
        self.path.parent().ok_or_else(|| {
            CognitionError::Store(format!("{} has no parent directory", self.path.display()))
        })
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        debug!(dir = %path.display(), "creating storage directory");
        fs::create_dir_all(path).map_err(CognitionError::Io)?;
    }
    Ok(())
}

impl UserStore for FileStore {
    fn read_all(&self) -> Result<Vec<User>> {
        if self.is_empty()? {
            debug!(path = %self.path.display(), "document empty or absent");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(CognitionError::Io)?;
        let users = schema::decode(&content)?;
        debug!(path = %self.path.display(), users = users.len(), "loaded users");
        Ok(users)
    }

    fn write_all(&mut self, users: &[User]) -> Result<()> {
        let content = schema::encode(users)?;
        write_atomically(self.dir()?, &self.path, &content)?;

        debug!(path = %self.path.display(), users = users.len(), "wrote users");
        Ok(())
    }
}

/// Writes next to `target` and renames over it, so readers see either the old
/// document or the new one. The temp file is removed on any failure.
fn write_atomically(dir: &Path, target: &Path, content: &str) -> Result<()> {
    let tmp_file = dir.join(format!(".cognition-{}.tmp", Uuid::new_v4()));
    let written = fs::write(&tmp_file, content).and_then(|_| fs::rename(&tmp_file, target));
    if let Err(e) = written {
        warn!(tmp = %tmp_file.display(), error = %e, "write failed, discarding temp file");
        let _ = fs::remove_file(&tmp_file);
        return Err(CognitionError::Io(e));
    }
    Ok(())
}
