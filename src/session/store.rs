use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StoreError;

/// Storage port for the persisted login response: one string slot.
pub trait SessionStore: Send + Sync {
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&self, value: &str) -> Result<(), StoreError>;
    /// Remove the stored value. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Session kept in a single JSON file, shared by every console process of
/// the same user.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Write-then-rename so a concurrent reader never sees half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|e| self.io_error(e))?;
        restrict_permissions(&tmp).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// In-process store, for tests and for running without a session file.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(value.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Result<Option<String>, StoreError> {
        let guard = self.value.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn write(&self, value: &str) -> Result<(), StoreError> {
        let mut guard = self.value.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.value.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
