use crate::error::StoreError;
use movieflix_models::Account;
use std::path::PathBuf;

/// Single-slot holder of the currently authenticated account.
///
/// One JSON account object on disk; an absent file means nobody is logged
/// in. Login overwrites, logout removes, startup reads once.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn get(&self) -> Result<Option<Account>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let account: Account = serde_json::from_str(&content)?;
        Ok(Some(account))
    }

    pub fn set(&self, account: &Account) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(account)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Idempotent: clearing an already-empty session is not an error.
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}
