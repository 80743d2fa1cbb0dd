use crate::error::StoreError;
use movieflix_models::Account;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Profile-local account directory.
///
/// Two JSON documents on disk: an insertion-ordered array of account
/// records, and an object mapping email → password hash. Every write is a
/// full overwrite of the document; there is no merge and no cross-document
/// transaction. Single interactive writer is the target.
pub struct AccountStore {
    accounts_path: PathBuf,
    secrets_path: PathBuf,
}

impl AccountStore {
    pub fn new(accounts_path: PathBuf, secrets_path: PathBuf) -> Self {
        Self {
            accounts_path,
            secrets_path,
        }
    }

    /// All accounts in insertion order. An absent file means no accounts.
    pub fn list(&self) -> Result<Vec<Account>, StoreError> {
        if !self.accounts_path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.accounts_path)?;
        let accounts: Vec<Account> = serde_json::from_str(&content)?;
        Ok(accounts)
    }

    /// Replace the whole account list.
    pub fn save(&self, accounts: &[Account]) -> Result<(), StoreError> {
        if let Some(parent) = self.accounts_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(accounts)?;
        std::fs::write(&self.accounts_path, content)?;
        Ok(())
    }

    pub fn secret(&self, email: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load_secrets()?.get(email).cloned())
    }

    pub fn set_secret(&self, email: &str, hash: &str) -> Result<(), StoreError> {
        let mut secrets = self.load_secrets()?;
        secrets.insert(email.to_string(), hash.to_string());
        if let Some(parent) = self.secrets_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&secrets)?;
        std::fs::write(&self.secrets_path, content)?;
        Ok(())
    }

    fn load_secrets(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.secrets_path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.secrets_path)?;
        let secrets: BTreeMap<String, String> = serde_json::from_str(&content)?;
        Ok(secrets)
    }
}
