use crate::error::AuthError;
use crate::password;
use chrono::Utc;
use movieflix_config::{AccountStore, PathManager, SessionStore};
use movieflix_models::{Account, LoginData, SignupData};
use tracing::info;

const MIN_PASSWORD_LEN: usize = 6;

/// Enforces signup/login invariants against the profile stores.
pub struct AuthService {
    accounts: AccountStore,
    sessions: SessionStore,
}

impl AuthService {
    pub fn new(accounts: AccountStore, sessions: SessionStore) -> Self {
        Self { accounts, sessions }
    }

    pub fn from_paths(paths: &PathManager) -> Self {
        Self::new(
            AccountStore::new(paths.accounts_file(), paths.secrets_file()),
            SessionStore::new(paths.session_file()),
        )
    }

    /// Register a new account. Validation runs before any store access;
    /// nothing is persisted on failure. Does not set a session — callers
    /// log in afterwards.
    pub fn signup(&self, data: &SignupData) -> Result<Account, AuthError> {
        if data.password != data.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if data.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let mut accounts = self.accounts.list()?;
        if accounts.iter().any(|a| a.email == data.email) {
            return Err(AuthError::UserExists);
        }

        let account = Account {
            id: Utc::now().timestamp_millis().to_string(),
            name: data.name.clone(),
            email: data.email.clone(),
        };

        accounts.push(account.clone());
        self.accounts.save(&accounts)?;
        self.accounts
            .set_secret(&data.email, &password::hash_password(&data.password)?)?;

        info!(email = %account.email, "account created");
        Ok(account)
    }

    /// Authenticate and set the session. Unknown email and wrong password
    /// produce the identical error.
    pub fn login(&self, data: &LoginData) -> Result<Account, AuthError> {
        let account = self
            .accounts
            .list()?
            .into_iter()
            .find(|a| a.email == data.email)
            .ok_or(AuthError::InvalidCredentials)?;

        let hash = self
            .accounts
            .secret(&data.email)?
            .ok_or(AuthError::InvalidCredentials)?;

        if !password::verify_password(&data.password, &hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.sessions.set(&account)?;
        info!(email = %account.email, "logged in");
        Ok(account)
    }

    /// Clear the session. Idempotent, always succeeds on an empty slot.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.sessions.clear()?;
        Ok(())
    }

    pub fn session(&self) -> Result<Option<Account>, AuthError> {
        Ok(self.sessions.get()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> AuthService {
        let paths = PathManager::with_base(dir.path());
        AuthService::from_paths(&paths)
    }

    fn signup_data(email: &str, password: &str, confirm: &str) -> SignupData {
        SignupData {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_signup_then_login_sets_session() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let account = service
            .signup(&signup_data("a@example.com", "secret1", "secret1"))
            .unwrap();
        assert_eq!(account.email, "a@example.com");
        // Signup alone does not log anyone in
        assert_eq!(service.session().unwrap(), None);

        let logged_in = service
            .login(&LoginData {
                email: "a@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap();
        assert_eq!(logged_in, account);
        assert_eq!(service.session().unwrap(), Some(account));
    }

    #[test]
    fn test_signup_password_mismatch_persists_nothing() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let err = service
            .signup(&signup_data("a@example.com", "secret1", "secret2"))
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(err.to_string(), "Passwords do not match");

        let paths = PathManager::with_base(dir.path());
        let accounts = AccountStore::new(paths.accounts_file(), paths.secrets_file());
        assert!(accounts.list().unwrap().is_empty());
        assert_eq!(accounts.secret("a@example.com").unwrap(), None);
    }

    #[test]
    fn test_signup_rejects_short_password() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        let err = service
            .signup(&signup_data("a@example.com", "five5", "five5"))
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordTooShort));
    }

    #[test]
    fn test_signup_rejects_duplicate_email() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        service
            .signup(&signup_data("a@example.com", "secret1", "secret1"))
            .unwrap();
        let err = service
            .signup(&signup_data("a@example.com", "secret2", "secret2"))
            .unwrap_err();
        assert!(matches!(err, AuthError::UserExists));
    }

    #[test]
    fn test_login_failures_are_indistinguishable() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        service
            .signup(&signup_data("a@example.com", "secret1", "secret1"))
            .unwrap();

        let unknown_email = service
            .login(&LoginData {
                email: "nobody@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap_err();
        let wrong_password = service
            .login(&LoginData {
                email: "a@example.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .unwrap_err();

        assert_eq!(unknown_email.to_string(), "Invalid email or password");
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
        // Neither failure sets a session
        assert_eq!(service.session().unwrap(), None);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        service
            .signup(&signup_data("a@example.com", "secret1", "secret1"))
            .unwrap();
        service
            .login(&LoginData {
                email: "a@example.com".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap();

        service.logout().unwrap();
        assert_eq!(service.session().unwrap(), None);
        service.logout().unwrap();
        assert_eq!(service.session().unwrap(), None);
    }

    #[test]
    fn test_secrets_file_never_holds_raw_password() {
        let dir = TempDir::new().unwrap();
        let service = service_in(&dir);

        service
            .signup(&signup_data("a@example.com", "super-secret-pw", "super-secret-pw"))
            .unwrap();

        let paths = PathManager::with_base(dir.path());
        let raw = std::fs::read_to_string(paths.secrets_file()).unwrap();
        assert!(!raw.contains("super-secret-pw"));
        assert!(raw.contains("argon2"));
    }
}
