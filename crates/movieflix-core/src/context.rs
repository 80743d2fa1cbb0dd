use crate::auth::AuthService;
use crate::error::AuthError;
use movieflix_models::{Account, LoginData, SignupData};

/// Tab-wide holder of the authenticated account.
///
/// Passed explicitly to whatever needs authentication state rather than
/// living in a global. Construction reads the session store exactly once;
/// afterwards the cached account is authoritative for this process.
pub struct AuthContext {
    service: AuthService,
    current: Option<Account>,
}

impl AuthContext {
    pub fn initialize(service: AuthService) -> Result<Self, AuthError> {
        let current = service.session()?;
        Ok(Self { service, current })
    }

    pub fn login(&mut self, data: &LoginData) -> Result<Account, AuthError> {
        let account = self.service.login(data)?;
        self.current = Some(account.clone());
        Ok(account)
    }

    /// Signup followed by an immediate login with the same credentials.
    /// Either step's failure surfaces unchanged.
    pub fn signup(&mut self, data: &SignupData) -> Result<Account, AuthError> {
        self.service.signup(data)?;
        self.login(&LoginData {
            email: data.email.clone(),
            password: data.password.clone(),
        })
    }

    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.service.logout()?;
        self.current = None;
        Ok(())
    }

    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use movieflix_config::PathManager;
    use tempfile::TempDir;

    fn context_in(dir: &TempDir) -> AuthContext {
        let paths = PathManager::with_base(dir.path());
        AuthContext::initialize(AuthService::from_paths(&paths)).unwrap()
    }

    fn signup_data(email: &str) -> SignupData {
        SignupData {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_signup_logs_in_immediately() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context_in(&dir);

        assert!(!ctx.is_authenticated());
        let account = ctx.signup(&signup_data("a@example.com")).unwrap();
        assert_eq!(account.email, "a@example.com");
        assert!(ctx.is_authenticated());
    }

    #[test]
    fn test_initialize_restores_persisted_session() {
        let dir = TempDir::new().unwrap();
        {
            let mut ctx = context_in(&dir);
            ctx.signup(&signup_data("a@example.com")).unwrap();
        }

        // A fresh context over the same profile picks up the session
        let ctx = context_in(&dir);
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.current().unwrap().email, "a@example.com");
    }

    #[test]
    fn test_signup_failure_surfaces_and_leaves_context_unauthenticated() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context_in(&dir);

        let mut bad = signup_data("a@example.com");
        bad.confirm_password = "different".to_string();
        let err = ctx.signup(&bad).unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_logout_clears_context_and_store() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context_in(&dir);
        ctx.signup(&signup_data("a@example.com")).unwrap();

        ctx.logout().unwrap();
        assert!(!ctx.is_authenticated());

        let fresh = context_in(&dir);
        assert!(!fresh.is_authenticated());
    }
}
