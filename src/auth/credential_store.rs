//! Credential Storage
//! Mission: Hold the single registered account and check login attempts against it

use crate::auth::models::Credential;

pub const DEFAULT_EMAIL: &str = "hello@example.com";
pub const DEFAULT_PASSWORD: &str = "P@ssw0rd";

/// Immutable store for the one recognized account
#[derive(Debug, Clone)]
pub struct CredentialStore {
    account: Credential,
}

impl CredentialStore {
    pub fn new(account: Credential) -> Self {
        Self { account }
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    /// Exact equality on both fields. Callers get a plain bool, so an unknown
    /// email and a wrong password look identical.
    pub fn verify(&self, attempt: &Credential) -> bool {
        let email_ok = attempt.email == self.account.email;
        let password_ok = attempt.password == self.account.password;
        email_ok && password_ok
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(Credential::new(DEFAULT_EMAIL, DEFAULT_PASSWORD))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_account() {
        let store = CredentialStore::default();
        assert_eq!(store.email(), "hello@example.com");
        assert!(store.verify(&Credential::new("hello@example.com", "P@ssw0rd")));
    }

    #[test]
    fn test_password_verification() {
        let store = CredentialStore::default();

        // Incorrect password
        assert!(!store.verify(&Credential::new("hello@example.com", "wrong")));

        // Non-existent user
        assert!(!store.verify(&Credential::new("nobody@example.com", "P@ssw0rd")));

        // Comparison is exact, no trimming or case folding
        assert!(!store.verify(&Credential::new("Hello@example.com", "P@ssw0rd")));
        assert!(!store.verify(&Credential::new("hello@example.com", "P@ssw0rd ")));
        assert!(!store.verify(&Credential::new("", "")));
    }

    #[test]
    fn test_custom_account() {
        let store = CredentialStore::new(Credential::new("ops@example.com", "s3cret"));
        assert!(store.verify(&Credential::new("ops@example.com", "s3cret")));
        assert!(!store.verify(&Credential::new("hello@example.com", "P@ssw0rd")));
    }
}
