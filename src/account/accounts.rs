use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::AccountError;
use super::store::KeyValueStore;

/// Key holding the JSON-encoded account list.
pub const USERS_KEY: &str = "users";
/// Key holding the logged-in username.
pub const SESSION_KEY: &str = "currentUser";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct AccountStore<S> {
    store: S,
}

impl<S: KeyValueStore> AccountStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All stored accounts. An absent key means no accounts yet.
    pub fn accounts(&self) -> Result<Vec<Account>, AccountError> {
        match self.store.get(USERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// The logged-in user, if a session survives in storage.
    pub fn current_user(&self) -> Result<Option<String>, AccountError> {
        Ok(self.store.get(SESSION_KEY)?)
    }

    /// Log in when an account matches both fields exactly. Returns the
    /// username recorded as the session.
    pub fn login(&mut self, username: &str, password: &str) -> Result<String, AccountError> {
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let found = self
            .accounts()?
            .into_iter()
            .any(|a| a.username == username && a.password == password);
        if !found {
            return Err(AccountError::CredentialsNotFound);
        }

        self.store.set(SESSION_KEY, username)?;
        info!(%username, "logged in");
        Ok(username.to_string())
    }

    /// Register a new account. Does not log in.
    pub fn signup(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AccountError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let mut accounts = self.accounts()?;
        if accounts.iter().any(|a| a.username == username) {
            return Err(AccountError::DuplicateUsername(username.to_string()));
        }

        accounts.push(Account {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        self.store
            .set(USERS_KEY, &serde_json::to_string(&accounts)?)?;
        info!(%username, "account created");
        Ok(())
    }

    /// Clear the session. Returns the user that was logged out, if any.
    pub fn logout(&mut self) -> Result<Option<String>, AccountError> {
        let previous = self.current_user()?;
        if previous.is_some() {
            self.store.remove(SESSION_KEY)?;
            info!(username = previous.as_deref().unwrap_or_default(), "logged out");
        }
        Ok(previous)
    }
}
