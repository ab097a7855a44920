//! The built-in account table used when no backend is reachable.

use crate::role::Role;
use crate::AuthError;
use serde::{Deserialize, Serialize};
use shopfront_commerce::ids::UserId;

/// Shortest password a form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A login the table knows about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub name: String,
}

/// A filled-in registration form.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Form checks, in the order the page reports them.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::MissingField("Name"));
        }
        if self.email.trim().is_empty() {
            return Err(AuthError::MissingField("Email"));
        }
        validate_new_password(&self.password, &self.confirm_password)
    }
}

/// The two password checks shared by registration and password change.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), AuthError> {
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::PasswordTooShort);
    }
    Ok(())
}

/// Username and password pairs checked on login.
///
/// Lookups are exact: usernames are not case-folded and passwords are
/// compared as typed.
#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    accounts: Vec<Account>,
}

impl CredentialTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three demo accounts, one per role.
    pub fn demo() -> Self {
        let account = |id, username: &str, password: &str, role, name: &str| Account {
            id: UserId::new(id),
            username: username.to_string(),
            password: password.to_string(),
            role,
            name: name.to_string(),
        };
        Self {
            accounts: vec![
                account(1, "admin@polashtoli.com", "admin123", Role::Admin, "Admin User"),
                account(2, "salesman@polashtoli.com", "sales123", Role::Salesman, "Salesman User"),
                account(3, "customer@polashtoli.com", "customer123", Role::Customer, "Customer User"),
            ],
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username == username)
    }

    /// Find the account matching both fields exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&Account, AuthError> {
        self.accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Add a customer account after validating the form.
    pub fn register(&mut self, form: &Registration) -> Result<&Account, AuthError> {
        form.validate()?;
        let username = form.email.trim();
        if self.find(username).is_some() {
            return Err(AuthError::UserAlreadyExists(username.to_string()));
        }
        let id = UserId::new(self.accounts.len() as u64 + 1);
        self.accounts.push(Account {
            id,
            username: username.to_string(),
            password: form.password.clone(),
            role: Role::Customer,
            name: form.name.trim().to_string(),
        });
        tracing::debug!(%username, "registered account");
        Ok(&self.accounts[self.accounts.len() - 1])
    }
}
