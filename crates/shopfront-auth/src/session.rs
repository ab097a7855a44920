//! Session management.
//!
//! A single session lives under the `userSession` key; the shopper's
//! profile (name, email, token) lives separately under `user`. Logging in
//! from a second tab overwrites both, last writer wins.

use crate::credentials::CredentialTable;
use crate::role::{Permission, Role};
use crate::AuthError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shopfront_cache::{LocalStore, StorageKey};
use shopfront_commerce::ids::UserId;

/// The logged-in user as the pages see it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: UserId,
    /// Login name; the email address for every account.
    pub username: String,
    pub name: String,
    pub role: Role,
    /// Single letter shown in the avatar bubble.
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub login_time: DateTime<Utc>,
}

impl UserSession {
    /// Start a session now.
    pub fn new(id: UserId, username: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        let name = name.into();
        Self {
            id,
            username: username.into(),
            avatar: avatar_letter(&name),
            name,
            role,
            token: None,
            login_time: Utc::now(),
        }
    }

    /// Attach a bearer token issued by the backend.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach a freshly generated local token.
    pub fn with_generated_token(self) -> Self {
        self.with_token(generate_token())
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role.has_permission(permission)
    }
}

/// Whether anyone is logged in.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(UserSession),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&UserSession> {
        match self {
            AuthState::Anonymous => None,
            AuthState::Authenticated(session) => Some(session),
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session().map(|s| s.role)
    }
}

/// The shopper's profile, stored under `user`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

/// Session persistence over the local store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    store: LocalStore,
}

impl SessionStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// The stored session, if it parses.
    pub fn current(&self) -> Option<UserSession> {
        self.store.read_or(StorageKey::UserSession, None)
    }

    pub fn state(&self) -> AuthState {
        match self.current() {
            Some(session) => AuthState::Authenticated(session),
            None => AuthState::Anonymous,
        }
    }

    /// Check credentials against the table and persist a session on a match.
    ///
    /// On failure nothing is written and the state stays as it was.
    pub fn login(
        &self,
        table: &CredentialTable,
        username: &str,
        password: &str,
    ) -> Result<UserSession, AuthError> {
        let account = table.authenticate(username, password)?;
        let session = UserSession::new(account.id, &account.username, &account.name, account.role)
            .with_generated_token();
        self.start(session)
    }

    /// Persist a session created elsewhere, e.g. from a backend login.
    pub fn start(&self, session: UserSession) -> Result<UserSession, AuthError> {
        self.store.write(StorageKey::UserSession, &session)?;
        tracing::info!(username = %session.username, role = %session.role, "session started");
        Ok(session)
    }

    /// Remove the session, the profile and the bearer token.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(StorageKey::UserSession)?;
        self.store.remove(StorageKey::User)?;
        self.store.remove(StorageKey::AuthToken)?;
        tracing::info!("session ended");
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.current().is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.current().is_some_and(|s| s.role == role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.current().is_some_and(|s| roles.contains(&s.role))
    }

    /// Check a permission by name; unknown names are never granted.
    pub fn has_permission(&self, name: &str) -> bool {
        match (self.current(), name.parse::<Permission>()) {
            (Some(session), Ok(permission)) => session.has_permission(permission),
            _ => false,
        }
    }

    /// Permissions of the logged-in role, empty when anonymous.
    pub fn permissions(&self) -> &'static [Permission] {
        self.current().map(|s| s.role.permissions()).unwrap_or(&[])
    }

    /// Fail unless the session's role is one of `roles`.
    pub fn require_role(&self, roles: &[Role]) -> Result<UserSession, AuthError> {
        let session = self.current().ok_or(AuthError::NotLoggedIn)?;
        if roles.contains(&session.role) {
            Ok(session)
        } else {
            Err(AuthError::InsufficientPermissions)
        }
    }

    pub fn profile(&self) -> Option<CustomerProfile> {
        self.store.read_or(StorageKey::User, None)
    }

    pub fn save_profile(&self, profile: &CustomerProfile) -> Result<(), AuthError> {
        self.store.write(StorageKey::User, profile)?;
        if let Some(token) = &profile.token {
            self.store.write(StorageKey::AuthToken, token)?;
        }
        Ok(())
    }

    /// The bearer token of the last backend login.
    pub fn auth_token(&self) -> Option<String> {
        self.store.read_or(StorageKey::AuthToken, None)
    }
}

fn avatar_letter(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Generate a URL-safe random token.
fn generate_token() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 24] = rand::thread_rng().gen();
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions() -> SessionStore {
        SessionStore::new(LocalStore::in_memory())
    }

    #[test]
    fn test_login_persists_session() {
        let sessions = sessions();
        let table = CredentialTable::demo();
        assert_eq!(sessions.state(), AuthState::Anonymous);

        let session = sessions
            .login(&table, "admin@polashtoli.com", "admin123")
            .unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.avatar, "A");
        assert!(sessions.is_logged_in());
        assert_eq!(sessions.state().role(), Some(Role::Admin));
        assert!(sessions.has_permission("export_data"));
        assert!(!sessions.has_permission("place_orders"));
        assert!(!sessions.has_permission("nonsense"));
    }

    #[test]
    fn test_failed_login_leaves_state() {
        let sessions = sessions();
        let table = CredentialTable::demo();
        let err = sessions
            .login(&table, "admin@polashtoli.com", "wrong")
            .unwrap_err();
        assert!(err.is_auth_failure());
        assert_eq!(sessions.state(), AuthState::Anonymous);
    }

    #[test]
    fn test_logout_clears_everything() {
        let sessions = sessions();
        sessions
            .login(&CredentialTable::demo(), "customer@polashtoli.com", "customer123")
            .unwrap();
        sessions
            .save_profile(&CustomerProfile {
                name: "Customer User".into(),
                email: "customer@polashtoli.com".into(),
                token: Some("abc".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(sessions.auth_token().as_deref(), Some("abc"));

        sessions.logout().unwrap();
        assert!(!sessions.is_logged_in());
        assert_eq!(sessions.profile(), None);
        assert_eq!(sessions.auth_token(), None);
        assert!(sessions.permissions().is_empty());
    }

    #[test]
    fn test_roles() {
        let sessions = sessions();
        sessions
            .login(&CredentialTable::demo(), "salesman@polashtoli.com", "sales123")
            .unwrap();
        assert!(sessions.has_role(Role::Salesman));
        assert!(sessions.has_any_role(&[Role::Admin, Role::Salesman]));
        assert!(!sessions.has_any_role(&[Role::Customer]));
        assert!(matches!(
            sessions.require_role(&[Role::Admin]),
            Err(AuthError::InsufficientPermissions)
        ));
    }

    #[test]
    fn test_session_wire_format() {
        let session = UserSession::new(UserId::new(3), "customer@polashtoli.com", "customer user", Role::Customer);
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["role"], "customer");
        assert_eq!(value["avatar"], "C");
        assert!(value.get("loginTime").is_some());
        assert!(value.get("token").is_none());
    }

    #[test]
    fn test_generated_tokens_are_url_safe_and_distinct() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        {
            let sessions = SessionStore::new(LocalStore::open_file(&path).unwrap());
            sessions
                .login(&CredentialTable::demo(), "customer@polashtoli.com", "customer123")
                .unwrap();
        }
        let reopened = SessionStore::new(LocalStore::open_file(&path).unwrap());
        assert!(reopened.has_role(Role::Customer));
    }

    #[test]
    fn test_corrupt_session_reads_as_anonymous() {
        let store = LocalStore::in_memory();
        store.write_raw(StorageKey::UserSession, "{not json").unwrap();
        assert_eq!(SessionStore::new(store).state(), AuthState::Anonymous);
    }
}
