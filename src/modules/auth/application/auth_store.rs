use crate::modules::auth::domain::{AuthState, User};
use crate::modules::persistence::{PersistenceAdapter, StorageKey};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::validation::Validator;
use crate::{log_info, log_warn};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

#[derive(Default)]
struct AuthInner {
    state: AuthState,
    last_error: Option<AppError>,
}

/// Mock authentication container.
///
/// Credentials are only shape-checked; a successful login or registration
/// produces a local user record that is persisted under the user key.
pub struct AuthStore {
    persistence: PersistenceAdapter,
    latency: Duration,
    inner: RwLock<AuthInner>,
}

impl AuthStore {
    pub fn new(persistence: PersistenceAdapter, latency: Duration) -> Self {
        let state = AuthState::from(persistence.load::<User>(StorageKey::User));
        if let Some(user) = state.user() {
            log_info!("Restored session for user '{}'", user.username);
        }

        Self {
            persistence,
            latency,
            inner: RwLock::new(AuthInner {
                state,
                last_error: None,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        self.simulate_latency().await;

        let checked = Validator::validate_email(email)
            .and_then(|_| Validator::validate_password(password));
        self.complete(checked.map(|_| User::from_email(email)))
    }

    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        self.simulate_latency().await;

        let checked = Validator::validate_username(username)
            .and_then(|_| Validator::validate_email(email))
            .and_then(|_| Validator::validate_password(password));
        self.complete(checked.map(|_| User::new(username.trim(), email.trim())))
    }

    pub fn logout(&self) {
        let mut inner = self.write();
        if let Some(user) = inner.state.user() {
            log_info!("User '{}' logged out", user.username);
        }
        inner.state = AuthState::Anonymous;
        inner.last_error = None;
        self.persistence.remove(StorageKey::User);
    }

    fn complete(&self, outcome: AppResult<User>) -> AppResult<User> {
        let mut inner = self.write();
        match outcome {
            Ok(user) => {
                self.persistence.save(StorageKey::User, &user);
                log_info!("User '{}' signed in", user.username);
                inner.state = AuthState::Authenticated(user.clone());
                inner.last_error = None;
                Ok(user)
            }
            Err(e) => {
                log_warn!("Sign-in rejected: {}", e);
                inner.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub fn state(&self) -> AuthState {
        self.read().state.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().state.user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().state.is_authenticated()
    }

    /// Field-level error of the last rejected attempt
    pub fn last_error(&self) -> Option<AppError> {
        self.read().last_error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::persistence::MemoryStore;
    use std::sync::Arc;

    fn adapter() -> PersistenceAdapter {
        PersistenceAdapter::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_login_rejects_email_without_at() {
        let store = AuthStore::new(adapter(), Duration::ZERO);

        let err = store.login("neo.matrix.io", "secret1").await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError { ref field, .. } if field == "email"));
        assert_eq!(store.state(), AuthState::Anonymous);
        assert_eq!(store.last_error(), Some(err));
    }

    #[tokio::test]
    async fn test_login_persists_user() {
        let persistence = adapter();
        let store = AuthStore::new(persistence.clone(), Duration::ZERO);

        let user = store.login("neo@matrix.io", "secret1").await.unwrap();

        assert_eq!(user.username, "neo");
        assert!(store.is_authenticated());
        assert_eq!(persistence.load::<User>(StorageKey::User), Some(user.clone()));

        let restored = AuthStore::new(persistence, Duration::ZERO);
        assert_eq!(restored.current_user(), Some(user));
    }

    #[tokio::test]
    async fn test_register_checks_username_first() {
        let store = AuthStore::new(adapter(), Duration::ZERO);

        let err = store.register(" ", "bad", "1").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError { ref field, .. } if field == "username"));

        let user = store.register("Morpheus", "m@zion.io", "redpill").await.unwrap();
        assert_eq!(user.username, "Morpheus");
        assert_eq!(store.last_error(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_persisted_user() {
        let persistence = adapter();
        let store = AuthStore::new(persistence.clone(), Duration::ZERO);
        store.login("neo@matrix.io", "secret1").await.unwrap();

        store.logout();

        assert_eq!(store.state(), AuthState::Anonymous);
        assert!(persistence.load::<User>(StorageKey::User).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_delays_login() {
        let store = AuthStore::new(adapter(), Duration::from_millis(800));
        let started = tokio::time::Instant::now();

        store.login("neo@matrix.io", "secret1").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}
