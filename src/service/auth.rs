//! Stubbed authentication session.
//!
//! There is no credential check: [`AuthSession::login`] signs in the
//! configured demo user. The session is shared by every request, matching a
//! single-user front end.

use tokio::sync::RwLock;

use crate::domain::User;
use crate::error::MarketError;

/// The current sign-in state.
#[derive(Debug)]
pub struct AuthSession {
    demo_user: User,
    current: RwLock<Option<User>>,
}

impl AuthSession {
    /// Creates a signed-out session that will sign in as `demo_user`.
    #[must_use]
    pub fn new(demo_user: User) -> Self {
        Self {
            demo_user,
            current: RwLock::new(None),
        }
    }

    /// Signs in the demo user and returns it. Idempotent.
    pub async fn login(&self) -> User {
        let mut current = self.current.write().await;
        let user = current.get_or_insert_with(|| self.demo_user.clone()).clone();
        tracing::info!(user_id = %user.id, "session signed in");
        user
    }

    /// Signs out. Idempotent.
    pub async fn logout(&self) {
        if let Some(user) = self.current.write().await.take() {
            tracing::info!(user_id = %user.id, "session signed out");
        }
    }

    /// Returns the signed-in user, if any.
    pub async fn user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Returns `true` if a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Returns the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::AuthenticationRequired`] when signed out.
    pub async fn require_user(&self) -> Result<User, MarketError> {
        self.user().await.ok_or(MarketError::AuthenticationRequired)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::Utc;

    use super::*;

    /// The demo user used across service tests.
    pub(crate) fn demo_user() -> User {
        let now = Utc::now();
        User {
            id: "user-1".to_string(),
            email: "trader@quantumx.exchange".to_string(),
            display_name: Some("Quantum Trader".to_string()),
            wallet_address: Some("cosmos1demo".to_string()),
            is_verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// A signed-out session for the demo user.
    pub(crate) fn session() -> AuthSession {
        AuthSession::new(demo_user())
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::session;
    use super::*;

    #[tokio::test]
    async fn starts_signed_out() {
        let auth = session();
        assert!(!auth.is_authenticated().await);
        assert_eq!(
            auth.require_user().await,
            Err(MarketError::AuthenticationRequired)
        );
    }

    #[tokio::test]
    async fn login_then_logout() {
        let auth = session();
        let user = auth.login().await;
        assert_eq!(user.id, "user-1");
        assert!(auth.is_authenticated().await);
        assert_eq!(auth.login().await, user);

        auth.logout().await;
        assert!(auth.user().await.is_none());
    }
}
