use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::application::ports::{AuthBackend, AuthError, AuthSession};
use crate::domain::{AuthUser, Email, IdentityId};
use crate::infrastructure::driven::password::{hash_password, new_session_token, verify_password};

struct Account {
    id: IdentityId,
    password_hash: String,
}

/// Email/password auth held in process memory. Like a hosted auth client,
/// `sign_up` leaves the new user signed in.
pub struct InMemoryAuthBackend {
    accounts: RwLock<HashMap<Email, Account>>,
    current: RwLock<Option<AuthSession>>,
    session_ttl: Duration,
}

impl InMemoryAuthBackend {
    pub fn new(session_ttl: Duration) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            current: RwLock::new(None),
            session_ttl,
        }
    }

    fn open_session(&self, user: AuthUser) -> AuthSession {
        AuthSession {
            token: new_session_token(),
            user,
            expires_at: Utc::now() + self.session_ttl,
        }
    }
}

#[async_trait]
impl AuthBackend for InMemoryAuthBackend {
    async fn sign_in(&self, email: &Email, password: &str) -> Result<AuthSession, AuthError> {
        let user = {
            let accounts = self.accounts.read().await;
            let account = accounts.get(email).ok_or(AuthError::InvalidCredentials)?;
            if !verify_password(password, &account.password_hash) {
                return Err(AuthError::InvalidCredentials);
            }
            AuthUser {
                id: account.id,
                email: email.clone(),
            }
        };
        let session = self.open_session(user);
        *self.current.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, email: &Email, password: &str) -> Result<AuthUser, AuthError> {
        let password_hash = hash_password(password)?;
        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(email) {
                return Err(AuthError::EmailTaken);
            }
            let id = IdentityId::new();
            accounts.insert(email.clone(), Account { id, password_hash });
            AuthUser {
                id,
                email: email.clone(),
            }
        };
        *self.current.write().await = Some(self.open_session(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.current.write().await.take();
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        Ok(self
            .current
            .read()
            .await
            .as_ref()
            .filter(|s| s.expires_at > Utc::now())
            .map(|s| s.user.clone()))
    }

    async fn update_password(&self, new_password: &str) -> Result<(), AuthError> {
        let user = self.current_user().await?.ok_or(AuthError::NotSignedIn)?;
        let password_hash = hash_password(new_password)?;
        if let Some(account) = self.accounts.write().await.get_mut(&user.email) {
            account.password_hash = password_hash;
        }
        Ok(())
    }
}
