use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::db_error;
use crate::application::ports::{AuthBackend, AuthError, AuthSession, StoreError};
use crate::domain::{AuthUser, Email, IdentityId};
use crate::infrastructure::driven::password::{hash_password, new_session_token, verify_password};

/// Email/password auth over the `auth_users` and `auth_sessions` tables.
///
/// The adapter plays the client side too: it remembers the token of the
/// session it opened, the way a mobile auth SDK keeps it in local storage.
pub struct PostgresAuthBackend {
    pool: PgPool,
    current_token: RwLock<Option<String>>,
    session_ttl: Duration,
}

impl PostgresAuthBackend {
    pub fn new(pool: PgPool, session_ttl: Duration) -> Self {
        Self {
            pool,
            current_token: RwLock::new(None),
            session_ttl,
        }
    }

    /// Resume a session token persisted by an earlier run.
    pub fn with_token(self, token: Option<String>) -> Self {
        Self {
            current_token: RwLock::new(token),
            ..self
        }
    }

    async fn open_session(&self, user: AuthUser) -> Result<AuthSession, AuthError> {
        let token = new_session_token();
        let expires_at: DateTime<Utc> = Utc::now() + self.session_ttl;
        sqlx::query("INSERT INTO auth_sessions (token, user_id, expires_at) VALUES ($1, $2, $3)")
            .bind(&token)
            .bind(user.id.as_uuid())
            .bind(expires_at)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        *self.current_token.write().await = Some(token.clone());
        Ok(AuthSession {
            token,
            user,
            expires_at,
        })
    }
}

fn decode_user(id: Uuid, email: String) -> Result<AuthUser, AuthError> {
    let email = Email::from_persistence(email).map_err(|e| {
        StoreError::Corrupt(format!("auth user {} has an invalid email: {}", id, e))
    })?;
    Ok(AuthUser {
        id: IdentityId::from_uuid(id),
        email,
    })
}

#[async_trait]
impl AuthBackend for PostgresAuthBackend {
    async fn sign_in(&self, email: &Email, password: &str) -> Result<AuthSession, AuthError> {
        let row: Option<(Uuid, String)> =
            sqlx::query_as("SELECT id, password_hash FROM auth_users WHERE email = $1")
                .bind(email.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        let (id, password_hash) = row.ok_or(AuthError::InvalidCredentials)?;
        if !verify_password(password, &password_hash) {
            return Err(AuthError::InvalidCredentials);
        }
        self.open_session(AuthUser {
            id: IdentityId::from_uuid(id),
            email: email.clone(),
        })
        .await
    }

    async fn sign_up(&self, email: &Email, password: &str) -> Result<AuthUser, AuthError> {
        let id = IdentityId::new();
        let password_hash = hash_password(password)?;
        let inserted = sqlx::query("INSERT INTO auth_users (id, email, password_hash) VALUES ($1, $2, $3)")
            .bind(id.as_uuid())
            .bind(email.as_str())
            .bind(&password_hash)
            .execute(&self.pool)
            .await;
        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(AuthError::EmailTaken)
            }
            Err(e) => return Err(db_error(e).into()),
        }

        let user = AuthUser {
            id,
            email: email.clone(),
        };
        self.open_session(user.clone()).await?;
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(token) = self.current_token.read().await.clone() else {
            return Ok(());
        };
        sqlx::query("DELETE FROM auth_sessions WHERE token = $1")
            .bind(&token)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        // A sign-in may have replaced the token while the delete ran.
        let mut current = self.current_token.write().await;
        if current.as_deref() == Some(token.as_str()) {
            *current = None;
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        let Some(token) = self.current_token.read().await.clone() else {
            return Ok(None);
        };
        let row: Option<(Uuid, String)> = sqlx::query_as(
            "SELECT u.id, u.email
             FROM auth_sessions s
             JOIN auth_users u ON u.id = s.user_id
             WHERE s.token = $1 AND s.expires_at > NOW()",
        )
        .bind(&token)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        match row {
            Some((id, email)) => decode_user(id, email).map(Some),
            None => {
                tracing::debug!("stored session token is expired or unknown");
                Ok(None)
            }
        }
    }

    async fn update_password(&self, new_password: &str) -> Result<(), AuthError> {
        let user = self.current_user().await?.ok_or(AuthError::NotSignedIn)?;
        let password_hash = hash_password(new_password)?;
        sqlx::query("UPDATE auth_users SET password_hash = $1, updated_at = NOW() WHERE id = $2")
            .bind(&password_hash)
            .bind(user.id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn unreachable_backend(token: &str) -> PostgresAuthBackend {
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy("postgres://redressal@127.0.0.1:1/redressal")
            .unwrap();
        PostgresAuthBackend::new(pool, Duration::hours(1)).with_token(Some(token.to_string()))
    }

    #[tokio::test]
    async fn failed_sign_out_keeps_the_token_for_a_retry() {
        let backend = unreachable_backend("tok-1");

        let err = backend.sign_out().await.unwrap_err();
        assert!(matches!(err, AuthError::Backend(StoreError::Unavailable(_))));
        assert_eq!(backend.current_token.read().await.as_deref(), Some("tok-1"));

        assert!(backend.sign_out().await.is_err());
        assert_eq!(backend.current_token.read().await.as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn sign_out_without_a_token_is_a_no_op() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://redressal@127.0.0.1:1/redressal")
            .unwrap();
        let backend = PostgresAuthBackend::new(pool, Duration::hours(1));
        assert!(backend.sign_out().await.is_ok());
    }

    #[test]
    fn stored_email_outside_form_rules_decodes() {
        let user = decode_user(Uuid::new_v4(), "Ops@Hostel".into()).unwrap();
        assert_eq!(user.email.as_str(), "ops@hostel");
    }
}
