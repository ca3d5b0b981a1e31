// SessionRoleGate - decides which screen graph the current user may see
//
// The session value lives here and nowhere else. Every transition replaces it
// wholesale under the write lock.

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::application::error::{AppError, AppResult};
use crate::application::ports::{AuthBackend, IdentityRepository, StoreError};
use crate::domain::session::{resolve_explained, ResolveFallback};
use crate::domain::{
    select_root_screen_graph, AuthUser, DisplayName, Email, Identity, RawAuthState, ScreenGraphId,
    Session, UserRole, ValidationErrors,
};

pub struct SessionRoleGate {
    auth: Arc<dyn AuthBackend>,
    identities: Arc<dyn IdentityRepository>,
    session: RwLock<Session>,
}

impl SessionRoleGate {
    pub fn new(auth: Arc<dyn AuthBackend>, identities: Arc<dyn IdentityRepository>) -> Self {
        Self {
            auth,
            identities,
            session: RwLock::new(Session::Unauthenticated),
        }
    }

    /// App launch: adopt whatever session the auth collaborator reports.
    /// Any failure along the way lands on `Unauthenticated`.
    pub async fn restore(&self) -> Session {
        let session = match self.auth.current_user().await {
            Ok(None) => Session::Unauthenticated,
            Ok(Some(user)) => match self.identities.find_by_id(&user.id).await {
                Ok(profile) => self.project(user, profile),
                Err(e) => {
                    log_store_failure(&e, "profile lookup failed during restore");
                    Session::Unauthenticated
                }
            },
            Err(e) => {
                warn!(error = %e, "could not read current auth user, starting signed out");
                Session::Unauthenticated
            }
        };
        self.replace(session.clone()).await;
        session
    }

    /// Credential check followed by profile lookup. The role always comes from
    /// the stored profile; `requested_role` is the login tab and only checked.
    pub async fn sign_in(
        &self,
        email: &str,
        password: &str,
        requested_role: Option<UserRole>,
    ) -> AppResult<Session> {
        let mut errors = ValidationErrors::new();
        let email = errors.collect(Email::new(email));
        if password.is_empty() {
            errors.add("password", "Password is required");
        }
        errors.into_result()?;
        let Some(email) = email else {
            return Err(AppError::AuthenticationFailed("invalid email".to_string()));
        };

        let auth_session = self.auth.sign_in(&email, password).await?;
        let user = auth_session.user;

        let profile = match self.identities.find_by_id(&user.id).await {
            Ok(profile) => profile,
            Err(e) => {
                log_store_failure(&e, "profile lookup failed during sign-in");
                self.abandon_remote_session().await;
                self.replace(Session::Unauthenticated).await;
                return Err(e.into());
            }
        };

        let session = self.project(user, profile);
        let Some(role) = session.role() else {
            self.abandon_remote_session().await;
            self.replace(Session::Unauthenticated).await;
            return Err(AppError::AuthenticationFailed(
                "no profile is registered for this account".to_string(),
            ));
        };

        if let Some(requested) = requested_role.filter(|r| *r != role) {
            warn!(
                email = %email,
                requested = %requested,
                stored = %role,
                "login role tab does not match stored role, routing by stored role"
            );
        }

        info!(email = %email, role = %role, "signed in");
        self.replace(session.clone()).await;
        Ok(session)
    }

    /// Clears the local session first, then invalidates the remote one.
    /// Calling it while signed out is harmless.
    pub async fn sign_out(&self) -> AppResult<()> {
        let previous = self.replace(Session::Unauthenticated).await;
        self.auth.sign_out().await?;
        if let Some(identity) = previous.identity() {
            info!(identity_id = %identity.id(), "signed out");
        }
        Ok(())
    }

    pub async fn current(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn root_screen_graph(&self) -> ScreenGraphId {
        select_root_screen_graph(&*self.session.read().await)
    }

    /// The only way the signed-in profile changes. Persists the new name, then
    /// swaps in a freshly resolved session.
    pub async fn update_display_name(&self, name: &str) -> AppResult<Session> {
        let display_name = DisplayName::new(name)?;
        let mut identity = self
            .current()
            .await
            .identity()
            .cloned()
            .ok_or_else(|| AppError::AuthenticationFailed("not signed in".to_string()))?;

        self.identities
            .update_display_name(identity.id(), &display_name)
            .await?;
        identity.rename(display_name);

        let mut session = self.session.write().await;
        if session.identity().map(Identity::id) != Some(identity.id()) {
            debug!(identity_id = %identity.id(), "session changed during rename, keeping it");
            return Ok(session.clone());
        }
        *session = self.project(
            AuthUser {
                id: *identity.id(),
                email: identity.email().clone(),
            },
            Some(identity),
        );
        info!("display name updated");
        Ok(session.clone())
    }

    fn project(&self, user: AuthUser, profile: Option<Identity>) -> Session {
        let user_id = user.id;
        let (session, fallback) = resolve_explained(RawAuthState {
            user: Some(user),
            profile,
        });
        match fallback {
            Some(ResolveFallback::MissingProfile) => {
                warn!(user_id = %user_id, "auth user has no profile record")
            }
            Some(ResolveFallback::ProfileMismatch) => {
                error!(user_id = %user_id, "profile lookup returned a different identity")
            }
            None => {}
        }
        session
    }

    /// Stores `next` and hands back the session it replaced.
    async fn replace(&self, next: Session) -> Session {
        let graph = select_root_screen_graph(&next);
        let previous = std::mem::replace(&mut *self.session.write().await, next);
        debug!(?graph, "session replaced");
        previous
    }

    async fn abandon_remote_session(&self) {
        if let Err(e) = self.auth.sign_out().await {
            warn!(error = %e, "could not drop remote session");
        }
    }
}

fn log_store_failure(e: &StoreError, context: &str) {
    match e {
        StoreError::Corrupt(detail) => error!(detail = %detail, "{context}"),
        StoreError::Unavailable(detail) => warn!(detail = %detail, "{context}"),
    }
}
