// Wiring of ports to adapters at app launch

use chrono::Duration;
use std::sync::Arc;

use crate::application::ports::{AuthBackend, ComplaintRepository, IdentityRepository, StoreError};
use crate::application::{ComplaintLifecycle, SessionRoleGate};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::driven::{
    persistence, InMemoryAuthBackend, InMemoryComplaintRepository, InMemoryIdentityRepository,
    PostgresAuthBackend, PostgresComplaintRepository, PostgresIdentityRepository,
};

#[derive(Clone)]
pub struct AppContext {
    pub identities: Arc<dyn IdentityRepository>,
    pub complaints: Arc<dyn ComplaintRepository>,
    pub auth: Arc<dyn AuthBackend>,
    pub gate: Arc<SessionRoleGate>,
    pub lifecycle: ComplaintLifecycle,
}

impl AppContext {
    pub fn from_adapters(
        identities: Arc<dyn IdentityRepository>,
        complaints: Arc<dyn ComplaintRepository>,
        auth: Arc<dyn AuthBackend>,
    ) -> Self {
        let gate = Arc::new(SessionRoleGate::new(auth.clone(), identities.clone()));
        let lifecycle = ComplaintLifecycle::new(complaints.clone(), identities.clone());
        Self {
            identities,
            complaints,
            auth,
            gate,
            lifecycle,
        }
    }

    /// Everything in process memory; nothing survives a restart.
    pub fn in_memory(session_ttl: Duration) -> Self {
        Self::from_adapters(
            Arc::new(InMemoryIdentityRepository::new()),
            Arc::new(InMemoryComplaintRepository::new()),
            Arc::new(InMemoryAuthBackend::new(session_ttl)),
        )
    }

    pub async fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let session_ttl = Duration::hours(config.session_ttl_hours);
        let Some(database_url) = config.database_url.as_deref().filter(|_| config.uses_database())
        else {
            tracing::warn!("no database_url configured, using in-memory store");
            return Ok(Self::in_memory(session_ttl));
        };

        let pool = persistence::connect(database_url, config.max_connections).await?;
        tracing::info!(max_connections = config.max_connections, "connected to postgres");
        let auth = PostgresAuthBackend::new(pool.clone(), session_ttl)
            .with_token(config.restore_session_token.clone());
        Ok(Self::from_adapters(
            Arc::new(PostgresIdentityRepository::new(pool.clone())),
            Arc::new(PostgresComplaintRepository::new(pool)),
            Arc::new(auth),
        ))
    }
}
