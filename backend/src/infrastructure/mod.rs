// Infrastructure layer - external concerns (database, auth, config, logging)
// Implements interfaces defined in application layer

pub mod bootstrap;
pub mod config;
pub mod driven;
pub mod telemetry;

pub use bootstrap::AppContext;
pub use config::{AppConfig, LogFormat};
