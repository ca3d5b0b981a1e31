use anyhow::Context;
use redressal_backend::infrastructure::{telemetry, AppConfig, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("loading configuration")?;
    telemetry::init(&config);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "redressal starting");

    let context = AppContext::from_config(&config)
        .await
        .context("connecting to the backend store")?;

    let session = context.gate.restore().await;
    let graph = context.gate.root_screen_graph().await;
    match session.identity() {
        Some(identity) => tracing::info!(
            identity_id = %identity.id(),
            role = %identity.role(),
            ?graph,
            "session restored"
        ),
        None => tracing::info!(?graph, "no session, showing sign-in"),
    }

    Ok(())
}
