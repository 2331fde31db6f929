use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use yana_core::JudgeService;
use yana_server::generator::{FlowGenerator, HttpGenerator, TemplateGenerator};
use yana_server::settings::Settings;
use yana_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env();
    let judge = JudgeService::from_env()?;

    let generator: Arc<dyn FlowGenerator> = match &settings.generator_url {
        Some(url) => {
            info!(%url, "using external flow generator");
            Arc::new(HttpGenerator::new(
                url.clone(),
                settings.generator_timeout_secs,
            )?)
        }
        None => {
            info!("no FLOW_GENERATOR_URL set, using the template generator");
            Arc::new(TemplateGenerator)
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let judge_model = judge.model_name().unwrap_or("rule-based").to_string();
    let app = yana_server::app(AppState::new(settings, judge, generator));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, judge_model, "yana-server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
