use anyhow::Context;
use dotenvy::dotenv;
use quill_service::{
    app_module::AppState,
    app_router::build_app,
    config::{AppConfig, Environment},
};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let environment = match std::env::var("APP_ENVIRONMENT").as_deref() {
        Ok("dev") | Err(_) => Environment::Dev,
        Ok(_) => Environment::Prod,
    };
    init_tracing(environment)?;

    let config = AppConfig::from_env().context("failed to load configuration")?;
    tracing::info!(
        model = %config.gemini.model,
        fact_check_timeout = ?config.search.timeout,
        "Configuration loaded"
    );

    let state = AppState::new(&config);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("unable to bind {}", config.bind_address))?;

    tracing::info!("Server started, listening on {}", config.bind_address);
    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}

fn init_tracing(environment: Environment) -> anyhow::Result<()> {
    let subscriber_builder = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quill_service=info,quill_llm=info,tower_http=info")),
        )
        .with_level(true)
        .with_span_events(FmtSpan::CLOSE);

    match environment {
        Environment::Dev => tracing::subscriber::set_global_default(
            subscriber_builder
                .compact()
                .pretty()
                .with_ansi(true)
                .finish(),
        )
        .context("setting dev subscriber failed"),
        Environment::Prod => tracing::subscriber::set_global_default(
            subscriber_builder.json().with_ansi(false).finish(),
        )
        .context("setting prod subscriber failed"),
    }
}
