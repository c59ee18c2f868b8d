use actix_web::{web, HttpServer};
use anyhow::Context;
use bd_api::{
    create_app,
    telemetry::{init_tracing, report_settings},
    AppState,
};
use bd_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load settings (.env, config/*.toml, environment)
    let config = AppConfig::from_env().context("failed to load settings")?;

    init_tracing(&config.logging);
    report_settings(&config);

    tracing::info!(environment = %config.environment, "Starting Bearer Demo API");

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;

    let state = AppState::from_config(config).context("failed to initialize services")?;
    let state = web::Data::new(state);

    tracing::info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")?;

    Ok(())
}
