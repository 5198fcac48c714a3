use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use convene_common::EnvVars;
use convene_service_api::{
    banner_routes, gacha_routes, misc_routes, setup_tracing, ApiServerEnv, GlobalState
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    let env = ApiServerEnv::load()?;
    let global_state = GlobalState::from_env(&env).await?;

    let cors = CorsLayer::very_permissive();
    let trace = TraceLayer::new_for_http();
    let timeout = TimeoutLayer::new(Duration::from_secs(30));

    let app = Router::new()
        .merge(gacha_routes())
        .merge(banner_routes())
        .merge(misc_routes())
        .layer(cors)
        .layer(trace)
        .layer(timeout)
        .with_state(global_state);

    let listener = tokio::net::TcpListener::bind(format!(":::{}", env.port)).await?;

    tracing::info!("LISTENING ON {}", env.port);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
