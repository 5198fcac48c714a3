use axum::{
    extract::State, http::StatusCode, routing::{get, post}, Json, Router
};
use convene_runtime::{perform_gacha, GachaRequest};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use serde_json::json;

use crate::response::{AppError, AppSuccess};
use crate::GlobalState;

pub fn gacha_routes() -> Router<GlobalState> {
    Router::new()
        .route("/gacha", post(roll))
        .route("/gacha/rates", get(get_rates))
}

async fn roll(
    State(state): State<GlobalState>,
    Json(payload): Json<GachaRequest>,
) -> Result<AppSuccess, AppError> {
    let mut rng = match payload.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let batch = perform_gacha(&state.engine, state.catalog.as_ref(), &payload, &mut rng).await
        .map_err(AppError::from_gacha)?;

    Ok(AppSuccess::new(
        StatusCode::OK,
        "Gacha rolled successfully",
        json!(batch)
    ))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CurvePoint {
    pity: u32,
    rate: f64,
}

async fn get_rates(
    State(state): State<GlobalState>,
) -> Result<AppSuccess, AppError> {
    let rates = state.engine.rates();
    let curve = rates.five_star_curve()
        .into_iter()
        .map(|(pity, rate)| CurvePoint { pity, rate })
        .collect::<Vec<_>>();

    Ok(AppSuccess::new(
        StatusCode::OK,
        "Gacha rates fetched successfully",
        json!({
            "rates": rates,
            "fiveStarCurve": curve,
        })
    ))
}
