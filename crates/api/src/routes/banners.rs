use axum::{extract::State, http::StatusCode, routing::get, Router};
use convene_common::catalog_now;
use convene_runtime::featured_five_star_ids;
use serde_json::json;

use crate::response::{AppError, AppSuccess};
use crate::GlobalState;

pub fn banner_routes() -> Router<GlobalState> {
    Router::new()
        .route("/banners/featured-ids", get(get_featured_five_star_ids))
}

async fn get_featured_five_star_ids(
    State(state): State<GlobalState>,
) -> Result<AppSuccess, AppError> {
    let banners = state.catalog.current_banners(catalog_now()).await
        .map_err(|e| AppError::new(StatusCode::SERVICE_UNAVAILABLE, e))?;
    let ids = featured_five_star_ids(&banners);

    Ok(AppSuccess::new(
        StatusCode::OK,
        "Featured 5-star ids fetched successfully",
        json!(ids)
    ))
}
