use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use convene_runtime::GachaError;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type AppSuccess = GenericResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericResponse {
    pub status: u16,
    pub message: String,
    pub data: serde_json::Value,
}

impl GenericResponse {
    pub fn new(status: StatusCode, message: &str, data: serde_json::Value) -> Self {
        Self {
            status: status.as_u16(),
            message: message.to_string(),
            data,
        }
    }
}

impl IntoResponse for GenericResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json::from(self)).into_response()
    }
}

#[derive(Debug)]
pub struct AppError(pub StatusCode, pub anyhow::Error);
impl AppError {
    pub fn new(status: StatusCode, err: anyhow::Error) -> Self {
        Self(status, err)
    }

    /// Caller mistakes are 4xx; catalog defects and outages are 5xx.
    pub fn from_gacha(err: GachaError) -> Self {
        let status = match &err {
            GachaError::InvalidCount(_) => StatusCode::BAD_REQUEST,
            GachaError::UnknownBanner(_) => StatusCode::NOT_FOUND,
            GachaError::PoolExhausted(_) | GachaError::InvalidBanner(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GachaError::Catalog(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self(status, err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("CODE: {}, MESSAGE: {}", self.0.as_u16(), self.1);
        GenericResponse::new(self.0, &self.1.to_string(), json!({})).into_response()
    }
}

// `?` on anything convertible to `anyhow::Error` becomes a 400.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(StatusCode::BAD_REQUEST, err.into())
    }
}
