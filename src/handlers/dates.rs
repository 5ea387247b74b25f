use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

use crate::models::DatePayload;
use crate::utils::error::{AppError, Result};
use crate::utils::response::{no_content, resource};
use crate::AppState;

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("invalid id '{}'", raw)))
}

fn parse_body(body: std::result::Result<Json<DatePayload>, JsonRejection>) -> Result<DatePayload> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| AppError::validation(rejection.body_text()))
}

pub async fn list_dates(State(state): State<AppState>) -> Result<Response> {
    let dates = state.dates.list_dates().await?;
    Ok(resource(StatusCode::OK, dates))
}

pub async fn get_date(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let date = state.dates.get_date(parse_id(&id)?).await?;
    Ok(resource(StatusCode::OK, date))
}

/// Responds with the record as the insert stored it, `id` and `created_at`
/// included.
pub async fn create_date(
    State(state): State<AppState>,
    body: std::result::Result<Json<DatePayload>, JsonRejection>,
) -> Result<Response> {
    let event = parse_body(body)?.into_event(0)?;
    let created = state.dates.create_date(&event).await?;
    Ok(resource(StatusCode::CREATED, created))
}

pub async fn update_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<DatePayload>, JsonRejection>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let event = parse_body(body)?.into_event(id)?;
    state.dates.update_date(&event).await?;
    Ok(no_content())
}

pub async fn delete_date(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    state.dates.delete_date(parse_id(&id)?).await?;
    Ok(no_content())
}
