use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a003_event;

/// GET /api/event
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a003_event::aggregate::Event>>, axum::http::StatusCode> {
    match a003_event::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/event/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a003_event::aggregate::Event>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a003_event::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/event
pub async fn upsert(
    Json(dto): Json<contracts::domain::a003_event::aggregate::EventDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a003_event::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a003_event::service::create(dto).await.map(|id| id.to_string())
    };

    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::warn!("Upsert failed: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/event/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a003_event::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[derive(serde::Deserialize)]
pub struct CalendarQuery {
    pub year: i32,
    pub month: u32,
}

/// GET /api/event/calendar?year=&month=
pub async fn calendar(
    axum::extract::Query(query): axum::extract::Query<CalendarQuery>,
) -> Result<Json<Vec<a003_event::service::CalendarDay>>, axum::http::StatusCode> {
    match a003_event::service::calendar_month(query.year, query.month).await {
        Ok(days) => Ok(Json(days)),
        Err(e) => {
            tracing::warn!("Calendar query failed: {}", e);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
    }
}

/// GET /api/event/:id/balance
pub async fn balance(
    Path(id): Path<String>,
) -> Result<Json<a003_event::service::EventBalance>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a003_event::service::balance(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
