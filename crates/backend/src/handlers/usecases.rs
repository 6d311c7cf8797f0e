use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::usecases::{u501_convert_quote, u502_shopping_list};
use contracts::usecases::u501_convert_quote::error::ConvertQuoteError;
use contracts::usecases::u501_convert_quote::request::ConvertQuoteRequest;
use contracts::usecases::u501_convert_quote::response::ConvertQuoteResponse;
use contracts::usecases::u502_shopping_list::error::ShoppingListError;
use contracts::usecases::u502_shopping_list::request::ShoppingListRequest;
use contracts::usecases::u502_shopping_list::response::ShoppingListResponse;

/// Map a quote-conversion failure to a response status. Missing quote is 404,
/// a malformed request is 400, anything untyped (DB failure) is 500.
fn convert_quote_status(e: &anyhow::Error) -> StatusCode {
    match e.downcast_ref::<ConvertQuoteError>() {
        Some(ConvertQuoteError::QuoteNotFound(_)) => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::BAD_REQUEST,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a shopping-list failure to a response status. Missing event is 404,
/// any other typed error (bad input, calculator rejection) is 400, anything
/// untyped (DB failure) is 500.
fn shopping_list_status(e: &anyhow::Error) -> StatusCode {
    match e.downcast_ref::<ShoppingListError>() {
        Some(ShoppingListError::EventNotFound(_)) => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::BAD_REQUEST,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// POST /api/u501/convert-quote
pub async fn convert_quote(
    Json(request): Json<ConvertQuoteRequest>,
) -> Result<Json<ConvertQuoteResponse>, StatusCode> {
    match u501_convert_quote::executor::execute(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!("Quote conversion failed: {}", e);
            Err(convert_quote_status(&e))
        }
    }
}

/// POST /api/u502/shopping-list
pub async fn shopping_list(
    Json(request): Json<ShoppingListRequest>,
) -> Result<Json<ShoppingListResponse>, StatusCode> {
    match u502_shopping_list::executor::execute(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!("Shopping list failed: {}", e);
            Err(shopping_list_status(&e))
        }
    }
}

/// POST /api/u502/shopping-list/export (CSV download)
pub async fn shopping_list_export(
    Json(request): Json<ShoppingListRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    let response = match u502_shopping_list::executor::execute(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Shopping list failed: {}", e);
            return Err(shopping_list_status(&e));
        }
    };
    let csv = u502_shopping_list::executor::render_csv(&response)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"shopping_list.csv\"",
            ),
        ],
        csv,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_quote_maps_to_not_found() {
        let e = anyhow::Error::from(ConvertQuoteError::QuoteNotFound("abc".to_string()));
        assert_eq!(convert_quote_status(&e), StatusCode::NOT_FOUND);
    }

    #[test]
    fn malformed_quote_id_maps_to_bad_request() {
        let e = anyhow::Error::from(ConvertQuoteError::InvalidQuoteId("not-a-uuid".to_string()));
        assert_eq!(convert_quote_status(&e), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn untyped_conversion_failure_maps_to_internal_error() {
        let e = anyhow::anyhow!("connection reset");
        assert_eq!(convert_quote_status(&e), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_event_maps_to_not_found() {
        let e = anyhow::Error::from(ShoppingListError::EventNotFound("abc".to_string()));
        assert_eq!(shopping_list_status(&e), StatusCode::NOT_FOUND);
    }

    #[test]
    fn calculator_rejection_maps_to_bad_request() {
        let e = anyhow::Error::from(ShoppingListError::InvalidDistribution { sum: 80.0 });
        assert_eq!(shopping_list_status(&e), StatusCode::BAD_REQUEST);

        let e = anyhow::Error::from(ShoppingListError::MissingGuestCount);
        assert_eq!(shopping_list_status(&e), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn untyped_shopping_list_failure_maps_to_internal_error() {
        let e = anyhow::anyhow!("connection reset");
        assert_eq!(shopping_list_status(&e), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
