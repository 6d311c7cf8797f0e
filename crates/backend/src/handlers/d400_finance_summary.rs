use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;

use crate::dashboards::d400_finance_summary;
use contracts::dashboards::d400_finance_summary::dto::{
    FinanceSummaryRequest, FinanceSummaryResponse,
};

/// GET /api/d400/finance-summary?year=&month=
///
/// An out-of-range month is a client error; anything the service fails on
/// past that point is a server error.
pub async fn finance_summary(
    Query(request): Query<FinanceSummaryRequest>,
) -> Result<Json<FinanceSummaryResponse>, StatusCode> {
    if !(1..=12).contains(&request.month) {
        return Err(StatusCode::BAD_REQUEST);
    }
    match d400_finance_summary::service::get_finance_summary(request.year, request.month).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!("Finance summary failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn out_of_range_month_is_bad_request() {
        let request = FinanceSummaryRequest {
            year: 2026,
            month: 0,
        };
        let result = finance_summary(Query(request)).await;
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));

        let request = FinanceSummaryRequest {
            year: 2026,
            month: 13,
        };
        let result = finance_summary(Query(request)).await;
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    }
}
