use crate::domain::{a002_quote, a003_event};
use anyhow::Result;
use contracts::enums::QuoteStatus;
use contracts::usecases::u501_convert_quote::{
    error::ConvertQuoteError,
    request::ConvertQuoteRequest,
    response::{ConvertQuoteResponse, ConvertStatus},
};
use uuid::Uuid;

/// Convert an accepted quote into a confirmed event.
///
/// A quote in a terminal status (rejected or already converted) can never be
/// converted. A quote that is still New/Sent converts only when `force` is
/// set. On success the quote is marked Converted and keeps a back-reference
/// from the created event.
pub async fn execute(request: ConvertQuoteRequest) -> Result<ConvertQuoteResponse> {
    tracing::info!("Converting quote {} into an event", request.quote_id);

    let quote_id = Uuid::parse_str(&request.quote_id)
        .map_err(|_| ConvertQuoteError::InvalidQuoteId(request.quote_id.clone()))?;

    let mut quote = a002_quote::repository::get_by_id(quote_id)
        .await?
        .ok_or_else(|| ConvertQuoteError::QuoteNotFound(request.quote_id.clone()))?;

    if quote.status.is_terminal() {
        return Ok(ConvertQuoteResponse {
            event_id: None,
            quote_id: request.quote_id,
            status: ConvertStatus::Rejected,
            message: format!("Quote is already {}", quote.status),
        });
    }
    if quote.status != QuoteStatus::Accepted && !request.force {
        return Ok(ConvertQuoteResponse {
            event_id: None,
            quote_id: request.quote_id,
            status: ConvertStatus::Rejected,
            message: format!("Quote is {}, not accepted; pass force to convert anyway", quote.status),
        });
    }

    let event_date = request.event_date.unwrap_or_else(|| quote.event_date.clone());
    let venue = request.venue.unwrap_or_else(|| quote.venue.clone());
    let price = request.agreed_price.unwrap_or(quote.estimated_price);

    let mut event = contracts::domain::a003_event::aggregate::Event::new_for_insert(
        format!("EVT-{}", Uuid::new_v4()),
        quote.base.description.clone(),
        quote.client_ref.clone(),
        Some(quote.to_string_id()),
        event_date,
        venue,
        quote.guest_count,
        price,
        quote.base.comment.clone(),
    );

    event
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    event.before_write();
    let event_id = a003_event::repository::insert(&event).await?;

    quote.status = QuoteStatus::Converted;
    quote.before_write();
    a002_quote::repository::update(&quote).await?;

    tracing::info!("Quote {} converted into event {}", quote_id, event_id);

    Ok(ConvertQuoteResponse {
        event_id: Some(event_id.to_string()),
        quote_id: request.quote_id,
        status: ConvertStatus::Converted,
        message: "Quote converted".into(),
    })
}
