use super::repository;
use contracts::domain::a002_quote::aggregate::{Quote, QuoteDto};
use uuid::Uuid;

pub async fn create(dto: QuoteDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("QTE-{}", Uuid::new_v4()));
    let mut aggregate = Quote::new_for_insert(
        code,
        dto.description,
        dto.client_ref,
        dto.event_date,
        dto.venue.unwrap_or_default(),
        dto.guest_count,
        dto.service_kind.unwrap_or_default(),
        dto.estimated_price.unwrap_or_default(),
        dto.comment,
    );

    let today = chrono::Utc::now().date_naive();
    aggregate
        .validate_new(today)
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: QuoteDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Quote>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Quote>> {
    repository::list_all().await
}
