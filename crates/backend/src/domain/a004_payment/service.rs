use super::repository;
use crate::domain::a003_event;
use contracts::domain::a004_payment::aggregate::{Payment, PaymentDto};
use contracts::enums::PaymentMethod;
use uuid::Uuid;

pub async fn create(dto: PaymentDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("PAY-{}", Uuid::new_v4()));
    let mut aggregate = Payment::new_for_insert(
        code,
        dto.description,
        dto.event_ref,
        dto.amount,
        dto.payment_date,
        dto.method.unwrap_or(PaymentMethod::Cash),
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    // The referenced event must exist
    let event_id = Uuid::parse_str(&aggregate.event_ref)
        .map_err(|_| anyhow::anyhow!("Invalid event reference: {}", aggregate.event_ref))?;
    if a003_event::repository::get_by_id(event_id).await?.is_none() {
        anyhow::bail!("Event not found: {}", event_id);
    }

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: PaymentDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Payment>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Payment>> {
    repository::list_all().await
}
