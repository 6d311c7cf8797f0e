use super::repository;
use contracts::domain::a005_expense::aggregate::{Expense, ExpenseDto};
use contracts::enums::ExpenseCategory;
use uuid::Uuid;

pub async fn create(dto: ExpenseDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("EXP-{}", Uuid::new_v4()));
    let mut aggregate = Expense::new_for_insert(
        code,
        dto.description,
        dto.event_ref,
        dto.category.unwrap_or(ExpenseCategory::Other),
        dto.amount,
        dto.expense_date,
        dto.supplier.unwrap_or_default(),
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: ExpenseDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Expense>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Expense>> {
    repository::list_all().await
}
