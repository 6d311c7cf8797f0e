use super::repository;
use contracts::domain::a008_task::aggregate::{Task, TaskDto};
use uuid::Uuid;

pub async fn create(dto: TaskDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("TSK-{}", Uuid::new_v4()));
    let mut aggregate = Task::new_for_insert(
        code,
        dto.description,
        dto.event_ref,
        dto.due_date,
        dto.comment,
    );
    if let Some(done) = dto.done {
        aggregate.done = done;
    }

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: TaskDto) -> anyhow::Result<()> {
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

/// Flip the done flag, returning the new state. None when the task does not exist.
pub async fn toggle(id: Uuid) -> anyhow::Result<Option<bool>> {
    let mut aggregate = match repository::get_by_id(id).await? {
        Some(aggregate) => aggregate,
        None => return Ok(None),
    };

    let done = aggregate.toggle();
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(Some(done))
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Task>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Task>> {
    repository::list_all().await
}
