use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for TaskId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TaskId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Checklist item. `base.description` holds the task title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(flatten)]
    pub base: BaseAggregate<TaskId>,

    /// UUID of the related event, if any (a003_event)
    #[serde(rename = "eventRef")]
    pub event_ref: Option<String>,

    /// Due date (YYYY-MM-DD), optional
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,

    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new_for_insert(
        code: String,
        description: String,
        event_ref: Option<String>,
        due_date: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(TaskId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            event_ref,
            due_date,
            done: false,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Flip the done flag, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }

    pub fn update(&mut self, dto: &TaskDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.event_ref = dto.event_ref.clone();
        self.due_date = dto.due_date.clone();
        if let Some(done) = dto.done {
            self.done = done;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Task title cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if let Some(date) = &self.due_date {
            if chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                return Err(format!("Invalid due date: {}", date));
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "task"
    }

    fn element_name() -> &'static str {
        "Task"
    }

    fn list_name() -> &'static str {
        "Tasks"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TaskDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(rename = "eventRef")]
    pub event_ref: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    pub done: Option<bool>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_done() {
        let mut task = Task::new_for_insert(
            "TSK-001".into(),
            "Confirm staff roster".into(),
            None,
            Some("2030-09-18".into()),
            None,
        );
        assert!(!task.done);
        assert!(task.toggle());
        assert!(!task.toggle());
    }

    #[test]
    fn bad_due_date_rejected() {
        let task = Task::new_for_insert(
            "TSK-002".into(),
            "Order ice".into(),
            None,
            Some("soonish".into()),
            None,
        );
        assert!(task.validate().is_err());
    }
}
