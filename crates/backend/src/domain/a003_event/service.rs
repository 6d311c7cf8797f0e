use super::repository;
use crate::domain::a004_payment;
use contracts::domain::a003_event::aggregate::{Event, EventDto};
use serde::Serialize;
use uuid::Uuid;

pub async fn create(dto: EventDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("EVT-{}", Uuid::new_v4()));
    let mut aggregate = Event::new_for_insert(
        code,
        dto.description.clone(),
        dto.client_ref.clone(),
        dto.quote_ref.clone(),
        dto.event_date.clone(),
        dto.venue.clone().unwrap_or_default(),
        dto.guest_count,
        dto.price.unwrap_or_default(),
        dto.comment.clone(),
    );
    aggregate.start_time = dto.start_time.clone().unwrap_or_default();
    aggregate.end_time = dto.end_time.clone().unwrap_or_default();
    if let Some(status) = dto.status {
        aggregate.status = status;
    }
    if let Some(selections) = &dto.selections {
        aggregate.set_selections(selections);
    }

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: EventDto) -> anyhow::Result<()> {
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

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Event>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Event>> {
    repository::list_all().await
}

/// One calendar cell: all bookings of a single day
#[derive(Debug, Serialize)]
pub struct CalendarDay {
    pub date: String,
    pub events: Vec<Event>,
}

/// Month view: events of the given month grouped by date, days with no
/// bookings omitted
pub async fn calendar_month(year: i32, month: u32) -> anyhow::Result<Vec<CalendarDay>> {
    if !(1..=12).contains(&month) {
        anyhow::bail!("Invalid month: {}", month);
    }
    let from = format!("{:04}-{:02}-01", year, month);
    let to = format!("{:04}-{:02}-{:02}", year, month, last_day_of_month(year, month));

    let events = repository::list_by_date_range(&from, &to).await?;

    let mut days: Vec<CalendarDay> = Vec::new();
    for event in events {
        match days.last_mut() {
            Some(day) if day.date == event.event_date => day.events.push(event),
            _ => days.push(CalendarDay {
                date: event.event_date.clone(),
                events: vec![event],
            }),
        }
    }
    Ok(days)
}

/// Financial position of a single event
#[derive(Debug, Serialize)]
pub struct EventBalance {
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub price: f64,
    #[serde(rename = "paidTotal")]
    pub paid_total: f64,
    #[serde(rename = "balanceDue")]
    pub balance_due: f64,
}

pub async fn balance(id: Uuid) -> anyhow::Result<Option<EventBalance>> {
    let event = match repository::get_by_id(id).await? {
        Some(e) => e,
        None => return Ok(None),
    };
    let paid_total = a004_payment::repository::sum_by_event(id).await?;
    Ok(Some(EventBalance {
        event_id: event.to_string_id(),
        price: event.price,
        paid_total,
        balance_due: event.price - paid_total,
    }))
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    for day in (28..=31).rev() {
        if chrono::NaiveDate::from_ymd_opt(year, month, day).is_some() {
            return day;
        }
    }
    28
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        assert_eq!(last_day_of_month(2030, 1), 31);
        assert_eq!(last_day_of_month(2030, 4), 30);
        assert_eq!(last_day_of_month(2030, 2), 28);
        assert_eq!(last_day_of_month(2032, 2), 29);
    }
}
