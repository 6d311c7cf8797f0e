use chrono::Utc;
use contracts::domain::a002_quote::aggregate::{Quote, QuoteId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::QuoteStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_quote")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub client_ref: String,
    pub event_date: String,
    pub venue: String,
    pub guest_count: i32,
    pub service_kind: String,
    pub estimated_price: f64,
    pub status: String,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Quote {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Quote {
            base: BaseAggregate::with_metadata(
                QuoteId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            client_ref: m.client_ref,
            event_date: m.event_date,
            venue: m.venue,
            guest_count: m.guest_count,
            service_kind: m.service_kind,
            estimated_price: m.estimated_price,
            status: QuoteStatus::from_code(&m.status).unwrap_or(QuoteStatus::New),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Quote>> {
    let mut items: Vec<Quote> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    // Newest requests first
    items.sort_by(|a, b| b.event_date.cmp(&a.event_date));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Quote>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Quote) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        client_ref: Set(aggregate.client_ref.clone()),
        event_date: Set(aggregate.event_date.clone()),
        venue: Set(aggregate.venue.clone()),
        guest_count: Set(aggregate.guest_count),
        service_kind: Set(aggregate.service_kind.clone()),
        estimated_price: Set(aggregate.estimated_price),
        status: Set(aggregate.status.code().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Quote) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        client_ref: Set(aggregate.client_ref.clone()),
        event_date: Set(aggregate.event_date.clone()),
        venue: Set(aggregate.venue.clone()),
        guest_count: Set(aggregate.guest_count),
        service_kind: Set(aggregate.service_kind.clone()),
        estimated_price: Set(aggregate.estimated_price),
        status: Set(aggregate.status.code().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
