use chrono::Utc;
use contracts::domain::a009_document::aggregate::{Document, DocumentId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::{DocumentKind, DocumentStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a009_document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub kind: String,
    pub event_ref: String,
    pub client_ref: String,
    pub issue_date: String,
    pub total_amount: f64,
    pub terms: String,
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

impl From<Model> for Document {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Document {
            base: BaseAggregate::with_metadata(
                DocumentId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            kind: DocumentKind::from_code(&m.kind).unwrap_or(DocumentKind::Proposal),
            event_ref: m.event_ref,
            client_ref: m.client_ref,
            issue_date: m.issue_date,
            total_amount: m.total_amount,
            terms: m.terms,
            status: DocumentStatus::from_code(&m.status).unwrap_or(DocumentStatus::Draft),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Document>> {
    let mut items: Vec<Document> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Document>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Document) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        kind: Set(aggregate.kind.code().to_string()),
        event_ref: Set(aggregate.event_ref.clone()),
        client_ref: Set(aggregate.client_ref.clone()),
        issue_date: Set(aggregate.issue_date.clone()),
        total_amount: Set(aggregate.total_amount),
        terms: Set(aggregate.terms.clone()),
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

pub async fn update(aggregate: &Document) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        kind: Set(aggregate.kind.code().to_string()),
        event_ref: Set(aggregate.event_ref.clone()),
        client_ref: Set(aggregate.client_ref.clone()),
        issue_date: Set(aggregate.issue_date.clone()),
        total_amount: Set(aggregate.total_amount),
        terms: Set(aggregate.terms.clone()),
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
