use chrono::Utc;
use contracts::domain::a003_processing_carpet::aggregate::{ProcessingCarpet, ProcessingCarpetId};
use contracts::domain::common::BaseAggregate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::model_helpers::{
    from_json_column, metadata_from_row, parse_uuid, to_json_column,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_processing_carpet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub worker_id: String,
    pub width: String,
    pub length: String,
    pub map: String,
    /// JSON array of strings
    pub materials: String,
    /// JSON array of numbers
    pub payments: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ProcessingCarpet {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        Ok(ProcessingCarpet {
            base: BaseAggregate::with_metadata(ProcessingCarpetId(parse_uuid(&m.id)?), metadata),
            worker_id: m.worker_id,
            worker_name: None,
            width: m.width,
            length: m.length,
            map: m.map,
            materials: from_json_column("materials", &m.materials)?,
            payments: from_json_column("payments", &m.payments)?,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &ProcessingCarpet) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        worker_id: Set(aggregate.worker_id.clone()),
        width: Set(aggregate.width.clone()),
        length: Set(aggregate.length.clone()),
        map: Set(aggregate.map.clone()),
        materials: Set(to_json_column(&aggregate.materials)?),
        payments: Set(to_json_column(&aggregate.payments)?),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<ProcessingCarpet>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(ProcessingCarpet::try_from)
        .collect()
}

pub async fn count_by_worker(worker_id: &str) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::WorkerId.eq(worker_id))
        .count(conn())
        .await?)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ProcessingCarpet>> {
    Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?
        .map(ProcessingCarpet::try_from)
        .transpose()
}

pub async fn insert(aggregate: &ProcessingCarpet) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &ProcessingCarpet) -> anyhow::Result<()> {
    let mut active = to_active(aggregate)?;
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
