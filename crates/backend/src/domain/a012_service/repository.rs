use chrono::Utc;
use contracts::domain::a012_service::aggregate::{ServiceSheet, ServiceSheetId};
use contracts::domain::common::BaseAggregate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::model_helpers::{
    floor_from_column, from_json_column, metadata_from_row, month_from_column, parse_uuid,
    to_json_column,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a012_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub year: String,
    pub month: i32,
    pub floor: i32,
    pub is_approved: bool,
    pub customers: String,
    pub total: f64,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for ServiceSheet {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        Ok(ServiceSheet {
            base: BaseAggregate::with_metadata(ServiceSheetId(parse_uuid(&m.id)?), metadata),
            year: m.year,
            month: month_from_column(m.month)?,
            floor: floor_from_column(m.floor)?,
            is_approved: m.is_approved,
            customers: from_json_column("customers", &m.customers)?,
            total: m.total,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &ServiceSheet) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        year: Set(aggregate.year.clone()),
        month: Set(aggregate.month.number() as i32),
        floor: Set(aggregate.floor.number() as i32),
        is_approved: Set(aggregate.is_approved),
        customers: Set(to_json_column(&aggregate.customers)?),
        total: Set(aggregate.total),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<ServiceSheet>> {
    let mut items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(ServiceSheet::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;
    items.sort_by(ServiceSheet::list_order);
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ServiceSheet>> {
    Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?
        .map(ServiceSheet::try_from)
        .transpose()
}

pub async fn insert(aggregate: &ServiceSheet) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &ServiceSheet) -> anyhow::Result<()> {
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
