use chrono::Utc;
use contracts::domain::a014_unit_bill::aggregate::{UnitBill, UnitBillId};
use contracts::domain::common::BaseAggregate;
use contracts::enums::solar_month::SolarMonth;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::model_helpers::{
    from_json_column, metadata_from_row, month_from_column, parse_uuid, to_json_column,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a014_unit_bill")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub year: String,
    pub month: i32,
    /// JSON object keyed by unit id
    pub units: String,
    pub total: f64,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for UnitBill {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        Ok(UnitBill {
            base: BaseAggregate::with_metadata(UnitBillId(parse_uuid(&m.id)?), metadata),
            year: m.year,
            month: month_from_column(m.month)?,
            units: from_json_column("units", &m.units)?,
            total: m.total,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &UnitBill) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        year: Set(aggregate.year.clone()),
        month: Set(aggregate.month.number() as i32),
        units: Set(to_json_column(&aggregate.units)?),
        total: Set(aggregate.total),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<UnitBill>> {
    let mut items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(UnitBill::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;
    items.sort_by(UnitBill::list_order);
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<UnitBill>> {
    Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?
        .map(UnitBill::try_from)
        .transpose()
}

pub async fn find_for_period(year: &str, month: SolarMonth) -> anyhow::Result<Option<UnitBill>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Year.eq(year))
        .filter(Column::Month.eq(month.number() as i32))
        .one(conn())
        .await?
        .map(UnitBill::try_from)
        .transpose()
}

pub async fn insert(aggregate: &UnitBill) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &UnitBill) -> anyhow::Result<()> {
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
