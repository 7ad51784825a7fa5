use chrono::Utc;
use contracts::domain::a013_unit::aggregate::{Unit, UnitId, UnitStatus};
use contracts::domain::common::BaseAggregate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::model_helpers::{metadata_from_row, parse_uuid};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a013_unit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub unit_number: String,
    pub customer_name: String,
    pub customer_father_name: String,
    pub services_description: String,
    pub service_charge: f64,
    pub current_water_reading: f64,
    pub current_electricity_reading: f64,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Unit {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        let status = UnitStatus::parse(&m.status)
            .ok_or_else(|| anyhow::anyhow!("Invalid unit status {}", m.status))?;
        Ok(Unit {
            base: BaseAggregate::with_metadata(UnitId(parse_uuid(&m.id)?), metadata),
            unit_number: m.unit_number,
            customer_name: m.customer_name,
            customer_father_name: m.customer_father_name,
            services_description: m.services_description,
            service_charge: m.service_charge,
            current_water_reading: m.current_water_reading,
            current_electricity_reading: m.current_electricity_reading,
            status,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Unit) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        unit_number: Set(aggregate.unit_number.clone()),
        customer_name: Set(aggregate.customer_name.clone()),
        customer_father_name: Set(aggregate.customer_father_name.clone()),
        services_description: Set(aggregate.services_description.clone()),
        service_charge: Set(aggregate.service_charge),
        current_water_reading: Set(aggregate.current_water_reading),
        current_electricity_reading: Set(aggregate.current_electricity_reading),
        status: Set(aggregate.status.as_str().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Sorted with `Unit::list_order`
pub async fn list_all() -> anyhow::Result<Vec<Unit>> {
    let mut items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Unit::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;
    items.sort_by(Unit::list_order);
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Unit>> {
    Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?
        .map(Unit::try_from)
        .transpose()
}

pub async fn insert(aggregate: &Unit) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Unit) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

/// Only the meters; the rest of the unit is left as it is
pub async fn set_readings(id: Uuid, water: f64, electricity: f64) -> anyhow::Result<()> {
    use sea_orm::sea_query::Expr;
    Entity::update_many()
        .col_expr(Column::CurrentWaterReading, Expr::value(water))
        .col_expr(Column::CurrentElectricityReading, Expr::value(electricity))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
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
