use chrono::Utc;
use contracts::domain::a005_salary::aggregate::{Salary, SalaryId};
use contracts::domain::common::BaseAggregate;
use contracts::enums::solar_month::SolarMonth;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::model_helpers::{metadata_from_row, month_from_column, parse_uuid};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_salary")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub staff_id: String,
    pub year: String,
    pub month: i32,
    pub amount: f64,
    pub paid: f64,
    pub remainder: f64,
    pub description: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Salary {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        let month = month_from_column(m.month)?;
        Ok(Salary {
            base: BaseAggregate::with_metadata(SalaryId(parse_uuid(&m.id)?), metadata),
            staff_id: m.staff_id,
            staff_name: None,
            year: m.year,
            month,
            amount: m.amount,
            paid: m.paid,
            remainder: m.remainder,
            description: m.description,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Salary) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        staff_id: Set(aggregate.staff_id.clone()),
        year: Set(aggregate.year.clone()),
        month: Set(aggregate.month.number() as i32),
        amount: Set(aggregate.amount),
        paid: Set(aggregate.paid),
        remainder: Set(aggregate.remainder),
        description: Set(aggregate.description.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Newest period first
pub async fn list_all() -> anyhow::Result<Vec<Salary>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::Year)
        .order_by_desc(Column::Month)
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Salary::try_from)
        .collect()
}

pub async fn count_by_staff(staff_id: &str) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::StaffId.eq(staff_id))
        .count(conn())
        .await?)
}

/// Live record of a staff member for one period
pub async fn find_for_period(
    staff_id: &str,
    year: &str,
    month: SolarMonth,
) -> anyhow::Result<Option<Salary>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::StaffId.eq(staff_id))
        .filter(Column::Year.eq(year))
        .filter(Column::Month.eq(month.number() as i32))
        .one(conn())
        .await?
        .map(Salary::try_from)
        .transpose()
}

pub async fn total_remainder() -> anyhow::Result<f64> {
    Ok(list_all().await?.iter().map(|s| s.remainder).sum())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Salary>> {
    Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?
        .map(Salary::try_from)
        .transpose()
}

pub async fn insert(aggregate: &Salary) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Salary) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
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
