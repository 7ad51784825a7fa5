use chrono::Utc;
use contracts::domain::a010_agreement::aggregate::{Agreement, AgreementId, AgreementStatus};
use contracts::domain::common::BaseAggregate;
use contracts::enums::floor::Floor;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::model_helpers::{
    floor_from_column, from_json_column, metadata_from_row, parse_uuid, to_json_column,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a010_agreement")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_id: String,
    pub status: String,
    /// JSON array of shop numbers
    pub shops: String,
    pub advance: f64,
    pub rent: f64,
    pub service: f64,
    pub taken: f64,
    pub floor: i32,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Agreement {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        let status = AgreementStatus::parse(&m.status)
            .ok_or_else(|| anyhow::anyhow!("Invalid agreement status {}", m.status))?;
        Ok(Agreement {
            base: BaseAggregate::with_metadata(AgreementId(parse_uuid(&m.id)?), metadata),
            customer_id: m.customer_id,
            customer_name: None,
            status,
            shops: from_json_column("shops", &m.shops)?,
            advance: m.advance,
            rent: m.rent,
            service: m.service,
            taken: m.taken,
            floor: floor_from_column(m.floor)?,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Agreement) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        customer_id: Set(aggregate.customer_id.clone()),
        status: Set(aggregate.status.as_str().to_string()),
        shops: Set(to_json_column(&aggregate.shops)?),
        advance: Set(aggregate.advance),
        rent: Set(aggregate.rent),
        service: Set(aggregate.service),
        taken: Set(aggregate.taken),
        floor: Set(aggregate.floor.number() as i32),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<Agreement>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Floor)
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Agreement::try_from)
        .collect()
}

/// Agreements a new rent sheet is built from
pub async fn list_active_by_floor(floor: Floor) -> anyhow::Result<Vec<Agreement>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Status.eq(AgreementStatus::Active.as_str()))
        .filter(Column::Floor.eq(floor.number() as i32))
        .order_by_asc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Agreement::try_from)
        .collect()
}

pub async fn count_active() -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Status.eq(AgreementStatus::Active.as_str()))
        .count(conn())
        .await?)
}

/// Agreements of a customer in any status
pub async fn count_by_customer(customer_id: &str) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::CustomerId.eq(customer_id))
        .count(conn())
        .await?)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Agreement>> {
    Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?
        .map(Agreement::try_from)
        .transpose()
}

pub async fn insert(aggregate: &Agreement) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Agreement) -> anyhow::Result<()> {
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
