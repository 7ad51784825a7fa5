use chrono::Utc;
use contracts::domain::a001_carpet::aggregate::{Carpet, CarpetDirection, CarpetId, CarpetSource};
use contracts::domain::common::BaseAggregate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;
use crate::shared::data::model_helpers::{metadata_from_row, parse_uuid};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_carpet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub direction: String,
    pub source: String,
    pub description: String,
    pub quality: String,
    pub length: f64,
    pub width: f64,
    pub rate: f64,
    pub price: f64,
    pub weight: String,
    pub degree: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Carpet {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let metadata = metadata_from_row(m.created_at, m.updated_at, m.is_deleted, m.version);
        let direction = CarpetDirection::parse(&m.direction)
            .ok_or_else(|| anyhow::anyhow!("Unknown carpet direction: {}", m.direction))?;
        let source = CarpetSource::from_display_name(&m.source)
            .ok_or_else(|| anyhow::anyhow!("Unknown carpet source: {}", m.source))?;

        Ok(Carpet {
            base: BaseAggregate::with_metadata(CarpetId(parse_uuid(&m.id)?), metadata),
            direction,
            source,
            description: m.description,
            quality: m.quality,
            length: m.length,
            width: m.width,
            rate: m.rate,
            price: m.price,
            weight: m.weight,
            degree: m.degree,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Carpet) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        direction: Set(aggregate.direction.as_str().to_string()),
        source: Set(aggregate.source.display_name().to_string()),
        description: Set(aggregate.description.clone()),
        quality: Set(aggregate.quality.clone()),
        length: Set(aggregate.length),
        width: Set(aggregate.width),
        rate: Set(aggregate.rate),
        price: Set(aggregate.price),
        weight: Set(aggregate.weight.clone()),
        degree: Set(aggregate.degree.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Newest first
pub async fn list_by_direction(direction: CarpetDirection) -> anyhow::Result<Vec<Carpet>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Direction.eq(direction.as_str()))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Carpet::try_from)
        .collect()
}

pub async fn count_by_direction(direction: CarpetDirection) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Direction.eq(direction.as_str()))
        .count(conn())
        .await?)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Carpet>> {
    Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?
        .map(Carpet::try_from)
        .transpose()
}

pub async fn insert(aggregate: &Carpet) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Carpet) -> anyhow::Result<()> {
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
