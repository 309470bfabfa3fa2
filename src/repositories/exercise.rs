//! Exercise repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::exercise;

/// Repository for exercise-record database operations.
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Get all exercise records in insertion order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<exercise::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(exercise::Entity::find()
            .order_by_asc(exercise::Column::OrderIndex)
            .all(conn)
            .await?)
    }

    /// Get a single exercise record by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<exercise::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(exercise::Entity::find()
            .filter(exercise::Column::Uuid.eq(uuid.to_string()))
            .one(conn)
            .await?)
    }

    /// Insert a new exercise record and return it.
    pub async fn insert<C>(conn: &C, name: &str, category: &str, timestamp: Option<String>) -> Result<exercise::Model>
    where
        C: ConnectionTrait,
    {
        let next_order = Self::next_order_index(conn).await?;
        let model = exercise::ActiveModel {
            uuid: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            category: Set(category.to_string()),
            timestamp: Set(timestamp),
            order_index: Set(next_order),
        };
        Ok(model.insert(conn).await?)
    }

    /// Delete an exercise record by UUID. Returns the number of rows removed.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = exercise::Entity::delete_many()
            .filter(exercise::Column::Uuid.eq(uuid.to_string()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    async fn next_order_index<C>(conn: &C) -> Result<i32>
    where
        C: ConnectionTrait,
    {
        let last = exercise::Entity::find()
            .order_by_desc(exercise::Column::OrderIndex)
            .one(conn)
            .await?;
        Ok(last.map_or(0, |m| m.order_index + 1))
    }
}
