//! Exercise-template repository for database operations.

use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::template;

/// Repository for catalog-template database operations.
pub struct TemplateRepository;

impl TemplateRepository {
    /// Get all templates sorted by name.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<template::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(template::Entity::find()
            .order_by_asc(template::Column::Name)
            .all(conn)
            .await?)
    }

    /// Count the templates in the catalog.
    pub async fn count<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(template::Entity::find().count(conn).await?)
    }

    /// Insert a new template and return it.
    pub async fn insert<C>(conn: &C, name: &str, category: &str) -> Result<template::Model>
    where
        C: ConnectionTrait,
    {
        let model = template::ActiveModel {
            uuid: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_string()),
            category: Set(category.to_string()),
        };
        Ok(model.insert(conn).await?)
    }

    /// Delete a template by UUID. Returns the number of rows removed.
    pub async fn delete<C>(conn: &C, uuid: &Uuid) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = template::Entity::delete_many()
            .filter(template::Column::Uuid.eq(uuid.to_string()))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
