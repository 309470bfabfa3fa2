//! Local storage layer for exercise records and the template catalog.
//!
//! The UI talks to the store through the [`ExerciseStore`] trait and never
//! touches the database directly; [`LocalStorage`] implements the trait over
//! SeaORM with a bundled SQLite database. Screens treat deletes as
//! fire-and-forget; failures come back through the background action channel
//! as error dialogs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use uuid::Uuid;

use crate::entities::{exercise, template};
use crate::repositories::{ExerciseRepository, TemplateRepository};

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),
}

/// Catalog contents seeded on first run, before the user has saved anything.
static DEFAULT_TEMPLATES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("Push-ups", "Core"),
        ("Pull-ups", "Back"),
        ("Squats", "Legs"),
        ("Lunges", "Legs"),
        ("Plank", "Core"),
        ("Bicep curls", "Arms"),
        ("Bench press", "Chest"),
        ("Deadlift", "Back"),
    ]
});

/// Persistence contract consumed by the UI.
///
/// The screens only ever read the full collection and issue inserts/deletes
/// by identity; every mutation is followed by a reload, so the trait has no
/// incremental update surface.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    async fn all_exercises(&self) -> Result<Vec<exercise::Model>, StoreError>;
    async fn insert_exercise(
        &self,
        name: &str,
        category: &str,
        timestamp: Option<String>,
    ) -> Result<exercise::Model, StoreError>;
    async fn delete_exercise(&self, uuid: &Uuid) -> Result<(), StoreError>;

    async fn all_templates(&self) -> Result<Vec<template::Model>, StoreError>;
    async fn insert_template(&self, name: &str, category: &str) -> Result<template::Model, StoreError>;
    async fn delete_template(&self, uuid: &Uuid) -> Result<(), StoreError>;
}

/// SQLite-backed store.
pub struct LocalStorage {
    conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open (or create) the on-disk database under the platform data dir.
    pub async fn new() -> Result<Self> {
        let path = Self::database_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }
        let url = format!("sqlite://{}?mode=rwc", path.display());
        Self::connect(&url).await
    }

    /// Open an in-memory database; used by tests.
    pub async fn new_in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    async fn connect(url: &str) -> Result<Self> {
        let conn = Database::connect(url)
            .await
            .with_context(|| format!("Failed to open database: {url}"))?;
        let storage = Self { conn };
        storage.init_schema().await?;
        storage.seed_templates().await?;
        Ok(storage)
    }

    /// Location of the SQLite file.
    pub fn database_path() -> Result<PathBuf> {
        let base = dirs::data_dir().context("Could not determine platform data directory")?;
        Ok(base.join("repscount").join("repscount.db"))
    }

    async fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS exercises (
                    uuid TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    category TEXT NOT NULL,
                    timestamp TEXT,
                    order_index INTEGER NOT NULL DEFAULT 0
                )
                ",
            )
            .await?;

        self.conn
            .execute_unprepared(
                r"
                CREATE TABLE IF NOT EXISTS exercise_templates (
                    uuid TEXT PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    category TEXT NOT NULL
                )
                ",
            )
            .await?;

        Ok(())
    }

    /// Populate the catalog with defaults when it is empty.
    async fn seed_templates(&self) -> Result<()> {
        if TemplateRepository::count(&self.conn).await? > 0 {
            return Ok(());
        }
        log::info!("Seeding template catalog with {} defaults", DEFAULT_TEMPLATES.len());
        for (name, category) in DEFAULT_TEMPLATES.iter() {
            TemplateRepository::insert(&self.conn, name, category).await?;
        }
        Ok(())
    }
}

fn db_err(e: anyhow::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

#[async_trait]
impl ExerciseStore for LocalStorage {
    async fn all_exercises(&self) -> Result<Vec<exercise::Model>, StoreError> {
        ExerciseRepository::get_all(&self.conn).await.map_err(db_err)
    }

    async fn insert_exercise(
        &self,
        name: &str,
        category: &str,
        timestamp: Option<String>,
    ) -> Result<exercise::Model, StoreError> {
        log::debug!("Inserting exercise '{name}' ({category})");
        ExerciseRepository::insert(&self.conn, name, category, timestamp)
            .await
            .map_err(db_err)
    }

    async fn delete_exercise(&self, uuid: &Uuid) -> Result<(), StoreError> {
        log::debug!("Deleting exercise {uuid}");
        let removed = ExerciseRepository::delete(&self.conn, uuid).await.map_err(db_err)?;
        if removed == 0 {
            return Err(StoreError::NotFound(*uuid));
        }
        Ok(())
    }

    async fn all_templates(&self) -> Result<Vec<template::Model>, StoreError> {
        TemplateRepository::get_all(&self.conn).await.map_err(db_err)
    }

    async fn insert_template(&self, name: &str, category: &str) -> Result<template::Model, StoreError> {
        log::debug!("Inserting template '{name}' ({category})");
        TemplateRepository::insert(&self.conn, name, category)
            .await
            .map_err(db_err)
    }

    async fn delete_template(&self, uuid: &Uuid) -> Result<(), StoreError> {
        log::debug!("Deleting template {uuid}");
        let removed = TemplateRepository::delete(&self.conn, uuid).await.map_err(db_err)?;
        if removed == 0 {
            return Err(StoreError::NotFound(*uuid));
        }
        Ok(())
    }
}
