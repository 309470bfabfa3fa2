//! SeaORM entity models for database tables.

pub mod exercise;
pub mod template;
