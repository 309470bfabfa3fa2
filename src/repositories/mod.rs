//! Repository layer for database operations.
//!
//! Repository structs encapsulate the SeaORM queries, keeping entities as
//! pure data models while providing reusable database access methods.

pub mod exercise;
pub mod template;

pub use exercise::ExerciseRepository;
pub use template::TemplateRepository;
