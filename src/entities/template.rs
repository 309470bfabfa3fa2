use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A catalog entry the add-exercise sheet picks from.
///
/// Templates are what the user manages in the catalog editor; logging an
/// exercise copies the template's name and category into a new record.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    #[sea_orm(unique)]
    pub name: String,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
