use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A single logged exercise: what was done and when.
///
/// `timestamp` is an RFC 3339 string in UTC; it is optional because imported
/// or hand-entered records may carry no time. Absent timestamps are grouped
/// under the current day at render time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub uuid: String,
    pub name: String,
    pub category: String,
    pub timestamp: Option<String>,
    pub order_index: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
