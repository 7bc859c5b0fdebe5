use sea_orm::entity::prelude::*;

/// A listed event. Identifiers are assigned by whoever publishes the event
/// list, so the key is not auto-incremented.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub location: String,
    /// Event type such as "Music" or "Technology".
    #[sea_orm(column_name = "type")]
    pub kind: String,
    /// Human readable date, e.g. "Saturday, Mar 22". Stored verbatim.
    pub date: String,
    /// Human readable start time, e.g. "7:00 PM".
    pub time: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
