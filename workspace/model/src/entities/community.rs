use super::{InterestTags, membership, user};
use sea_orm::entity::prelude::*;

/// An interest group users can join, e.g. "Chennai Tech Hub".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "communities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Broad category label shown in listings ("Technology", "Culture", ...).
    pub category: String,
    #[sea_orm(column_type = "Json")]
    pub interests: InterestTags,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::membership::Entity")]
    Membership,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        membership::Relation::User.def()
    }
    fn via() -> Option<RelationDef> {
        Some(membership::Relation::Community.def().rev())
    }
}

impl Related<membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
