use super::{InterestTags, community, membership};
use sea_orm::entity::prelude::*;

/// A registered member of the platform.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Interest labels in the order the user listed them.
    #[sea_orm(column_type = "Json")]
    pub interests: InterestTags,
    /// Free-text biography.
    pub bio: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Join rows linking this user to the communities they belong to.
    #[sea_orm(has_many = "super::membership::Entity")]
    Membership,
}

impl Related<community::Entity> for Entity {
    fn to() -> RelationDef {
        membership::Relation::Community.def()
    }
    fn via() -> Option<RelationDef> {
        Some(membership::Relation::User.def().rev())
    }
}

impl Related<membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
