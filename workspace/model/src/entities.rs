//! SeaORM entity modules for the community and events schema.
//!
//! Users and communities are linked many-to-many through the
//! `user_communities` join table; events stand alone.

pub mod community;
pub mod event;
pub mod interest_tags;
pub mod membership;
pub mod user;

pub use interest_tags::InterestTags;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::community::Entity as Community;
    pub use super::event::Entity as Event;
    pub use super::membership::Entity as Membership;
    pub use super::user::Entity as User;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn create_user(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
    ) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            interests: Set(["music", "photography"].into_iter().collect()),
            bio: Set(format!("{name} bio")),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    async fn create_community(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<community::Model, DbErr> {
        community::ActiveModel {
            name: Set(name.to_string()),
            description: Set(format!("{name} description")),
            category: Set("Technology".to_string()),
            interests: Set(["technology", "coding"].into_iter().collect()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let john = create_user(&db, "John", "john@example.com").await?;
        let jane = create_user(&db, "Jane", "jane@example.com").await?;

        let tech = create_community(&db, "Tech").await?;
        let art = create_community(&db, "Art").await?;

        for (user_id, community_id) in [(john.id, tech.id), (john.id, art.id), (jane.id, art.id)] {
            membership::ActiveModel {
                user_id: Set(user_id),
                community_id: Set(community_id),
            }
            .insert(&db)
            .await?;
        }

        event::ActiveModel {
            id: Set(42),
            name: Set("Jazz Evening".to_string()),
            location: Set("Marina Beach".to_string()),
            kind: Set("Music".to_string()),
            date: Set("Saturday, Mar 22".to_string()),
            time: Set("7:00 PM".to_string()),
            description: Set("Jazz by the waves".to_string()),
            image_url: Set("https://example.com/jazz.png".to_string()),
        }
        .insert(&db)
        .await?;

        // Verify users round-trip their interests in order
        let stored = User::find_by_id(john.id).one(&db).await?.unwrap();
        assert_eq!(stored.interests.as_slice(), ["music", "photography"]);
        assert_eq!(stored.email, "john@example.com");

        // Verify events keep their assigned id
        let events = Event::find().all(&db).await?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 42);
        assert_eq!(events[0].kind, "Music");

        // Verify membership rows
        assert_eq!(Membership::find().count(&db).await?, 3);

        // Users -> communities through the join table
        let johns = john
            .find_related(Community)
            .order_by_asc(community::Column::Id)
            .all(&db)
            .await?;
        assert_eq!(
            johns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            ["Tech", "Art"]
        );

        // Communities -> users through the join table
        let art_members = art.find_related(User).all(&db).await?;
        assert_eq!(art_members.len(), 2);

        let tech_members = User::find()
            .inner_join(Membership)
            .filter(membership::Column::CommunityId.eq(tech.id))
            .all(&db)
            .await?;
        assert_eq!(tech_members.len(), 1);
        assert_eq!(tech_members[0].id, john.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;

        create_user(&db, "John", "john@example.com").await?;
        let duplicate = create_user(&db, "Johnny", "john@example.com").await;

        assert!(duplicate.is_err());
        assert_eq!(User::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_membership_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let john = create_user(&db, "John", "john@example.com").await?;
        let tech = create_community(&db, "Tech").await?;

        let join = || membership::ActiveModel {
            user_id: Set(john.id),
            community_id: Set(tech.id),
        };
        join().insert(&db).await?;
        assert!(join().insert(&db).await.is_err());
        Ok(())
    }
}
