use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(string(Users::Email).unique_key())
                    .col(json(Users::Interests))
                    .col(text(Users::Bio))
                    .to_owned(),
            )
            .await?;

        // Create communities table
        manager
            .create_table(
                Table::create()
                    .table(Communities::Table)
                    .if_not_exists()
                    .col(pk_auto(Communities::Id))
                    .col(string(Communities::Name))
                    .col(text(Communities::Description))
                    .col(string(Communities::Category))
                    .col(json(Communities::Interests))
                    .to_owned(),
            )
            .await?;

        // Create user_communities table (join table)
        manager
            .create_table(
                Table::create()
                    .table(UserCommunities::Table)
                    .if_not_exists()
                    .col(integer(UserCommunities::UserId))
                    .col(integer(UserCommunities::CommunityId))
                    .primary_key(
                        Index::create()
                            .name("pk_user_communities")
                            .col(UserCommunities::UserId)
                            .col(UserCommunities::CommunityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_communities_user")
                            .from(UserCommunities::Table, UserCommunities::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_communities_community")
                            .from(UserCommunities::Table, UserCommunities::CommunityId)
                            .to(Communities::Table, Communities::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create events table. Ids come from the published event list.
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(integer(Events::Id).primary_key())
                    .col(string(Events::Name))
                    .col(string(Events::Location))
                    .col(string(Events::Type))
                    .col(string(Events::Date))
                    .col(string(Events::Time))
                    .col(text(Events::Description))
                    .col(string(Events::ImageUrl))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserCommunities::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Communities::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Name,
    Email,
    Interests,
    Bio,
}

#[derive(DeriveIden)]
enum Communities {
    Table,
    Id,
    Name,
    Description,
    Category,
    Interests,
}

#[derive(DeriveIden)]
enum UserCommunities {
    Table,
    UserId,
    CommunityId,
}

#[derive(DeriveIden)]
enum Events {
    Table,
    Id,
    Name,
    Location,
    Type,
    Date,
    Time,
    Description,
    ImageUrl,
}
