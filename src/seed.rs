//! Populates an empty database with the sample users, communities, events
//! and memberships.
//!
//! Everything is written inside a single transaction: either the whole
//! sample set lands or nothing does.

pub mod fixtures;

use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, Set, TransactionTrait,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info, trace};

use model::entities::{community, event, membership, user};

use fixtures::{COMMUNITIES, CommunityFixture, EventFixture, MEMBERSHIPS, USERS, UserFixture};

#[derive(Error, Debug)]
pub enum SeedError {
    /// Any failure reported by the database, including constraint
    /// violations from an already seeded store.
    #[error("{0}")]
    Database(#[from] DbErr),

    #[error("Failed to open event list {}: {source}", .path.display())]
    EventsFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event list: {0}")]
    EventsFormat(#[from] serde_json::Error),
}

/// Row counts written by a successful seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub events: usize,
    pub users: usize,
    pub communities: usize,
    pub memberships: usize,
}

/// Insert `events` together with the fixed users, communities and
/// memberships, committing once at the end.
///
/// The schema must already exist. On failure the transaction is rolled back
/// and the store is left as it was.
pub async fn seed_database(
    db: &DatabaseConnection,
    events: &[EventFixture],
) -> Result<SeedReport, SeedError> {
    trace!("Entering seed_database function");
    info!("Seeding database with {} events", events.len());

    let txn = db.begin().await?;

    match insert_all(&txn, events).await {
        Ok(report) => {
            txn.commit().await?;
            info!(
                events = report.events,
                users = report.users,
                communities = report.communities,
                memberships = report.memberships,
                "Seed transaction committed"
            );
            Ok(report)
        }
        Err(e) => {
            error!("Seeding failed, rolling back: {}", e);
            if let Err(rollback_err) = txn.rollback().await {
                error!("Rollback failed: {}", rollback_err);
            }
            Err(e.into())
        }
    }
}

async fn insert_all(
    txn: &DatabaseTransaction,
    events: &[EventFixture],
) -> Result<SeedReport, DbErr> {
    info!("Inserting events...");
    for fixture in events {
        let inserted = insert_event(txn, fixture).await?;
        debug!("Inserted event {} -> ID {}", inserted.name, inserted.id);
    }

    info!("Inserting users...");
    let mut users = Vec::with_capacity(USERS.len());
    for fixture in &USERS {
        let inserted = insert_user(txn, fixture).await?;
        debug!("Inserted user {} -> ID {}", inserted.email, inserted.id);
        users.push(inserted);
    }

    info!("Inserting communities...");
    let mut communities = Vec::with_capacity(COMMUNITIES.len());
    for fixture in &COMMUNITIES {
        let inserted = insert_community(txn, fixture).await?;
        debug!("Inserted community {} -> ID {}", inserted.name, inserted.id);
        communities.push(inserted);
    }

    info!("Linking users to communities...");
    let mut membership_count = 0;
    for (user_index, community_indices) in MEMBERSHIPS {
        let user = users.get(user_index).ok_or_else(|| {
            DbErr::Custom(format!("membership references unknown user #{user_index}"))
        })?;
        for &community_index in community_indices {
            let community = communities.get(community_index).ok_or_else(|| {
                DbErr::Custom(format!(
                    "membership references unknown community #{community_index}"
                ))
            })?;

            membership::ActiveModel {
                user_id: Set(user.id),
                community_id: Set(community.id),
            }
            .insert(txn)
            .await?;
            membership_count += 1;
            debug!("Linked user {} to community {}", user.id, community.id);
        }
    }

    Ok(SeedReport {
        events: events.len(),
        users: users.len(),
        communities: communities.len(),
        memberships: membership_count,
    })
}

async fn insert_event(
    txn: &DatabaseTransaction,
    fixture: &EventFixture,
) -> Result<event::Model, DbErr> {
    event::ActiveModel {
        id: Set(fixture.id),
        name: Set(fixture.name.clone()),
        location: Set(fixture.location.clone()),
        kind: Set(fixture.kind.clone()),
        date: Set(fixture.date.clone()),
        time: Set(fixture.time.clone()),
        description: Set(fixture.description.clone()),
        image_url: Set(fixture.image_url.clone()),
    }
    .insert(txn)
    .await
}

async fn insert_user(
    txn: &DatabaseTransaction,
    fixture: &UserFixture,
) -> Result<user::Model, DbErr> {
    user::ActiveModel {
        name: Set(fixture.name.to_string()),
        email: Set(fixture.email.to_string()),
        interests: Set(fixture.interests.iter().copied().collect()),
        bio: Set(fixture.bio.to_string()),
        ..Default::default()
    }
    .insert(txn)
    .await
}

async fn insert_community(
    txn: &DatabaseTransaction,
    fixture: &CommunityFixture,
) -> Result<community::Model, DbErr> {
    community::ActiveModel {
        name: Set(fixture.name.to_string()),
        description: Set(fixture.description.to_string()),
        category: Set(fixture.category.to_string()),
        interests: Set(fixture.interests.iter().copied().collect()),
        ..Default::default()
    }
    .insert(txn)
    .await
}
