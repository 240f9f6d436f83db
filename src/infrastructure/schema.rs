use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema, sea_query::Index};
use tracing::debug;

use super::entity::{activities, participants};

/// Create the activities and participants tables if they do not exist yet.
///
/// Besides the tables this adds a unique index on (activity_id, email) so a
/// student can hold at most one seat per activity even if two signups race.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut activities_table = schema.create_table_from_entity(activities::Entity);
    activities_table.if_not_exists();
    db.execute(backend.build(&activities_table)).await?;

    let mut participants_table = schema.create_table_from_entity(participants::Entity);
    participants_table.if_not_exists();
    db.execute(backend.build(&participants_table)).await?;

    let email_index = Index::create()
        .name("idx_participants_activity_email")
        .table(participants::Entity)
        .col(participants::Column::ActivityId)
        .col(participants::Column::Email)
        .unique()
        .if_not_exists()
        .to_owned();
    db.execute(backend.build(&email_index)).await?;

    debug!("schema ready");
    Ok(())
}
