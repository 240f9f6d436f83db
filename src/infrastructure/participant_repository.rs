use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Statement, Value,
};

use super::entity::participants;
use crate::domain::{
    error::RepositoryError,
    models::{
        activity::{Activity, ActivityId},
        participant::{Participant, ParticipantId},
    },
    repositories::participant_repository::{InsertOutcome, ParticipantRepository},
};

/// Inserts nothing when the email already holds a seat or the activity is full
const SQL_INSERT_WITHIN_CAPACITY: &str = r#"
INSERT INTO participants (email, activity_id)
SELECT ?, a.id
FROM activities a
WHERE a.id = ?
  AND NOT EXISTS (
    SELECT 1 FROM participants p WHERE p.activity_id = a.id AND p.email = ?
  )
  AND (SELECT COUNT(*) FROM participants p WHERE p.activity_id = a.id) < a.max_participants
"#;

#[derive(Clone)]
pub struct SqliteParticipantRepository {
    db: DatabaseConnection,
}

impl SqliteParticipantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepository {
    async fn find_by_activity_and_email(
        &self,
        activity_id: ActivityId,
        email: &str,
    ) -> Result<Option<Participant>, RepositoryError> {
        let participant = participants::Entity::find()
            .filter(participants::Column::ActivityId.eq(activity_id.value()))
            .filter(participants::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(participant.map(|model| Participant::new(model.id, model.email, model.activity_id)))
    }

    async fn count_by_activity(&self, activity_id: ActivityId) -> Result<u64, RepositoryError> {
        participants::Entity::find()
            .filter(participants::Column::ActivityId.eq(activity_id.value()))
            .count(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn find_emails_by_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<String>, RepositoryError> {
        participants::Entity::find()
            .select_only()
            .column(participants::Column::Email)
            .filter(participants::Column::ActivityId.eq(activity_id.value()))
            .order_by_asc(participants::Column::Id)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
    }

    async fn insert_within_capacity(
        &self,
        activity: &Activity,
        email: &str,
    ) -> Result<InsertOutcome, RepositoryError> {
        let statement = Statement::from_sql_and_values(
            self.db.get_database_backend(),
            SQL_INSERT_WITHIN_CAPACITY,
            [
                Value::from(email),
                Value::from(activity.id().value()),
                Value::from(email),
            ],
        );
        let result = self
            .db
            .execute(statement)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() > 0 {
            return Ok(InsertOutcome::Inserted);
        }

        // nothing inserted: find out which guard stopped it
        let existing = self
            .find_by_activity_and_email(activity.id(), email)
            .await?;
        if existing.is_some() {
            Ok(InsertOutcome::AlreadyRegistered)
        } else {
            Ok(InsertOutcome::CapacityReached)
        }
    }

    async fn delete(&self, id: ParticipantId) -> Result<bool, RepositoryError> {
        let result = participants::Entity::delete_by_id(id.value())
            .exec(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
