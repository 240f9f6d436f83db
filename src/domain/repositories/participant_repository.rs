use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        activity::{Activity, ActivityId},
        participant::{Participant, ParticipantId},
    },
};

/// Result of a guarded participant insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    AlreadyRegistered,
    CapacityReached,
}

#[async_trait]
pub trait ParticipantRepository {
    async fn find_by_activity_and_email(
        &self,
        activity_id: ActivityId,
        email: &str,
    ) -> Result<Option<Participant>, RepositoryError>;

    async fn count_by_activity(&self, activity_id: ActivityId) -> Result<u64, RepositoryError>;

    /// Emails registered for the activity, oldest signup first
    async fn find_emails_by_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<String>, RepositoryError>;

    /// Insert a participant only if the email is not yet registered for the
    /// activity and a seat is still open. Both conditions are checked by the
    /// same write.
    async fn insert_within_capacity(
        &self,
        activity: &Activity,
        email: &str,
    ) -> Result<InsertOutcome, RepositoryError>;

    /// Returns false when no row was deleted
    async fn delete(&self, id: ParticipantId) -> Result<bool, RepositoryError>;
}
