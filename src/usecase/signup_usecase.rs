use tracing::{debug, info};

use crate::domain::{
    error::DomainError,
    models::activity::Activity,
    repositories::{
        activity_repository::ActivityRepository,
        participant_repository::{InsertOutcome, ParticipantRepository},
    },
};

#[derive(Debug)]
pub struct SignupResult {
    pub activity: Activity,
    pub email: String,
}

pub struct SignupUsecase<A: ActivityRepository, P: ParticipantRepository> {
    activity_repository: A,
    participant_repository: P,
}

impl<A: ActivityRepository, P: ParticipantRepository> SignupUsecase<A, P> {
    pub fn new(activity_repository: A, participant_repository: P) -> Self {
        Self {
            activity_repository,
            participant_repository,
        }
    }

    pub async fn signup(
        &self,
        activity_name: String,
        email: String,
    ) -> Result<SignupResult, DomainError>
    where
        A: Send + Sync,
        P: Send + Sync,
    {
        let activity = self
            .activity_repository
            .find_by_name(&activity_name)
            .await?
            .ok_or(DomainError::ActivityNotFound)?;

        let existing = self
            .participant_repository
            .find_by_activity_and_email(activity.id(), &email)
            .await?;
        if existing.is_some() {
            debug!(activity = %activity_name, %email, "duplicate signup rejected");
            return Err(DomainError::AlreadySignedUp);
        }

        let count = self
            .participant_repository
            .count_by_activity(activity.id())
            .await?;
        if activity.max_participants().is_reached_by(count) {
            debug!(activity = %activity_name, count, "signup rejected, activity full");
            return Err(DomainError::ActivityFull);
        }

        // the checks above only pick the error message; the insert re-checks both
        // conditions itself so a concurrent signup cannot slip past them
        match self
            .participant_repository
            .insert_within_capacity(&activity, &email)
            .await?
        {
            InsertOutcome::Inserted => {
                info!(activity = %activity_name, %email, "student signed up");
                Ok(SignupResult { activity, email })
            }
            InsertOutcome::AlreadyRegistered => Err(DomainError::AlreadySignedUp),
            InsertOutcome::CapacityReached => Err(DomainError::ActivityFull),
        }
    }
}
