use tracing::{debug, info};

use crate::domain::{
    error::DomainError,
    models::activity::Activity,
    repositories::{
        activity_repository::ActivityRepository, participant_repository::ParticipantRepository,
    },
};

#[derive(Debug)]
pub struct UnregisterResult {
    pub activity: Activity,
    pub email: String,
}

pub struct UnregisterUsecase<A: ActivityRepository, P: ParticipantRepository> {
    activity_repository: A,
    participant_repository: P,
}

impl<A: ActivityRepository, P: ParticipantRepository> UnregisterUsecase<A, P> {
    pub fn new(activity_repository: A, participant_repository: P) -> Self {
        Self {
            activity_repository,
            participant_repository,
        }
    }

    pub async fn unregister(
        &self,
        activity_name: String,
        email: String,
    ) -> Result<UnregisterResult, DomainError>
    where
        A: Send + Sync,
        P: Send + Sync,
    {
        let activity = self
            .activity_repository
            .find_by_name(&activity_name)
            .await?
            .ok_or(DomainError::ActivityNotFound)?;

        let participant = self
            .participant_repository
            .find_by_activity_and_email(activity.id(), &email)
            .await?
            .ok_or(DomainError::NotSignedUp)?;

        debug!(
            participant = participant.id().value(),
            activity_id = participant.activity_id().value(),
            email = participant.email(),
            "removing participant"
        );

        // zero rows means a concurrent unregister got there first
        if !self.participant_repository.delete(participant.id()).await? {
            debug!(activity = %activity_name, %email, "participant already removed");
            return Err(DomainError::NotSignedUp);
        }

        info!(activity = %activity_name, %email, "student unregistered");
        Ok(UnregisterResult { activity, email })
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::usecase::mock::InMemoryStore;

    #[fixture]
    fn store() -> InMemoryStore {
        let store = InMemoryStore::new();
        let chess = store.add_activity("Chess Club", 12);
        store.add_participant(chess, "michael@mergington.edu");
        store.add_participant(chess, "daniel@mergington.edu");
        store
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregister_positive(store: InMemoryStore) {
        let usecase = UnregisterUsecase::new(store.clone(), store.clone());

        let result = usecase
            .unregister(
                "Chess Club".to_string(),
                "michael@mergington.edu".to_string(),
            )
            .await
            .unwrap();

        assert_eq!(result.activity.name(), "Chess Club");
        assert_eq!(store.emails_of("Chess Club"), vec!["daniel@mergington.edu"]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregister_unknown_activity_negative(store: InMemoryStore) {
        let usecase = UnregisterUsecase::new(store.clone(), store);

        let result = usecase
            .unregister("Unknown".to_string(), "michael@mergington.edu".to_string())
            .await;

        assert!(matches!(result, Err(DomainError::ActivityNotFound)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregister_not_signed_up_negative(store: InMemoryStore) {
        let usecase = UnregisterUsecase::new(store.clone(), store.clone());

        let result = usecase
            .unregister("Chess Club".to_string(), "nobody@mergington.edu".to_string())
            .await;

        assert!(matches!(result, Err(DomainError::NotSignedUp)));
        assert_eq!(store.emails_of("Chess Club").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregister_twice_negative(store: InMemoryStore) {
        let usecase = UnregisterUsecase::new(store.clone(), store.clone());
        usecase
            .unregister("Chess Club".to_string(), "daniel@mergington.edu".to_string())
            .await
            .unwrap();

        let result = usecase
            .unregister("Chess Club".to_string(), "daniel@mergington.edu".to_string())
            .await;

        assert!(matches!(result, Err(DomainError::NotSignedUp)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_unregister_row_removed_before_delete_negative(store: InMemoryStore) {
        let usecase = UnregisterUsecase::new(store.clone(), store.clone());

        // a concurrent unregister deletes the row after the lookup
        store.vanish_before_delete();
        let result = usecase
            .unregister(
                "Chess Club".to_string(),
                "michael@mergington.edu".to_string(),
            )
            .await;

        assert!(matches!(result, Err(DomainError::NotSignedUp)));
        assert_eq!(store.emails_of("Chess Club"), vec!["daniel@mergington.edu"]);
    }
}
