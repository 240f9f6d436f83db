use crate::domain::{
    error::DomainError,
    models::activity::ActivityRoster,
    repositories::{
        activity_repository::ActivityRepository, participant_repository::ParticipantRepository,
    },
};

pub struct ListActivitiesUsecase<A: ActivityRepository, P: ParticipantRepository> {
    activity_repository: A,
    participant_repository: P,
}

impl<A: ActivityRepository, P: ParticipantRepository> ListActivitiesUsecase<A, P> {
    pub fn new(activity_repository: A, participant_repository: P) -> Self {
        Self {
            activity_repository,
            participant_repository,
        }
    }

    pub async fn list(&self) -> Result<Vec<ActivityRoster>, DomainError>
    where
        A: Send + Sync,
        P: Send + Sync,
    {
        let activities = self.activity_repository.find_all().await?;

        let mut rosters = Vec::with_capacity(activities.len());
        for activity in activities {
            let participants = self
                .participant_repository
                .find_emails_by_activity(activity.id())
                .await?;
            rosters.push(ActivityRoster {
                activity,
                participants,
            });
        }

        Ok(rosters)
    }
}
