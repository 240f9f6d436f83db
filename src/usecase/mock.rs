//! In-memory repositories for usecase tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        activity::{Activity, ActivityId},
        participant::{Participant, ParticipantId},
    },
    repositories::{
        activity_repository::ActivityRepository,
        participant_repository::{InsertOutcome, ParticipantRepository},
    },
};

#[derive(Default)]
struct State {
    activities: Vec<Activity>,
    participants: Vec<Participant>,
    next_id: i32,
    steal_next_seat: bool,
    duplicate_next_insert: bool,
    vanish_before_delete: bool,
}

impl State {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn count(&self, activity_id: ActivityId) -> u64 {
        self.participants
            .iter()
            .filter(|p| p.activity_id() == activity_id)
            .count() as u64
    }
}

/// One shared store backing both repository traits
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_activity(&self, name: &str, max_participants: i32) -> ActivityId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let activity = Activity::new(
            id,
            name.to_string(),
            format!("{} description", name),
            "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants,
        )
        .unwrap();
        state.activities.push(activity);
        ActivityId::new(id)
    }

    pub fn add_participant(&self, activity_id: ActivityId, email: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state
            .participants
            .push(Participant::new(id, email.to_string(), activity_id.value()));
    }

    pub fn activity_id_of(&self, name: &str) -> ActivityId {
        let state = self.state.lock().unwrap();
        state
            .activities
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.id())
            .unwrap()
    }

    pub fn emails_of(&self, name: &str) -> Vec<String> {
        let activity_id = self.activity_id_of(name);
        let state = self.state.lock().unwrap();
        state
            .participants
            .iter()
            .filter(|p| p.activity_id() == activity_id)
            .map(|p| p.email().to_string())
            .collect()
    }

    /// The next guarded insert finds one more seat taken than the caller counted
    pub fn steal_next_seat(&self) {
        self.state.lock().unwrap().steal_next_seat = true;
    }

    /// The next guarded insert finds the same email already registered
    pub fn duplicate_next_insert(&self) {
        self.state.lock().unwrap().duplicate_next_insert = true;
    }

    /// The next delete finds its row already removed
    pub fn vanish_before_delete(&self) {
        self.state.lock().unwrap().vanish_before_delete = true;
    }
}

#[async_trait]
impl ActivityRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Activity>, RepositoryError> {
        Ok(self.state.lock().unwrap().activities.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.activities.iter().find(|a| a.name() == name).cloned())
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryStore {
    async fn find_by_activity_and_email(
        &self,
        activity_id: ActivityId,
        email: &str,
    ) -> Result<Option<Participant>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .participants
            .iter()
            .find(|p| p.activity_id() == activity_id && p.email() == email)
            .cloned())
    }

    async fn count_by_activity(&self, activity_id: ActivityId) -> Result<u64, RepositoryError> {
        Ok(self.state.lock().unwrap().count(activity_id))
    }

    async fn find_emails_by_activity(
        &self,
        activity_id: ActivityId,
    ) -> Result<Vec<String>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .participants
            .iter()
            .filter(|p| p.activity_id() == activity_id)
            .map(|p| p.email().to_string())
            .collect())
    }

    async fn insert_within_capacity(
        &self,
        activity: &Activity,
        email: &str,
    ) -> Result<InsertOutcome, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.steal_next_seat {
            state.steal_next_seat = false;
            let id = state.next_id();
            state.participants.push(Participant::new(
                id,
                format!("intruder-{}@x.com", id),
                activity.id().value(),
            ));
        }
        if state.duplicate_next_insert {
            state.duplicate_next_insert = false;
            let id = state.next_id();
            state
                .participants
                .push(Participant::new(id, email.to_string(), activity.id().value()));
        }

        if state
            .participants
            .iter()
            .any(|p| p.activity_id() == activity.id() && p.email() == email)
        {
            return Ok(InsertOutcome::AlreadyRegistered);
        }
        if activity
            .max_participants()
            .is_reached_by(state.count(activity.id()))
        {
            return Ok(InsertOutcome::CapacityReached);
        }

        let id = state.next_id();
        state
            .participants
            .push(Participant::new(id, email.to_string(), activity.id().value()));
        Ok(InsertOutcome::Inserted)
    }

    async fn delete(&self, id: ParticipantId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.vanish_before_delete {
            state.vanish_before_delete = false;
            state.participants.retain(|p| p.id() != id);
        }
        let before = state.participants.len();
        state.participants.retain(|p| p.id() != id);
        Ok(state.participants.len() != before)
    }
}
