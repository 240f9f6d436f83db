use serde::{Deserialize, Serialize};

use crate::domain::models::activity::ActivityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantId(i32);
impl ParticipantId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// A student's registration for one activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    email: String,
    activity_id: ActivityId,
}

impl Participant {
    pub fn new(id: i32, email: String, activity_id: i32) -> Self {
        Self {
            id: ParticipantId::new(id),
            email,
            activity_id: ActivityId::new(activity_id),
        }
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn activity_id(&self) -> ActivityId {
        self.activity_id
    }
}
