use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

pub type Description = String;
pub type Schedule = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityId(i32);
impl ActivityId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Seat capacity of an activity, always positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity(u32);
impl Capacity {
    pub fn new(value: i32) -> Result<Self, DomainError> {
        match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(Self(v)),
            _ => Err(DomainError::InvalidCapacity),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// true when `count` participants leave no open seat
    pub fn is_reached_by(&self, count: u64) -> bool {
        count >= u64::from(self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    id: ActivityId,
    name: String,
    description: Description,
    schedule: Schedule,
    max_participants: Capacity,
}

impl Activity {
    pub fn new(
        id: i32,
        name: String,
        description: Description,
        schedule: Schedule,
        max_participants: i32,
    ) -> Result<Self, DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyActivityName);
        }

        Ok(Self {
            id: ActivityId(id),
            name,
            description,
            schedule,
            max_participants: Capacity::new(max_participants)?,
        })
    }

    pub fn id(&self) -> ActivityId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn schedule(&self) -> &str {
        &self.schedule
    }
    pub fn max_participants(&self) -> Capacity {
        self.max_participants
    }
}

/// An activity together with the emails registered for it, in signup order
#[derive(Debug, Clone)]
pub struct ActivityRoster {
    pub activity: Activity,
    pub participants: Vec<String>,
}
