use sea_orm::{ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use tracing::info;

use super::entity::activities;

/// name, description, schedule, max_participants
const DEFAULT_ACTIVITIES: &[(&str, &str, &str, i32)] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
    ),
];

/// Insert the default activities when the table is empty.
/// Returns the number of rows inserted.
pub async fn seed_default_activities(db: &DatabaseConnection) -> Result<usize, DbErr> {
    if activities::Entity::find().count(db).await? > 0 {
        return Ok(0);
    }

    let models = DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max_participants)| activities::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            schedule: Set(schedule.to_string()),
            max_participants: Set(*max_participants),
            ..Default::default()
        });
    activities::Entity::insert_many(models).exec(db).await?;

    info!(count = DEFAULT_ACTIVITIES.len(), "seeded default activities");
    Ok(DEFAULT_ACTIVITIES.len())
}
