use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entity::activities;
use crate::domain::{
    error::RepositoryError, models::activity::Activity,
    repositories::activity_repository::ActivityRepository,
};

#[derive(Clone)]
pub struct SqliteActivityRepository {
    db: DatabaseConnection,
}

impl SqliteActivityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(model: activities::Model) -> Result<Activity, RepositoryError> {
    Activity::new(
        model.id,
        model.name,
        model.description,
        model.schedule,
        model.max_participants,
    )
    .map_err(|e| RepositoryError::DatabaseError(e.to_string()))
}

#[async_trait]
impl ActivityRepository for SqliteActivityRepository {
    async fn find_all(&self) -> Result<Vec<Activity>, RepositoryError> {
        let models = activities::Entity::find()
            .order_by_asc(activities::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(to_domain).collect()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, RepositoryError> {
        let activity = activities::Entity::find()
            .filter(activities::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        activity.map(to_domain).transpose()
    }
}
