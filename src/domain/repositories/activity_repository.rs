use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::activity::Activity};

#[async_trait]
pub trait ActivityRepository {
    /// All activities in id order
    async fn find_all(&self) -> Result<Vec<Activity>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Activity>, RepositoryError>;
}
