use std::sync::Arc;

use crate::{
    domain::{
        error::DomainError,
        models::activity::ActivityRoster,
        repositories::{
            activity_repository::ActivityRepository, participant_repository::ParticipantRepository,
        },
    },
    usecase::{
        list_activities_usecase::ListActivitiesUsecase, signup_usecase::SignupUsecase,
        unregister_usecase::UnregisterUsecase,
    },
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use tracing::error;

// Request

/// query string of signup and unregister
#[derive(Serialize, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

// Response

/// one entry of the activity listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityInfo {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<ActivityRoster> for ActivityInfo {
    fn from(roster: ActivityRoster) -> Self {
        Self {
            description: roster.activity.description().to_string(),
            schedule: roster.activity.schedule().to_string(),
            max_participants: roster.activity.max_participants().value(),
            participants: roster.participants,
        }
    }
}

/// json object keyed by activity name, keys kept in listing order
pub struct ActivitiesResponse(pub Vec<(String, ActivityInfo)>);

impl Serialize for ActivitiesResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, info) in &self.0 {
            map.serialize_entry(name, info)?;
        }
        map.end()
    }
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::ActivityNotFound => StatusCode::NOT_FOUND,
            DomainError::AlreadySignedUp | DomainError::ActivityFull | DomainError::NotSignedUp => {
                StatusCode::BAD_REQUEST
            }
            DomainError::Repository(_)
            | DomainError::EmptyActivityName
            | DomainError::InvalidCapacity => {
                error!(error = %self, "request failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        detail: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/* Router Function and Handler Function */

// Activity Router

/// function return Router object
/// Suppose to be merged into main router

pub fn create_activity_router<
    A: ActivityRepository + Send + Sync + 'static + Clone,
    P: ParticipantRepository + Send + Sync + 'static + Clone,
>(
    activity_repository: A,
    participant_repository: P,
) -> Router {
    let state = AppState {
        list_service: Arc::new(ListActivitiesUsecase::new(
            activity_repository.clone(),
            participant_repository.clone(),
        )),
        signup_service: Arc::new(SignupUsecase::new(
            activity_repository.clone(),
            participant_repository.clone(),
        )),
        unregister_service: Arc::new(UnregisterUsecase::new(
            activity_repository,
            participant_repository,
        )),
    };

    Router::new()
        .route("/activities", get(list_activities::<A, P>))
        .route("/activities/{activity_name}/signup", post(signup::<A, P>))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister::<A, P>),
        )
        .with_state(state)
}

pub struct AppState<A: ActivityRepository, P: ParticipantRepository> {
    pub list_service: Arc<ListActivitiesUsecase<A, P>>,
    pub signup_service: Arc<SignupUsecase<A, P>>,
    pub unregister_service: Arc<UnregisterUsecase<A, P>>,
}

// derive(Clone) would demand A: Clone and P: Clone on every use
impl<A: ActivityRepository, P: ParticipantRepository> Clone for AppState<A, P> {
    fn clone(&self) -> Self {
        Self {
            list_service: Arc::clone(&self.list_service),
            signup_service: Arc::clone(&self.signup_service),
            unregister_service: Arc::clone(&self.unregister_service),
        }
    }
}

// handler function

/// handler function for the activity listing
async fn list_activities<
    A: ActivityRepository + Send + Sync,
    P: ParticipantRepository + Send + Sync,
>(
    State(state): State<AppState<A, P>>,
) -> Result<Json<ActivitiesResponse>, DomainError> {
    let rosters = state.list_service.list().await?;
    let entries: Vec<(String, ActivityInfo)> = rosters
        .into_iter()
        .map(|roster| (roster.activity.name().to_string(), roster.into()))
        .collect();
    Ok(Json(ActivitiesResponse(entries)))
}

/// handler function for signup
async fn signup<A: ActivityRepository + Send + Sync, P: ParticipantRepository + Send + Sync>(
    State(state): State<AppState<A, P>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, DomainError> {
    let result = state
        .signup_service
        .signup(activity_name, query.email)
        .await?;
    Ok(Json(MessageResponse {
        message: format!(
            "Signed up {} for {}",
            result.email,
            result.activity.name()
        ),
    }))
}

/// handler function for unregister
async fn unregister<
    A: ActivityRepository + Send + Sync,
    P: ParticipantRepository + Send + Sync,
>(
    State(state): State<AppState<A, P>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, DomainError> {
    let result = state
        .unregister_service
        .unregister(activity_name, query.email)
        .await?;
    Ok(Json(MessageResponse {
        message: format!(
            "Unregistered {} from {}",
            result.email,
            result.activity.name()
        ),
    }))
}
