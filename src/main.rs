mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::path::Path;

use axum::{Router, response::Redirect, routing::get};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{
    config::AppConfig,
    infrastructure::{
        activity_repository::SqliteActivityRepository,
        participant_repository::SqliteParticipantRepository, schema, seed,
    },
    presentation::handlers::activity_handler::create_activity_router,
};

/// Assemble the full application around an open database connection
fn build_app(db: DatabaseConnection, static_dir: &Path) -> Router {
    let activity_repository = SqliteActivityRepository::new(db.clone());
    let participant_repository = SqliteParticipantRepository::new(db);

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .merge(create_activity_router(
            activity_repository,
            participant_repository,
        ))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "activities=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .sqlx_logging(config.sql_logging);

    let db = Database::connect(opt).await?;
    info!("Database connected at {}", config.database_url);

    schema::create_tables(&db).await?;
    if config.seed_activities {
        seed::seed_default_activities(&db).await?;
    }

    let app = build_app(db, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Activities server listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
