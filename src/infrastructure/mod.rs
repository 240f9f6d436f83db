pub mod activity_repository;
pub mod entity;
pub mod participant_repository;
pub mod schema;
pub mod seed;
