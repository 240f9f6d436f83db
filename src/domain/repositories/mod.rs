pub mod activity_repository;
pub mod participant_repository;
