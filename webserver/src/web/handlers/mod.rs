//! Request handlers

pub mod dashboard;
pub mod health;
pub mod posts;
pub mod providers;
pub mod subscribers;
