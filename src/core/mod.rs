pub mod attachment;
pub mod catalog;
pub mod committee;
pub mod errors;
pub mod export;
pub mod models;
pub mod record;
pub mod service;
pub mod stats;
pub mod tasks;
pub mod validation;

pub use errors::AedisError;
pub use models::{
    DashboardStats,
    Distribution,
    Member,
};
