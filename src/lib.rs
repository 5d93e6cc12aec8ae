pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod services;
pub mod types;

pub use api::models::*;
pub use database::models::{Connection, Operator, OperatorType, SyncOperation};
pub use database::{ConfigRepository, MemoryRepository, RepositoryError};
pub use error::ApiError;
pub use services::{IdGenerator, OperationError, OperationsService, UuidGenerator};
