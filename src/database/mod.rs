pub mod memory;
pub mod models;
pub mod repository;

pub use memory::MemoryRepository;
pub use repository::{ConfigRepository, RecordKind, RepositoryError};
