pub mod connection_operations;
pub mod error;
pub mod id;
pub mod operations;
pub mod translator;

pub use error::OperationError;
pub use id::{IdGenerator, UuidGenerator};
pub use operations::OperationsService;
pub use translator::OperationTranslator;
