pub mod connection;
pub mod operation;

pub use connection::Connection;
pub use operation::{
    DbtConfig, ModelError, NormalizationConfig, NormalizationOption, Operator, OperatorType,
    SyncOperation,
};
