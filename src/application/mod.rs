pub mod dto;
pub mod error;
pub mod mapping;
pub mod ports;

pub use error::ApplicationResult;
