mod client;
mod error;
pub mod models;
mod records;

pub use client::{AirtableClient, DEFAULT_API_URL};
pub use error::AirtableError;
pub use models::{ListRecordsResponse, Record};

pub type Result<T> = std::result::Result<T, AirtableError>;
