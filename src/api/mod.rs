pub mod client;
pub mod format;
pub mod queries;
pub mod types;
