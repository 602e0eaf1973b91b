pub mod archive;
pub mod config;
pub mod harvest;
pub mod logger;
pub mod source;
pub mod writer;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::archive::archive_existing;
pub use crate::config::{DescriptionFormat, HarvestConfig};
pub use crate::source::{HttpJobSource, JobListing, JobQuery, JobSource};
pub use crate::writer::{append_listings, read_listings};
