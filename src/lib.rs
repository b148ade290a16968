pub mod amounts;
pub mod balance;
pub mod config;
pub mod constants;
pub mod currency;
pub mod error;
pub mod logger;
pub mod models;
pub mod report;
pub mod service;
pub mod split;
pub mod storage;

pub use error::SplitbookError;
pub use logger::in_memory::InMemoryAuditLogger;
pub use service::LedgerService;
pub use split::{SplitMethod, SplitSession, SplitTotals};
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests; // Include integration tests
