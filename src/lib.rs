//! League Stats Toolkit
//!
//! Loads CSV exports of professional match records, filters them by league,
//! and computes descriptive statistics over the filtered subset.
//!
//! This library provides:
//! - `table`: CSV parsing and header/column resolution
//! - `filter`: primary-row and league subset derivation
//! - `stats`: aggregate metrics and threshold distributions
//! - `session`: the load/toggle/reset state machine owning all derived views
//! - `report`: the append-only result log and summary-table renderer
//! - `fetch`: dataset retrieval from a data directory
//!
//! Binaries:
//! - `league-stats`: interactive command loop over a loaded dataset

pub mod error;
pub mod fetch;
pub mod filter;
pub mod report;
pub mod session;
pub mod stats;
pub mod table;

// Re-export the types most callers touch
pub use error::{SessionError, StatsError};
pub use session::SessionState;
pub use table::{Header, Row, Table};
