//! Fleet manager - boat inventory and maintenance budgets for a sailing club
//!
//! Tracks each boat in the club fleet, what it cost, and how much has been
//! spent on it. An expense is only authorized while the running total stays
//! within the boat's purchase price.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution
//! - `error`: Custom error types
//! - `models`: Boats, categories and money amounts
//! - `import`: Delimited boat record parsing
//! - `storage`: The fleet store and its JSON snapshot
//! - `audit`: Append-only activity log
//! - `display`: Fleet report formatting
//! - `cli`: Interactive menu
//!
//! # Example
//!
//! ```rust
//! use fleet::models::Money;
//! use fleet::storage::FleetStore;
//!
//! let mut store = FleetStore::new();
//! store.add_record("SAILING,Eagle,2015,Catalina 22,22,18000.00").unwrap();
//!
//! let decision = store.charge_expense("eagle", Money::from_dollars_cents(5000, 0)).unwrap();
//! assert!(decision.is_authorized());
//! assert_eq!(decision.remaining(), Money::from_dollars_cents(13000, 0));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod import;
pub mod models;
pub mod storage;

pub use error::{FleetError, FleetResult};
