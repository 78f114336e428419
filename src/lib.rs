//! fintrack - personal finance tracking over a record-storage service
//!
//! Accounts, budgets, bills, transactions, savings goals and categories are
//! stored as records in named tables behind the [`storage::RecordClient`]
//! contract. Services translate those records into typed models, and the
//! reports module rolls the models up into summaries.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and tracing setup
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, budgets, bills, ...)
//! - `storage`: The record-service contract and a JSON-file implementation
//! - `services`: One service per entity
//! - `reports`: Bill status, budget banding and summary rollups
//! - `display`: Plain-text formatting for terminal output
//! - `cli`: clap subcommands bridging arguments to services
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::services::BudgetService;
//! use fintrack::storage::LocalRecordStore;
//!
//! let store = LocalRecordStore::open("records.json")?;
//! let (summary, budgets) = BudgetService::new(&store).summary(month)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
