//! Restaurant table inspector library.
//!
//! Connects to PostgreSQL and prints diagnostic statistics about the
//! `restaurants` table: row count, sample rows, counts per region and
//! category, and the most recently created rows.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `db`: Database session management.
//! - `errors`: Error handling types.
//! - `inspector`: The fixed inspection sequence.
//! - `models`: Row types read from the table.
//! - `report`: Console output formatting.
//! - `store`: Query layer over the restaurants table.

pub mod config;
pub mod db;
pub mod errors;
pub mod inspector;
pub mod models;
pub mod report;
pub mod store;
