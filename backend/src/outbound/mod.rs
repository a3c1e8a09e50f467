//! Outbound adapters implementing domain ports against infrastructure.
//!
//! - **persistence**: PostgreSQL-backed user lookups using Diesel ORM.

pub mod persistence;
