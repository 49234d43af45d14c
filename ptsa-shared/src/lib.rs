//! # PTSA Shared Library
//!
//! This crate contains the data layer used to bootstrap the PTSA database:
//! connection pooling, schema migrations, models, password hashing and the
//! seeding routines run on first deployment.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing
//! - `bootstrap`: Database initialization routine
//! - `db`: Connection pool and migrations
//! - `error`: Common error types
//! - `models`: Database models and data structures
//! - `seed`: Seeders used to populate an empty database

pub mod auth;
pub mod bootstrap;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;

/// Current version of the PTSA shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
