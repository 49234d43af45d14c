//! # PTSA Database Initializer Library
//!
//! ## Modules
//!
//! - `config`: Configuration loaded from the environment

pub mod config;
