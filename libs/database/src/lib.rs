//! Database connectivity for the pets service.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - `core_config::FromEnv` implementations for the config types
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::RetryConfig;
//!
//! let db = postgres::connect_from_config_with_retry(
//!     PostgresConfig::from_env()?,
//!     Some(RetryConfig::from_env()?),
//! )
//! .await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "pets_api").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, RetryConfig};
