//! Common library for the Pavilion storefront backend
//!
//! This crate provides shared functionality used by the services in the
//! Pavilion backend: database connectivity with a process-wide memoized
//! connection pool, the data-access error taxonomy, and API base-URL
//! resolution for server-side callers.
//!
//! ```rust,no_run
//! use common::database::{ensure_pool, health_check};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = ensure_pool().await?;
//!     let is_healthy = health_check(pool).await?;
//!     println!("Database health check: {}", is_healthy);
//!     Ok(())
//! }
//! ```

pub mod api_base;
pub mod database;
pub mod error;
