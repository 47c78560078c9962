/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Base44 Client
//!
//! A small async client for the generic entity REST API of a Base44 hosted
//! application. Records of an entity type (`Trade`, `Document`,
//! `SupportTicket`, ...) can be listed, filtered server-side and updated by
//! identifier.
//!
//! ```ignore
//! use base44_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let trades = client.list_trades().await?;
//! let updated = client
//!     .update_trade("64f1c0", &serde_json::json!({"status": "closed"}))
//!     .await?;
//! ```

/// Client configuration and HTTP plumbing
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error type
pub mod error;
/// Request helpers and entity addressing
pub mod model;
/// Common re-exports
pub mod prelude;
/// Typed views of entity records
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Crate version as set in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
