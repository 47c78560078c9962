/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Base44 Client Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use base44_client::prelude::*;
//!
//! let config = Config::with_credentials("api-key", "app-id");
//! let client = Client::new(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENTS AND SERVICES
// ============================================================================

pub use crate::application::client::Client;
pub use crate::application::{
    DocumentService, EntityService, SupportTicketService, TradeService,
};
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUESTS AND MODELS
// ============================================================================

pub use crate::model::entity::EntityName;
pub use crate::model::requests::EntityFilter;
pub use crate::presentation::document::{Document, DocumentType};
pub use crate::presentation::support::{SupportTicket, TicketStatus};
pub use crate::presentation::trade::{PositionType, Trade, TradeStatus};
pub use crate::presentation::user::User;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
