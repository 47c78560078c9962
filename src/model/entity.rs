/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity types known to the application.
///
/// The entity API is generic, so any other type name can be addressed
/// through [`EntityName::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityName {
    /// Futures and options positions held for a client
    Trade,
    /// Client documents (agreements, KYC files)
    Document,
    /// Client support requests
    SupportTicket,
    /// Platform users
    User,
    /// Any other entity type, by its exact name
    Custom(String),
}

impl EntityName {
    /// Name used in the URL
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            EntityName::Trade => "Trade",
            EntityName::Document => "Document",
            EntityName::SupportTicket => "SupportTicket",
            EntityName::User => "User",
            EntityName::Custom(name) => name,
        }
    }

    /// Fields the server accepts as filters for this entity type.
    ///
    /// Informational only; filters are not checked against this list.
    #[must_use]
    pub fn filterable_fields(&self) -> &'static [&'static str] {
        match self {
            EntityName::Trade => &[
                "client_id",
                "symbol",
                "commodity",
                "position_type",
                "contract_size",
                "entry_price",
                "current_price",
                "strike_price",
                "expiry_date",
                "purchase_date",
                "status",
                "profit_loss",
                "profit_loss_percentage",
            ],
            EntityName::Document => &["client_id", "document_type", "file_url", "status", "signed"],
            EntityName::SupportTicket => &[
                "client_id",
                "subject",
                "message",
                "status",
                "priority",
                "response",
            ],
            EntityName::User | EntityName::Custom(_) => &[],
        }
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EntityName {
    fn from(name: &str) -> Self {
        match name {
            "Trade" => EntityName::Trade,
            "Document" => EntityName::Document,
            "SupportTicket" => EntityName::SupportTicket,
            "User" => EntityName::User,
            other => EntityName::Custom(other.to_string()),
        }
    }
}

impl From<String> for EntityName {
    fn from(name: String) -> Self {
        EntityName::from(name.as_str())
    }
}

impl From<EntityName> for String {
    fn from(name: EntityName) -> Self {
        name.as_str().to_string()
    }
}

/// Path of an entity collection: `apps/{app_id}/entities/{entity}`
pub fn entities_path(app_id: &str, entity: &EntityName) -> Result<String, AppError> {
    let app_id = path_segment("app id", app_id)?;
    let entity = path_segment("entity name", entity.as_str())?;
    Ok(format!("apps/{app_id}/entities/{entity}"))
}

/// Path of a single record: `apps/{app_id}/entities/{entity}/{entity_id}`
pub fn entity_path(app_id: &str, entity: &EntityName, entity_id: &str) -> Result<String, AppError> {
    let collection = entities_path(app_id, entity)?;
    let entity_id = path_segment("entity id", entity_id)?;
    Ok(format!("{collection}/{entity_id}"))
}

fn path_segment<'a>(what: &str, value: &'a str) -> Result<&'a str, AppError> {
    if value.is_empty() {
        return Err(AppError::InvalidInput(format!("{what} must not be empty")));
    }
    if value.contains('/') {
        return Err(AppError::InvalidInput(format!("{what} must not contain '/': {value}")));
    }
    Ok(value)
}
