/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

string_enum! {
    /// Handling state of a ticket
    pub enum TicketStatus {
        /// Waiting for the desk
        Open => "open",
        /// Being worked on
        InProgress => "in_progress",
        /// Answered and closed
        Resolved => "resolved",
    }
}

/// A `SupportTicket` record as returned by the entity API
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct SupportTicket {
    /// Record identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Owning client (user id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Answer from the desk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SupportTicket {
    /// New ticket payload for a client
    #[must_use]
    pub fn new(
        client_id: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(client_id.into()),
            subject: Some(subject.into()),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Sets the priority
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}
