use crate::error::AppError;
use crate::model::requests::EntityFilter;
use crate::presentation::support::SupportTicket;
use async_trait::async_trait;
use serde_json::Value;

/// Typed access to `SupportTicket` records
#[async_trait]
pub trait SupportTicketService: Send + Sync {
    /// Lists all tickets
    async fn list_support_tickets(&self) -> Result<Vec<SupportTicket>, AppError>;

    /// Lists the tickets matching a filter
    async fn filter_support_tickets(
        &self,
        filter: &EntityFilter,
    ) -> Result<Vec<SupportTicket>, AppError>;

    /// Opens a new ticket
    async fn create_support_ticket(
        &self,
        ticket: &SupportTicket,
    ) -> Result<SupportTicket, AppError>;

    /// Applies a partial update to a ticket, e.g. the desk's response
    async fn update_support_ticket(
        &self,
        ticket_id: &str,
        update_data: &Value,
    ) -> Result<SupportTicket, AppError>;
}
