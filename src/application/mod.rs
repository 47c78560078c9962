/// Client implementing the entity services
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;

pub use interfaces::document::DocumentService;
pub use interfaces::entity::EntityService;
pub use interfaces::support::SupportTicketService;
pub use interfaces::trade::TradeService;
