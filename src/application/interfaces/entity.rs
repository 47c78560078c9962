use crate::error::AppError;
use crate::model::entity::EntityName;
use crate::model::requests::EntityFilter;
use async_trait::async_trait;
use serde_json::Value;

/// Generic access to any entity type of the application.
///
/// Records are returned exactly as the server sent them.
#[async_trait]
pub trait EntityService: Send + Sync {
    /// Lists all records of an entity type
    ///
    /// `GET apps/{app_id}/entities/{entity}`
    async fn list_entities(&self, entity: &EntityName) -> Result<Value, AppError>;

    /// Lists the records matching a server-side filter
    ///
    /// # Arguments
    /// * `entity` - Entity type
    /// * `filter` - Field conditions, sent as query parameters
    async fn filter_entities(
        &self,
        entity: &EntityName,
        filter: &EntityFilter,
    ) -> Result<Value, AppError>;

    /// Creates a record
    ///
    /// `POST apps/{app_id}/entities/{entity}` with `data` as body
    async fn create_entity(&self, entity: &EntityName, data: &Value) -> Result<Value, AppError>;

    /// Updates a record by identifier
    ///
    /// `PUT apps/{app_id}/entities/{entity}/{entity_id}` with the partial
    /// update as body
    ///
    /// # Returns
    /// * `Ok(Value)` - The record after the update
    /// * `Err(AppError)` - If the request fails
    async fn update_entity(
        &self,
        entity: &EntityName,
        entity_id: &str,
        update_data: &Value,
    ) -> Result<Value, AppError>;
}
