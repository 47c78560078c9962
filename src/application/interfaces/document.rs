use crate::error::AppError;
use crate::model::requests::EntityFilter;
use crate::presentation::document::Document;
use async_trait::async_trait;
use serde_json::Value;

/// Typed access to `Document` records
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Lists all documents
    async fn list_documents(&self) -> Result<Vec<Document>, AppError>;

    /// Lists the documents matching a filter
    async fn filter_documents(&self, filter: &EntityFilter) -> Result<Vec<Document>, AppError>;

    /// Registers an uploaded document
    async fn create_document(&self, document: &Document) -> Result<Document, AppError>;

    /// Applies a partial update to a document
    async fn update_document(
        &self,
        document_id: &str,
        update_data: &Value,
    ) -> Result<Document, AppError>;
}
