/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::document::DocumentService;
use crate::application::interfaces::entity::EntityService;
use crate::application::interfaces::support::SupportTicketService;
use crate::application::interfaces::trade::TradeService;
use crate::error::AppError;
use crate::model::entity::{EntityName, entities_path, entity_path};
use crate::model::http::HttpClient;
use crate::model::requests::EntityFilter;
use crate::presentation::document::Document;
use crate::presentation::support::SupportTicket;
use crate::presentation::trade::Trade;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the entity API of one Base44 application
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from configuration
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config)?);
        Ok(Self { http_client })
    }

    /// Creates a client configured from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Underlying HTTP client, for endpoints outside the entity API
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn app_id(&self) -> &str {
        &self.http_client.config().credentials.app_id
    }

    async fn list_as<T: DeserializeOwned>(
        &self,
        entity: &EntityName,
        filter: Option<&EntityFilter>,
    ) -> Result<Vec<T>, AppError> {
        let records = match filter {
            Some(f) => self.filter_entities(entity, f).await?,
            None => self.list_entities(entity).await?,
        };
        let records: Vec<T> = serde_json::from_value(records)?;
        debug!("{} records obtained: {}", entity, records.len());
        Ok(records)
    }

    async fn create_as<T: DeserializeOwned>(
        &self,
        entity: &EntityName,
        data: Value,
    ) -> Result<T, AppError> {
        let created = self.create_entity(entity, &data).await?;
        Ok(serde_json::from_value(created)?)
    }

    async fn update_as<T: DeserializeOwned>(
        &self,
        entity: &EntityName,
        entity_id: &str,
        update_data: &Value,
    ) -> Result<T, AppError> {
        let updated = self.update_entity(entity, entity_id, update_data).await?;
        Ok(serde_json::from_value(updated)?)
    }
}

#[async_trait]
impl EntityService for Client {
    async fn list_entities(&self, entity: &EntityName) -> Result<Value, AppError> {
        let path = entities_path(self.app_id(), entity)?;
        info!("Listing {} entities", entity);
        self.http_client.get_api(&path, None).await
    }

    async fn filter_entities(
        &self,
        entity: &EntityName,
        filter: &EntityFilter,
    ) -> Result<Value, AppError> {
        let path = entities_path(self.app_id(), entity)?;
        info!("Filtering {} entities on {} fields", entity, filter.len());
        self.http_client.get_api(&path, Some(&filter.to_value())).await
    }

    async fn create_entity(&self, entity: &EntityName, data: &Value) -> Result<Value, AppError> {
        let path = entities_path(self.app_id(), entity)?;
        info!("Creating {} entity", entity);
        self.http_client
            .make_api_request(&path, Method::POST, Some(data))
            .await
    }

    async fn update_entity(
        &self,
        entity: &EntityName,
        entity_id: &str,
        update_data: &Value,
    ) -> Result<Value, AppError> {
        let path = entity_path(self.app_id(), entity, entity_id)?;
        info!("Updating {} entity {}", entity, entity_id);
        self.http_client.put_api(&path, update_data).await
    }
}

#[async_trait]
impl TradeService for Client {
    async fn list_trades(&self) -> Result<Vec<Trade>, AppError> {
        self.list_as(&EntityName::Trade, None).await
    }

    async fn filter_trades(&self, filter: &EntityFilter) -> Result<Vec<Trade>, AppError> {
        self.list_as(&EntityName::Trade, Some(filter)).await
    }

    async fn update_trade(&self, trade_id: &str, update_data: &Value) -> Result<Trade, AppError> {
        self.update_as(&EntityName::Trade, trade_id, update_data).await
    }
}

#[async_trait]
impl DocumentService for Client {
    async fn list_documents(&self) -> Result<Vec<Document>, AppError> {
        self.list_as(&EntityName::Document, None).await
    }

    async fn filter_documents(&self, filter: &EntityFilter) -> Result<Vec<Document>, AppError> {
        self.list_as(&EntityName::Document, Some(filter)).await
    }

    async fn create_document(&self, document: &Document) -> Result<Document, AppError> {
        let data = serde_json::to_value(document)?;
        self.create_as(&EntityName::Document, data).await
    }

    async fn update_document(
        &self,
        document_id: &str,
        update_data: &Value,
    ) -> Result<Document, AppError> {
        self.update_as(&EntityName::Document, document_id, update_data)
            .await
    }
}

#[async_trait]
impl SupportTicketService for Client {
    async fn list_support_tickets(&self) -> Result<Vec<SupportTicket>, AppError> {
        self.list_as(&EntityName::SupportTicket, None).await
    }

    async fn filter_support_tickets(
        &self,
        filter: &EntityFilter,
    ) -> Result<Vec<SupportTicket>, AppError> {
        self.list_as(&EntityName::SupportTicket, Some(filter)).await
    }

    async fn create_support_ticket(
        &self,
        ticket: &SupportTicket,
    ) -> Result<SupportTicket, AppError> {
        let data = serde_json::to_value(ticket)?;
        self.create_as(&EntityName::SupportTicket, data).await
    }

    async fn update_support_ticket(
        &self,
        ticket_id: &str,
        update_data: &Value,
    ) -> Result<SupportTicket, AppError> {
        self.update_as(&EntityName::SupportTicket, ticket_id, update_data)
            .await
    }
}
