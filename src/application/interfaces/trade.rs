use crate::error::AppError;
use crate::model::requests::EntityFilter;
use crate::presentation::trade::Trade;
use async_trait::async_trait;
use serde_json::Value;

/// Typed access to `Trade` records
#[async_trait]
pub trait TradeService: Send + Sync {
    /// Lists all trades
    async fn list_trades(&self) -> Result<Vec<Trade>, AppError>;

    /// Lists the trades matching a filter, e.g. one client's positions
    async fn filter_trades(&self, filter: &EntityFilter) -> Result<Vec<Trade>, AppError>;

    /// Applies a partial update to a trade and returns the updated record
    async fn update_trade(&self, trade_id: &str, update_data: &Value) -> Result<Trade, AppError>;
}
