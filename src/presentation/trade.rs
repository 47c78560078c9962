/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

string_enum! {
    /// Option side of a position
    pub enum PositionType {
        /// Right to buy the underlying
        Call => "call",
        /// Right to sell the underlying
        Put => "put",
    }
}

string_enum! {
    /// Lifecycle state of a trade
    pub enum TradeStatus {
        /// Position still open
        Active => "active",
        /// Position closed out
        Closed => "closed",
        /// Booked but not yet live
        Pending => "pending",
    }
}

/// A `Trade` record as returned by the entity API.
///
/// All fields are optional; the server owns the schema. Fields this type
/// does not know are kept in `extra`.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Trade {
    /// Record identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    /// Email of the creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Owning client (user id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Contract symbol, e.g. `GCZ25`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Underlying commodity name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commodity: Option<String>,
    /// Call or put
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_type: Option<PositionType>,
    /// Number of contracts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_size: Option<f64>,
    /// Premium paid at entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    /// Latest mark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    /// Option strike
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike_price: Option<f64>,
    /// Expiry date as sent by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// Purchase date as sent by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<String>,
    /// Lifecycle state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TradeStatus>,
    /// Profit or loss in account currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_loss: Option<f64>,
    /// Profit or loss relative to entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_loss_percentage: Option<f64>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Trade {
    /// Whether the trade is still open
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(TradeStatus::Active)
    }
}
