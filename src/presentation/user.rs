/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

string_enum! {
    /// Role of the user in the app
    pub enum Role {
        /// Back-office operator with access to every client
        Admin => "admin",
        /// Regular client of the platform
        User => "user",
    }
}

string_enum! {
    /// Declared appetite for risk
    pub enum RiskProfile {
        /// Capital preservation first
        Conservative => "conservative",
        /// Balanced between growth and preservation
        Moderate => "moderate",
        /// Growth first, accepts large drawdowns
        Aggressive => "aggressive",
    }
}

string_enum! {
    /// Self-assessed trading experience
    pub enum TradingExperience {
        /// Little or no trading history
        Novice => "novice",
        /// Some years of occasional trading
        Average => "average",
        /// Regular derivatives trader
        Advanced => "advanced",
    }
}

string_enum! {
    /// Onboarding state of the account
    pub enum AccountStatus {
        /// Application received, not reviewed
        Pending => "pending",
        /// Application accepted, account not funded yet
        Approved => "approved",
        /// Account open for trading
        Active => "active",
        /// Trading blocked by the desk
        Suspended => "suspended",
    }
}

string_enum! {
    /// Know-your-customer review state
    pub enum KycStatus {
        /// No documents received
        Pending => "pending",
        /// Documents received, under review
        Submitted => "submitted",
        /// Identity verified
        Approved => "approved",
        /// Documents refused
        Rejected => "rejected",
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        AccountStatus::Pending
    }
}

impl Default for KycStatus {
    fn default() -> Self {
        KycStatus::Pending
    }
}

/// A `User` record.
///
/// Missing or `null` status fields take the server-side defaults
/// (`pending`) and missing or `null` balances default to zero.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    /// Record identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Role of the user in the app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Login email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Full name of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Client phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Client address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Date of birth as sent by the server
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Available investment capital
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<f64>,
    /// Declared appetite for risk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<RiskProfile>,
    /// Self-assessed trading experience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trading_experience: Option<TradingExperience>,
    /// Onboarding state, `pending` when unset
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub account_status: AccountStatus,
    /// Cash balance in account currency, zero when unset
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub account_balance: f64,
    /// Realised and unrealised result across trades, zero when unset
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub total_profit_loss: f64,
    /// KYC review state, `pending` when unset
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub kyc_status: KycStatus,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
