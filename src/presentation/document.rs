/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

string_enum! {
    /// Kind of identity or agreement document
    pub enum DocumentType {
        /// Passport scan
        Passport => "passport",
        /// Driving licence scan
        DrivingLicense => "driving_license",
    }
}

/// A `Document` record as returned by the entity API
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct Document {
    /// Record identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning client (user id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Kind of document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    /// Where the uploaded file is stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    /// Review state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Whether the client signed it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed: Option<bool>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
