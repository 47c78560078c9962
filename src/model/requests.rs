/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::Serialize;
use serde_json::{Map, Value};

/// Server-side filter for an entity listing.
///
/// Each field becomes a query parameter of the `GET` request; matching is
/// done by the platform, the client never filters records itself.
///
/// ```
/// use base44_client::model::requests::EntityFilter;
///
/// let filter = EntityFilter::new()
///     .with("symbol", "GCZ25")
///     .with("status", "open");
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EntityFilter {
    fields: Map<String, Value>,
}

impl EntityFilter {
    /// Creates an empty filter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field condition
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Restricts the listing to records of one client
    #[must_use]
    pub fn client_id(self, client_id: impl Into<String>) -> Self {
        self.with("client_id", client_id.into())
    }

    /// Restricts the listing to records with the given status
    #[must_use]
    pub fn status(self, status: impl Into<String>) -> Self {
        self.with("status", status.into())
    }

    /// Number of conditions
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the filter has no conditions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The filter as a JSON object, ready to be used as query data
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

impl From<EntityFilter> for Value {
    fn from(filter: EntityFilter) -> Self {
        Value::Object(filter.fields)
    }
}
