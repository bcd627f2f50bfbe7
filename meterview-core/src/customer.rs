use serde::{Deserialize, Serialize};

/// Display name used when a record carries no usable name at all.
pub const UNNAMED_CUSTOMER: &str = "Unnamed customer";

/// A customer record as the billing platform returns it.
///
/// Accounts differ in which identifiers they populate, so every field
/// is optional; anything else on the record is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingest_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The `{id, name}` pair the picker needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

impl Customer {
    /// Normalize an upstream record.
    ///
    /// `id` prefers `id`, then `customer_id`, `ingest_alias`, `name`.
    /// `name` prefers `name`, then `ingest_alias`, `id`, then [`UNNAMED_CUSTOMER`].
    /// The two chains are independent; only absent fields fall through,
    /// an empty string is kept as is.
    pub fn normalize(record: &CustomerRecord) -> Self {
        let id = record
            .id
            .as_ref()
            .or(record.customer_id.as_ref())
            .or(record.ingest_alias.as_ref())
            .or(record.name.as_ref())
            .cloned()
            .unwrap_or_default();

        let name = record
            .name
            .as_ref()
            .or(record.ingest_alias.as_ref())
            .or(record.id.as_ref())
            .cloned()
            .unwrap_or_else(|| UNNAMED_CUSTOMER.to_string());

        Self { id, name }
    }
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Self::normalize(&record)
    }
}
