use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `state` lookup table.
///
/// The lookup path hands these back exactly as storage returned them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StateRecord {
    pub id: i64,
    pub name: String,
    /// Unix timestamp of insertion
    pub created_at: i64,
    /// Unix timestamp of the last update
    pub updated_at: i64,
}

impl StateRecord {
    pub fn new(id: i64, name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
            updated_at: created_at,
        }
    }
}
