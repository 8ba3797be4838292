use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `user` table as the user subsystem stores it.
///
/// Both columns are nullable, so a record read back from storage (or decoded
/// from a partial JSON body) may lack either of them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    /// User ID
    #[serde(default)]
    pub id: Option<i64>,
    /// Numeric user type classification
    #[serde(default)]
    pub type_user: Option<i64>,
}

impl UserRecord {
    pub fn new(id: i64, type_user: i64) -> Self {
        Self {
            id: Some(id),
            type_user: Some(type_user),
        }
    }
}
