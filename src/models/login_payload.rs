use crate::models::user::UserRecord;
use serde::{Deserialize, Serialize};

/// Reduced view of a user sent back in an authentication response.
///
/// Fields are copied verbatim from the source record. Nothing is validated or
/// defaulted: a record without an `id` or `type_user` produces a payload
/// without it, and the field is left out of the JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "typeUser", default, skip_serializing_if = "Option::is_none")]
    pub type_user: Option<i64>,
}

impl LoginPayload {
    pub fn new(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            type_user: user.type_user,
        }
    }
}

impl From<&UserRecord> for LoginPayload {
    fn from(user: &UserRecord) -> Self {
        Self::new(user)
    }
}
