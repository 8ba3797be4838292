use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ApiKeyQuery {
    pub api_key: String,
}

#[derive(Deserialize)]
pub struct PayloadQuery {
    pub api_key: String,
    pub user_id: i64,
}

#[derive(Deserialize)]
pub struct StateAddBody {
    pub name: String,
}

#[derive(Deserialize)]
pub struct UserAddBody {
    #[serde(default)]
    pub type_user: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
