use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error body: `{"message": ..., <extra keys>}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub timestamp: i64,
}
