use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DalleErrorResponse {
    #[serde(rename(deserialize = "error"))]
    pub error: DalleError,
}

#[derive(Debug, Deserialize)]
pub struct DalleError {
    #[serde(rename(deserialize = "message"))]
    pub message: String,
    #[serde(rename(deserialize = "type"))]
    pub error_type: Option<String>,
}
