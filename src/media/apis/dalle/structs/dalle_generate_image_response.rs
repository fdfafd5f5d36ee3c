use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DalleGenerateImageResponse {
    #[serde(rename(deserialize = "data"))]
    pub data: Vec<DalleDataUrl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DalleDataUrl {
    #[serde(rename(deserialize = "url"))]
    pub url: String,
    #[serde(rename(deserialize = "revised_prompt"))]
    pub revised_prompt: Option<String>,
}
