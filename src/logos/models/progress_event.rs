use serde::Serialize;

use crate::logos::enums::progress_status::ProgressStatus;

use super::logo_variant::LogoVariant;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub status: ProgressStatus,
    pub progress: u8,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<LogoVariant>>,
}

impl ProgressEvent {
    pub fn new(status: ProgressStatus, progress: u8, message: &str) -> Self {
        return Self {
            status,
            progress,
            message: message.to_string(),
            original_url: None,
            sizes: None,
        };
    }

    // One JSON object per line.
    pub fn to_ndjson_line(&self) -> String {
        match serde_json::to_string(self) {
            Ok(mut line) => {
                line.push('\n');
                line
            }
            Err(e) => {
                tracing::error!(%e);
                [
                    r#"{"status":"error","progress":"#,
                    &self.progress.to_string(),
                    r#","message":"Failed to serialize progress event."}"#,
                    "\n",
                ]
                .concat()
            }
        }
    }
}
