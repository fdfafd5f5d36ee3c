use serde::Serialize;

use crate::{app::util::time, records::enums::audit_status::AuditStatus};

#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
    pub plugin_name: String,
    pub plugin_desc: String,
    pub prompt: String,
    pub original_url: String,
    pub status: AuditStatus,
    pub error_message: String,
    pub created_at: String,
}

impl AuditRecord {
    pub fn success(plugin_name: &str, plugin_desc: &str, prompt: &str, original_url: &str) -> Self {
        return Self::new(
            plugin_name,
            plugin_desc,
            prompt,
            original_url,
            AuditStatus::Success,
            "",
        );
    }

    pub fn error(
        plugin_name: &str,
        plugin_desc: &str,
        prompt: &str,
        original_url: Option<&str>,
        error_message: &str,
    ) -> Self {
        return Self::new(
            plugin_name,
            plugin_desc,
            prompt,
            original_url.unwrap_or(""),
            AuditStatus::Error,
            error_message,
        );
    }

    pub fn upload(plugin_name: &str, plugin_desc: &str) -> Self {
        return Self::new(plugin_name, plugin_desc, "", "", AuditStatus::Upload, "");
    }

    fn new(
        plugin_name: &str,
        plugin_desc: &str,
        prompt: &str,
        original_url: &str,
        status: AuditStatus,
        error_message: &str,
    ) -> Self {
        return Self {
            plugin_name: plugin_name.to_string(),
            plugin_desc: plugin_desc.to_string(),
            prompt: prompt.to_string(),
            original_url: original_url.to_string(),
            status,
            error_message: error_message.to_string(),
            created_at: time::current_time_in_rfc3339(),
        };
    }
}
