use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Success,
    Error,
    Upload,
}

impl AuditStatus {
    pub fn value(&self) -> &str {
        match *self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Upload => "upload",
        }
    }
}
