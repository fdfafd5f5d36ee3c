use std::time::Duration;

use serde::Deserialize;

pub static DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com";
pub static DEFAULT_OPENAI_MODEL: &str = "dall-e-3";
pub static DEFAULT_ICONS_DIR: &str = "icons";
pub const DEFAULT_OPENAI_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_RATE_LIMIT_PER_SEC: u64 = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub openai_api_key: Option<String>,
    pub openai_api_url: Option<String>,
    pub openai_model: Option<String>,
    pub openai_timeout_secs: Option<u64>,

    pub nocodb_url: Option<String>,
    pub nocodb_token: Option<String>,
    pub nocodb_table_id: Option<String>,
    pub nocodb_view_id: Option<String>,

    pub vercel: Option<String>,
    pub icons_dir: Option<String>,
    pub max_upload_bytes: Option<usize>,
    pub rate_limit_per_sec: Option<u64>,
}

impl Envy {
    pub fn openai_api_key(&self) -> Option<&str> {
        match &self.openai_api_key {
            Some(key) if !key.trim().is_empty() => Some(key.as_str()),
            _ => None,
        }
    }

    pub fn openai_api_url(&self) -> &str {
        self.openai_api_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_API_URL)
            .trim_end_matches('/')
    }

    pub fn openai_model(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    pub fn openai_timeout(&self) -> Duration {
        Duration::from_secs(
            self.openai_timeout_secs
                .unwrap_or(DEFAULT_OPENAI_TIMEOUT_SECS),
        )
    }

    pub fn is_serverless(&self) -> bool {
        self.vercel.is_some()
    }

    pub fn icons_dir(&self) -> &str {
        self.icons_dir.as_deref().unwrap_or(DEFAULT_ICONS_DIR)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES)
    }

    pub fn rate_limit_per_sec(&self) -> u64 {
        match self.rate_limit_per_sec {
            Some(0) | None => DEFAULT_RATE_LIMIT_PER_SEC,
            Some(limit) => limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let envy = Envy::default();

        assert_eq!(envy.openai_api_key(), None);
        assert_eq!(envy.openai_api_url(), DEFAULT_OPENAI_API_URL);
        assert_eq!(envy.openai_model(), "dall-e-3");
        assert_eq!(envy.openai_timeout(), Duration::from_secs(60));
        assert_eq!(envy.icons_dir(), "icons");
        assert!(!envy.is_serverless());
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let envy = Envy {
            openai_api_key: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(envy.openai_api_key(), None);
    }

    #[test]
    fn trailing_slash_is_trimmed_from_api_url() {
        let envy = Envy {
            openai_api_url: Some("http://localhost:8080/".to_string()),
            ..Default::default()
        };

        assert_eq!(envy.openai_api_url(), "http://localhost:8080");
    }

    #[test]
    fn deserializes_from_environment_pairs() {
        let vars = vec![
            ("PORT".to_string(), "8081".to_string()),
            ("OPENAI_API_KEY".to_string(), "sk-test".to_string()),
            ("OPENAI_TIMEOUT_SECS".to_string(), "5".to_string()),
            ("VERCEL".to_string(), "1".to_string()),
        ];

        let envy = envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.port, Some(8081));
        assert_eq!(envy.openai_api_key(), Some("sk-test"));
        assert_eq!(envy.openai_timeout(), Duration::from_secs(5));
        assert!(envy.is_serverless());
    }
}
