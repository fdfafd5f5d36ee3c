use crate::app::envy::Envy;

#[derive(Debug, Clone)]
pub struct RecordStore {
    pub url: String,
    pub token: String,
    pub table_id: String,
    pub view_id: Option<String>,
}

impl RecordStore {
    // Needs url, token and table id; the view id is optional.
    pub fn from_envy(envy: &Envy) -> Option<Self> {
        let url = non_empty(&envy.nocodb_url)?;
        let token = non_empty(&envy.nocodb_token)?;
        let table_id = non_empty(&envy.nocodb_table_id)?;

        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            table_id: table_id.to_string(),
            view_id: non_empty(&envy.nocodb_view_id).map(|id| id.to_string()),
        })
    }

    pub fn records_url(&self) -> String {
        [&self.url, "/api/v2/tables/", &self.table_id, "/records"].concat()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_id_disables_store() {
        let envy = Envy {
            nocodb_url: Some("https://noco.example".to_string()),
            nocodb_token: Some("token".to_string()),
            ..Default::default()
        };

        assert!(RecordStore::from_envy(&envy).is_none());
    }

    #[test]
    fn builds_records_url() {
        let envy = Envy {
            nocodb_url: Some("https://noco.example/".to_string()),
            nocodb_token: Some("token".to_string()),
            nocodb_table_id: Some("tbl123".to_string()),
            ..Default::default()
        };

        let store = RecordStore::from_envy(&envy).unwrap();

        assert_eq!(
            store.records_url(),
            "https://noco.example/api/v2/tables/tbl123/records"
        );
        assert!(store.view_id.is_none());
    }
}
