use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLogoDto {
    pub plugin_name: String,
    pub plugin_desc: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_camel_case_body() {
        let dto: GenerateLogoDto =
            serde_json::from_str(r#"{"pluginName":"Tabby","pluginDesc":"groups tabs"}"#).unwrap();

        assert_eq!(dto.plugin_name, "Tabby");
        assert_eq!(dto.plugin_desc, "groups tabs");
    }

    #[test]
    fn rejects_missing_fields() {
        let result = serde_json::from_str::<GenerateLogoDto>(r#"{"pluginName":"Tabby"}"#);

        assert!(result.is_err());
    }
}
