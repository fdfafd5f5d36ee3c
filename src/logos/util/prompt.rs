use crate::logos::dtos::generate_logo_dto::GenerateLogoDto;

pub fn build_prompt(dto: &GenerateLogoDto) -> String {
    [
        "Design a professional logo for a browser extension named \"",
        &dto.plugin_name,
        "\". The extension's purpose: ",
        &dto.plugin_desc,
        ". The style should be clean and modern, suitable for use as a browser extension icon.",
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_name_and_description_verbatim() {
        let dto = GenerateLogoDto {
            plugin_name: "Tab \"Tamer\"".to_string(),
            plugin_desc: "closes idle tabs\nafter an hour".to_string(),
        };

        let prompt = build_prompt(&dto);

        assert!(prompt.contains("named \"Tab \"Tamer\"\""));
        assert!(prompt.contains("closes idle tabs\nafter an hour"));
    }

    #[test]
    fn accepts_empty_fields() {
        let dto = GenerateLogoDto {
            plugin_name: String::new(),
            plugin_desc: String::new(),
        };

        assert!(build_prompt(&dto).starts_with("Design a professional logo"));
    }
}
