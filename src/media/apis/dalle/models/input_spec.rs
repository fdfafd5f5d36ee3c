use serde::Serialize;

pub static IMAGE_SIZE: &str = "1024x1024";
pub static RESPONSE_FORMAT_URL: &str = "url";

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub prompt: String,
    pub n: u8,
    pub model: String,
    pub size: String,
    pub response_format: String,
}

impl InputSpec {
    pub fn new(prompt: &str, model: &str) -> Self {
        return Self {
            prompt: prompt.to_string(),
            n: 1,
            model: model.to_string(),
            size: IMAGE_SIZE.to_string(),
            response_format: RESPONSE_FORMAT_URL.to_string(),
        };
    }
}
