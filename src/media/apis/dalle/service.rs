use std::time::Duration;

use crate::logos::errors::LogoError;

use super::{
    models::input_spec::InputSpec,
    structs::{
        dalle_error_response::DalleErrorResponse,
        dalle_generate_image_response::{DalleDataUrl, DalleGenerateImageResponse},
    },
};

pub struct DalleRequest<'a> {
    pub api_url: &'a str,
    pub api_key: &'a str,
    pub model: &'a str,
    pub timeout: Duration,
}

pub async fn dalle_generate_image(
    prompt: &str,
    request: &DalleRequest<'_>,
    client: &reqwest::Client,
) -> Result<DalleDataUrl, LogoError> {
    let url = [request.api_url, "/v1/images/generations"].concat();

    let result = client
        .post(&url)
        .bearer_auth(request.api_key)
        .timeout(request.timeout)
        .json(&InputSpec::new(prompt, request.model))
        .send()
        .await;

    let res = match result {
        Ok(res) => res,
        Err(e) => return Err(from_reqwest_error(e)),
    };

    let status = res.status();
    let text = match res.text().await {
        Ok(text) => text,
        Err(e) => return Err(from_reqwest_error(e)),
    };

    if !status.is_success() {
        return match serde_json::from_str::<DalleErrorResponse>(&text) {
            Ok(body) => {
                tracing::error!(%status, message = %body.error.message, error_type = ?body.error.error_type);
                Err(LogoError::Provider {
                    status: status.as_u16(),
                    message: body.error.message,
                })
            }
            Err(_) => {
                tracing::error!(%status, %text);
                Err(LogoError::ProviderStatus(status.as_u16()))
            }
        };
    }

    let Ok(dalle_response) = serde_json::from_str::<DalleGenerateImageResponse>(&text) else {
        tracing::error!(%text);
        return Err(LogoError::ResponseFormat);
    };

    let Some(data) = dalle_response.data.into_iter().next() else {
        tracing::error!("image generation response contained no images");
        return Err(LogoError::ResponseFormat);
    };

    if let Some(revised_prompt) = &data.revised_prompt {
        tracing::debug!(%revised_prompt);
    }

    Ok(data)
}

fn from_reqwest_error(e: reqwest::Error) -> LogoError {
    if e.is_timeout() {
        tracing::error!(%e, "image generation timed out");
        return LogoError::Timeout;
    }

    tracing::error!(%e);
    LogoError::Transport(e.to_string())
}
