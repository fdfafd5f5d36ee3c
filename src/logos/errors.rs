use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("Request timed out, please retry later.")]
    Timeout,
    #[error("Failed to reach image generation API: {0}")]
    Transport(String),
    #[error("{message} (status={status})")]
    Provider { status: u16, message: String },
    #[error("API request failed: status={0}")]
    ProviderStatus(u16),
    #[error("Unexpected response format from image generation API.")]
    ResponseFormat,
    #[error("{0}")]
    Fetch(String),
    #[error("Image processing failed: {0}")]
    Processing(String),
}

impl From<image::ImageError> for LogoError {
    fn from(e: image::ImageError) -> Self {
        Self::Processing(e.to_string())
    }
}

#[derive(Debug)]
pub enum LogoApiError {
    MissingApiKey,
    MissingLogoFile,
    UnsupportedFileType,
    UnrecognizedImage,
}

impl LogoApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingApiKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Image generation API key is not configured, set OPENAI_API_KEY."
                    .to_string(),
            },
            Self::MissingLogoFile => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "No file uploaded, attach an image in the \"logo\" field.".to_string(),
            },
            Self::UnsupportedFileType => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Files must be of type image.".to_string(),
            },
            Self::UnrecognizedImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Uploaded file is not a recognized image.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_asks_for_retry() {
        let message = LogoError::Timeout.to_string();

        assert!(message.contains("timed out"));
        assert!(message.contains("retry"));
    }

    #[test]
    fn provider_errors_carry_message_and_status() {
        let err = LogoError::Provider {
            status: 400,
            message: "Your request was rejected.".to_string(),
        };

        assert_eq!(err.to_string(), "Your request was rejected. (status=400)");
        assert_eq!(
            LogoError::ProviderStatus(502).to_string(),
            "API request failed: status=502"
        );
    }

    #[test]
    fn missing_api_key_maps_to_internal_server_error() {
        let api_error = LogoApiError::MissingApiKey.value();

        assert_eq!(api_error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api_error.message.contains("OPENAI_API_KEY"));
    }
}
