use axum::{
    body::StreamBody,
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use tokio_stream::wrappers::ReceiverStream;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    app::{
        models::{api_error::ApiError, json_from_request::JsonFromRequest},
        util::multipart::{
            models::image_file_properties::ImageFileProperties, multipart::get_form,
        },
    },
    AppState,
};

use super::{
    dtos::generate_logo_dto::GenerateLogoDto,
    errors::LogoApiError,
    models::progress_event::ProgressEvent,
    service,
    util::progress,
};

pub static NDJSON_CONTENT_TYPE: &str = "application/x-ndjson";

pub async fn generate_logo(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateLogoDto>,
) -> Result<Response, ApiError> {
    let Some(openai_api_key) = state.envy.openai_api_key().map(|key| key.to_string()) else {
        tracing::error!("OPENAI_API_KEY is not configured");
        return Err(LogoApiError::MissingApiKey.value());
    };

    let (reporter, events) = progress::channel();
    let span = tracing::info_span!("generate_logo", request_id = %Uuid::new_v4());

    tokio::spawn(service::generate_logo(dto, openai_api_key, reporter, state).instrument(span));

    Ok(ndjson_response(events))
}

pub async fn upload_logo(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut form = get_form(multipart).await?;

    let Some(file) = form.take_file("logo").filter(|file| !file.data.is_empty()) else {
        return Err(LogoApiError::MissingLogoFile.value());
    };

    if !file.is_image_like() {
        return Err(LogoApiError::UnsupportedFileType.value());
    }

    let Some(image) = ImageFileProperties::from_file_properties(file) else {
        return Err(LogoApiError::UnrecognizedImage.value());
    };

    tracing::info!(
        file_name = %image.file_properties.file_name,
        width = image.image_size.width,
        height = image.image_size.height,
        "logo uploaded"
    );

    let plugin_name = form.field("pluginName").unwrap_or_default().to_string();
    let plugin_desc = form.field("pluginDesc").unwrap_or_default().to_string();

    let (reporter, events) = progress::channel();
    let span = tracing::info_span!("upload_logo", request_id = %image.file_properties.id);

    tokio::spawn(
        service::process_upload(image, plugin_name, plugin_desc, reporter, state).instrument(span),
    );

    Ok(ndjson_response(events))
}

fn ndjson_response(events: ReceiverStream<ProgressEvent>) -> Response {
    (
        [
            (header::CONTENT_TYPE, NDJSON_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        StreamBody::new(progress::into_ndjson_stream(events)),
    )
        .into_response()
}
