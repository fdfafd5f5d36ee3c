use std::sync::Arc;

use bytes::Bytes;

use crate::{
    app::util::{self, multipart::models::image_file_properties::ImageFileProperties},
    logos::{
        dtos::generate_logo_dto::GenerateLogoDto,
        errors::LogoError,
        models::logo_variant::LogoVariant,
        util::{
            icons,
            progress::{self, ProgressReporter, PROGRESS_GENERATED},
            prompt,
            resizer::{self, ICON_SIZES},
        },
    },
    media::apis::dalle::service::{dalle_generate_image, DalleRequest},
    records::{self, models::audit_record::AuditRecord},
    AppState,
};

pub async fn generate_logo(
    dto: GenerateLogoDto,
    openai_api_key: String,
    mut reporter: ProgressReporter,
    state: AppState,
) {
    let prompt = prompt::build_prompt(&dto);
    let envy = &state.envy;

    reporter.generating("Generating logo...").await;

    let request = DalleRequest {
        api_url: envy.openai_api_url(),
        api_key: &openai_api_key,
        model: envy.openai_model(),
        timeout: envy.openai_timeout(),
    };

    let data = match dalle_generate_image(&prompt, &request, &state.client).await {
        Ok(data) => data,
        Err(e) => {
            let record = AuditRecord::error(
                &dto.plugin_name,
                &dto.plugin_desc,
                &prompt,
                None,
                &e.to_string(),
            );
            return fail(reporter, e, record, &state).await;
        }
    };

    tracing::info!(original_url = %data.url, "logo generated");
    reporter
        .processing(
            PROGRESS_GENERATED,
            "Logo generated, resizing icons...",
            Some(data.url.as_str()),
        )
        .await;

    let result = match util::reqwest::get_bytes(&data.url, &state.client).await {
        Ok(bytes) => resize_variants(bytes, &mut reporter).await,
        Err(e) => Err(e),
    };

    let variants = match result {
        Ok(variants) => variants,
        Err(e) => {
            let record = AuditRecord::error(
                &dto.plugin_name,
                &dto.plugin_desc,
                &prompt,
                Some(data.url.as_str()),
                &e.to_string(),
            );
            return fail(reporter, e, record, &state).await;
        }
    };

    save_icons(&variants, &state).await;
    reporter.complete(Some(data.url.as_str()), variants).await;

    records::service::spawn_log_record(
        AuditRecord::success(&dto.plugin_name, &dto.plugin_desc, &prompt, &data.url),
        state.envy.clone(),
        state.client.clone(),
    );
}

pub async fn process_upload(
    image: ImageFileProperties,
    plugin_name: String,
    plugin_desc: String,
    mut reporter: ProgressReporter,
    state: AppState,
) {
    reporter
        .processing(PROGRESS_GENERATED, "Processing uploaded image...", None)
        .await;

    let data = image.file_properties.data;
    let variants = match resize_variants(data, &mut reporter).await {
        Ok(variants) => variants,
        Err(e) => {
            let record = AuditRecord::error(&plugin_name, &plugin_desc, "", None, &e.to_string());
            return fail(reporter, e, record, &state).await;
        }
    };

    save_icons(&variants, &state).await;
    reporter.complete(None, variants).await;

    records::service::spawn_log_record(
        AuditRecord::upload(&plugin_name, &plugin_desc),
        state.envy.clone(),
        state.client.clone(),
    );
}

// All sizes or nothing; a failed step aborts the whole set.
pub async fn resize_variants(
    data: Bytes,
    reporter: &mut ProgressReporter,
) -> Result<Vec<LogoVariant>, LogoError> {
    let source = match tokio::task::spawn_blocking(move || resizer::decode(&data)).await {
        Ok(result) => Arc::new(result?),
        Err(e) => {
            tracing::error!(%e);
            return Err(LogoError::Processing(e.to_string()));
        }
    };

    let mut variants = Vec::with_capacity(ICON_SIZES.len());
    for (step, size) in ICON_SIZES.into_iter().enumerate() {
        let png = resizer::resize_to_png_blocking(source.clone(), size).await?;
        variants.push(LogoVariant::new(size, png));

        let message = format!("Generated {size}x{size} icon.");
        reporter
            .processing(progress::resize_step_progress(step), &message, None)
            .await;
    }

    Ok(variants)
}

async fn save_icons(variants: &[LogoVariant], state: &AppState) {
    if state.envy.is_serverless() {
        return;
    }

    let saved = icons::save_variants(state.envy.icons_dir(), variants).await;
    tracing::debug!(count = saved.len(), "icons saved");
}

async fn fail(reporter: ProgressReporter, e: LogoError, record: AuditRecord, state: &AppState) {
    tracing::error!(%e, "logo pipeline failed");
    reporter.fail(&e.to_string()).await;

    records::service::spawn_log_record(record, state.envy.clone(), state.client.clone());
}
