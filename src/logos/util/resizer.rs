use std::{io::Cursor, sync::Arc};

use bytes::Bytes;
use image::{imageops::FilterType, DynamicImage, ImageOutputFormat};

use crate::logos::errors::LogoError;

pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

pub fn decode(data: &[u8]) -> Result<DynamicImage, LogoError> {
    Ok(image::load_from_memory(data)?)
}

// Output is always size x size; the source aspect ratio is not kept.
pub fn resize_to_png(source: &DynamicImage, size: u32) -> Result<Bytes, LogoError> {
    let resized = source.resize_exact(size, size, FilterType::Lanczos3);

    let mut buffer = Vec::new();
    resized.write_to(&mut Cursor::new(&mut buffer), ImageOutputFormat::Png)?;

    Ok(Bytes::from(buffer))
}

pub async fn resize_to_png_blocking(
    source: Arc<DynamicImage>,
    size: u32,
) -> Result<Bytes, LogoError> {
    match tokio::task::spawn_blocking(move || resize_to_png(&source, size)).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(%e);
            Err(LogoError::Processing(e.to_string()))
        }
    }
}
