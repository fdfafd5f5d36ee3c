use std::path::{Path, PathBuf};

use crate::logos::models::logo_variant::LogoVariant;

// File-write failures are logged and skipped.
pub async fn save_variants(dir: &str, variants: &[LogoVariant]) -> Vec<PathBuf> {
    let dir = Path::new(dir);
    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        tracing::warn!(%e, dir = %dir.display(), "failed to create icons directory");
        return Vec::new();
    }

    let mut saved = Vec::new();
    for variant in variants {
        let path = dir.join(&variant.file_name);
        match tokio::fs::write(&path, &variant.image_data).await {
            Ok(_) => saved.push(path),
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "failed to save icon");
            }
        }
    }

    saved
}
