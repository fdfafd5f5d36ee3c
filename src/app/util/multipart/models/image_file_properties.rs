use imagesize::ImageSize;

use super::file_properties::FileProperties;

#[derive(Debug)]
pub struct ImageFileProperties {
    pub file_properties: FileProperties,
    pub image_size: ImageSize,
}

impl ImageFileProperties {
    pub fn from_file_properties(file_properties: FileProperties) -> Option<Self> {
        let Ok(image_size) = imagesize::blob_size(&file_properties.data) else {
            return None;
        };

        Some(Self {
            file_properties,
            image_size,
        })
    }
}
