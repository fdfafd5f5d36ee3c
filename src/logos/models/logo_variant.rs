use bytes::Bytes;
use serde::{Serialize, Serializer};

pub static PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoVariant {
    pub size: u32,
    #[serde(serialize_with = "serialize_png_data_url")]
    pub image_data: Bytes,
    pub file_name: String,
}

impl LogoVariant {
    pub fn new(size: u32, image_data: Bytes) -> Self {
        return Self {
            size,
            image_data,
            file_name: file_name_for_size(size),
        };
    }
}

pub fn file_name_for_size(size: u32) -> String {
    ["icon", &size.to_string(), ".png"].concat()
}

fn serialize_png_data_url<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&[PNG_DATA_URL_PREFIX, &base64::encode(data)].concat())
}
