use bytes::Bytes;
use mime::Mime;

#[derive(Debug)]
pub struct FileProperties {
    pub id: String,
    pub field_name: String,
    pub file_name: String,
    pub mime_type: Mime,
    pub data: Bytes,
}

impl FileProperties {
    pub fn is_image_like(&self) -> bool {
        self.mime_type.type_() == mime::IMAGE || self.mime_type == mime::APPLICATION_OCTET_STREAM
    }
}
