pub mod dalle_error_response;
pub mod dalle_generate_image_response;
