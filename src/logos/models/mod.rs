pub mod logo_variant;
pub mod progress_event;
