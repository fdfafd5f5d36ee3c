pub mod progress_status;
