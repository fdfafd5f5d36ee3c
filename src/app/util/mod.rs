pub mod multipart;
pub mod reqwest;
pub mod time;
