pub mod icons;
pub mod progress;
pub mod prompt;
pub mod resizer;
