use chrono::{SecondsFormat, Utc};

pub fn current_time_in_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
