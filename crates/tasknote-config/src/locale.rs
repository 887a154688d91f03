use chrono::{FixedOffset, Offset, Utc};
use std::env;

/// Offset applied to timestamps that arrive without zone information.
#[derive(Clone, Copy, Debug)]
pub struct LocaleConfig {
    pub utc_offset: FixedOffset,
}

impl LocaleConfig {
    pub fn from_env() -> Self {
        let hours = env::var("LOCAL_UTC_OFFSET_HOURS")
            .ok()
            .and_then(|s| s.parse::<i32>().ok())
            .unwrap_or(8);

        Self {
            utc_offset: offset_from_hours(hours).unwrap_or_else(utc),
        }
    }
}

/// Builds an offset east of UTC; `None` outside ±23 hours.
pub fn offset_from_hours(hours: i32) -> Option<FixedOffset> {
    FixedOffset::east_opt(hours.checked_mul(3600)?)
}

fn utc() -> FixedOffset {
    Utc.fix()
}
