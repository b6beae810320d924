//! `hh:mm AM/PM` labels shown under each message bubble.
//!
//! Matches the en-US two-digit hour/minute style (`09:05 AM`). The viewer's
//! UTC offset comes from the browser; server-side rendering uses UTC.

#[cfg(test)]
#[path = "time_label_test.rs"]
mod time_label_test;

use time::OffsetDateTime;

use crate::state::messaging::Timestamp;

const NANOS_PER_MILLI: i128 = 1_000_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Format `ts` shifted by `utc_offset_minutes` as `hh:mm AM/PM`.
///
/// Returns `--:--` for instants outside the representable calendar range.
pub fn format_time_label(ts: Timestamp, utc_offset_minutes: i32) -> String {
    let offset_ms = i64::from(utc_offset_minutes).saturating_mul(MILLIS_PER_MINUTE);
    let local_ms = ts.as_millis().saturating_add(offset_ms);
    let Ok(local) = OffsetDateTime::from_unix_timestamp_nanos(i128::from(local_ms) * NANOS_PER_MILLI) else {
        return "--:--".to_owned();
    };

    let hour = local.hour();
    let period = if hour < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{:02} {period}", local.minute())
}

/// Minutes east of UTC for the viewer at instant `ts`.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn local_utc_offset_minutes(ts: Timestamp) -> i32 {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts.as_millis() as f64));
    // getTimezoneOffset is minutes *behind* UTC.
    -(date.get_timezone_offset() as i32)
}

/// Minutes east of UTC for the viewer at instant `ts`.
#[cfg(not(feature = "hydrate"))]
pub fn local_utc_offset_minutes(_ts: Timestamp) -> i32 {
    0
}
