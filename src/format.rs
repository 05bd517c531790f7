//! Locale-aware date display via the browser's `Intl`.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use wasm_bindgen::JsValue;

/// Creation timestamp as a local calendar date.
pub fn timestamp_date(at: &DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    date.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// Calendar date, without shifting it through a time zone.
pub fn calendar_date(date: &NaiveDate) -> String {
    let local = js_sys::Date::new_with_year_month_day(date.year() as u32, date.month0() as i32, date.day() as i32);
    local.to_locale_date_string("default", &JsValue::UNDEFINED).into()
}
