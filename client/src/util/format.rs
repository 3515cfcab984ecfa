//! Display formatting shared by cards and profile pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const MAX_STARS: u8 = 5;

/// Five-character star bar, e.g. `★★★☆☆` for 3.
pub fn stars(score: u8) -> String {
    let filled = usize::from(score.min(MAX_STARS));
    let empty = usize::from(MAX_STARS) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Star bar for an average rating, rounded to the nearest whole star.
pub fn average_stars(avg: f64) -> String {
    let rounded = avg.round().clamp(0.0, f64::from(MAX_STARS));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = rounded as u8;
    stars(whole)
}

/// Cut `text` to `max` characters, appending `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_owned(),
    }
}

/// Scheduled time in the browser's locale, or `Not scheduled`.
pub fn schedule_label(scheduled: Option<&str>) -> String {
    let Some(raw) = scheduled.filter(|s| !s.trim().is_empty()) else {
        return "Not scheduled".to_owned();
    };
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    plain_timestamp(raw)
}

/// Calendar date of a timestamp in the browser's locale; empty when missing.
pub fn date_label(timestamp: Option<&str>) -> String {
    let Some(raw) = timestamp.filter(|s| !s.trim().is_empty()) else {
        return String::new();
    };
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    raw.split('T').next().unwrap_or(raw).to_owned()
}

/// `2030-05-01T09:30:00Z` → `2030-05-01 09:30`.
pub fn plain_timestamp(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('Z');
    let (date, time) = trimmed.split_once('T').unwrap_or((trimmed, ""));
    let hhmm: String = time.chars().take(5).collect();
    if hhmm.is_empty() {
        date.to_owned()
    } else {
        format!("{date} {hhmm}")
    }
}

/// Weekday for an availability slot, 0 = Sunday; out-of-range values render as `Day N`.
pub fn day_name(day: u8) -> String {
    const DAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
    DAYS.get(usize::from(day))
        .map_or_else(|| format!("Day {day}"), |name| (*name).to_owned())
}
