//! Conversion between minute counts and the `H:MM` strings used by the
//! stats API and the per-account files.

/// Whole minutes played. Parsed values are not bounds-checked, so a negative
/// component in the source text yields a negative count.
pub type Minutes = i64;

/// Parses `H:MM` into minutes. Anything that is not exactly two integers
/// separated by a colon decodes to 0.
pub fn parse_time_string(text: &str) -> Minutes {
    let Some((hours, minutes)) = text.trim().split_once(':') else {
        return 0;
    };
    let (Ok(hours), Ok(minutes)) = (
        hours.trim().parse::<i64>(),
        minutes.trim().parse::<i64>(),
    ) else {
        return 0;
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .unwrap_or(0)
}

/// Storage form, `H:MM`. Round-trips through [`parse_time_string`].
pub fn format_storage(minutes: Minutes) -> String {
    format!("{}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}

/// Display form: `3h 5m`, or just `45m` under an hour.
pub fn format_display(minutes: Minutes) -> String {
    let hours = minutes.div_euclid(60);
    let mins = minutes.rem_euclid(60);
    if hours != 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}
