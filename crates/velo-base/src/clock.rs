use std::time::{SystemTime, UNIX_EPOCH};

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS` (log line format).
pub fn format_timestamp() -> String {
    let (date, time) = split_now();
    format!("{}T{}", date, time)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ` (RFC 3339, stored timestamps).
pub fn format_rfc3339() -> String {
    let (date, time) = split_now();
    format!("{}T{}Z", date, time)
}

/// Current UTC date as `YYYY-MM-DD`.
pub fn format_today() -> String {
    split_now().0
}

fn split_now() -> (String, String) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let (year, month, day) = civil_from_days((secs / 86400) as i64);
    let time_of_day = secs % 86400;

    (
        format!("{:04}-{:02}-{:02}", year, month, day),
        format!(
            "{:02}:{:02}:{:02}",
            time_of_day / 3600,
            (time_of_day % 3600) / 60,
            time_of_day % 60
        ),
    )
}

/// Convert days since the Unix epoch to a civil (year, month, day).
/// Uses Howard Hinnant's algorithm (public domain):
/// http://howardhinnant.github.io/date_algorithms.html
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}
