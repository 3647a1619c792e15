use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use httpdate::parse_http_date;

/// Parse a `Retry-After` response header, delta-seconds or HTTP-date form.
pub fn parse_retry_after(
    headers: &BTreeMap<String, String>,
    now: SystemTime,
) -> Option<Duration> {
    let value = get_header_ci(headers, "retry-after")?.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    let date = parse_http_date(value).ok()?;
    date.duration_since(now).ok()
}

fn get_header_ci<'a>(headers: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
