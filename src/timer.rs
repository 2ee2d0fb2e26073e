use chrono::Duration;

const UNITS: [(&str, i64); 5] = [
    ("week", 7 * 24 * 3600),
    ("day", 24 * 3600),
    ("hour", 3600),
    ("minute", 60),
    ("second", 1),
];

pub fn one_week() -> Duration {
    Duration::weeks(1)
}

fn parse_part(part: &str) -> Option<f64> {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let ok = match part.split_once('.') {
        None => all_digits(part),
        Some((whole, frac)) => all_digits(whole) && all_digits(frac),
    };
    if ok {
        part.parse().ok()
    } else {
        None
    }
}

/// Parses a clock string `w:d:h:m:s`, read from the right: `1:30` is one
/// minute thirty seconds, `10:0:0:0` is ten days. Parts may carry a decimal
/// point (`0:30.5:0`).
pub fn parse_clock(text: &str) -> Option<Duration> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() > UNITS.len() {
        return None;
    }

    let mut millis = 0f64;
    for (part, (_, secs)) in parts.iter().zip(&UNITS[UNITS.len() - parts.len()..]) {
        millis += parse_part(part)? * (*secs as f64) * 1000.0;
    }
    Some(Duration::milliseconds(millis.round() as i64))
}

fn split_units(d: Duration) -> ([i64; 4], f64) {
    let millis = d.num_milliseconds().max(0);
    let mut whole = millis / 1000;
    let mut counts = [0i64; 4];
    for (count, (_, secs)) in counts.iter_mut().zip(&UNITS[..4]) {
        *count = whole / secs;
        whole %= secs;
    }
    let seconds = whole as f64 + (millis % 1000) as f64 / 1000.0;
    (counts, seconds)
}

/// Clock string that [`parse_clock`] reads back to the same duration.
pub fn to_clock(d: Duration) -> String {
    let (counts, seconds) = split_units(d);
    let mut parts: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
    parts.push(seconds.to_string());
    let first = counts.iter().position(|c| *c != 0).unwrap_or(3).min(3);
    parts[first..].join(":")
}

/// Human readable duration, e.g. `1 week, 3 days and 5 seconds`.
pub fn format_duration(d: Duration) -> String {
    let (counts, seconds) = split_units(d);
    let mut words: Vec<String> = counts
        .iter()
        .zip(UNITS.iter())
        .filter(|(count, _)| **count > 0)
        .map(|(count, (name, _))| plural(&count.to_string(), *count == 1, name))
        .collect();
    if seconds > 0.0 {
        words.push(plural(&seconds.to_string(), seconds == 1.0, "second"));
    }

    match words.len() {
        0 => "0 seconds".to_string(),
        1 => words.remove(0),
        n => format!("{} and {}", words[..n - 1].join(", "), words[n - 1]),
    }
}

fn plural(value: &str, one: bool, unit: &str) -> String {
    if one {
        format!("{} {}", value, unit)
    } else {
        format!("{} {}s", value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_reads_from_the_right() {
        assert_eq!(parse_clock("1:30"), Some(Duration::seconds(90)));
        assert_eq!(parse_clock("0:30"), Some(Duration::seconds(30)));
        assert_eq!(parse_clock("10:0:0:0"), Some(Duration::days(10)));
        assert_eq!(parse_clock("0:30.5:0"), Some(Duration::seconds(1830)));
        assert_eq!(parse_clock("45"), Some(Duration::seconds(45)));
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        assert_eq!(parse_clock("1:x"), None);
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("1:2:3:4:5:6"), None);
        assert_eq!(parse_clock("-1:00"), None);
    }

    #[test]
    fn test_to_clock_round_trips() {
        for d in [
            Duration::seconds(90),
            Duration::minutes(10),
            Duration::weeks(1),
            Duration::milliseconds(1500),
            Duration::zero(),
        ] {
            assert_eq!(parse_clock(&to_clock(d)), Some(d));
        }
        assert_eq!(to_clock(Duration::minutes(10)), "10:0");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(90)), "1 minute and 30 seconds");
        assert_eq!(format_duration(Duration::zero()), "0 seconds");
        assert_eq!(format_duration(Duration::days(10)), "1 week and 3 days");
        assert_eq!(
            format_duration(Duration::days(8) + Duration::hours(2) + Duration::seconds(1)),
            "1 week, 1 day, 2 hours and 1 second"
        );
    }
}
