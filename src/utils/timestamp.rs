//! ISO-8601 duration parsing and the `elapsed/total` playback timestamp.

use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors produced while reading a duration string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DurationError {
    /// The input is not an ISO-8601 duration this module understands.
    #[error("Malformed ISO-8601 duration: {0:?}")]
    Malformed(String),
}

static ISO8601_DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+(?:[.,]\d+)?)S)?)?$",
    )
    .unwrap()
});

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;
const MILLIS_PER_HOUR: i64 = SECS_PER_HOUR * 1000;

/// Parses an ISO-8601 duration such as `PT4M13S`, `PT1H2M`, `P1DT3H` or `P0D`.
///
/// Years count as 365 days, months as 30 days. Fractional seconds are kept to
/// millisecond precision.
pub fn parse_iso8601_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let malformed = || DurationError::Malformed(input.to_string());

    let captures = ISO8601_DURATION_REGEX.captures(input).ok_or_else(malformed)?;

    // "P", "PT" and "P1DT" match the grammar but carry no value.
    if (1..=7).all(|i| captures.get(i).is_none()) || input.ends_with('T') {
        return Err(malformed());
    }

    let whole = |i: usize, unit_secs: i64| -> Result<i64, DurationError> {
        match captures.get(i) {
            Some(m) => m
                .as_str()
                .parse::<i64>()
                .ok()
                .and_then(|n| n.checked_mul(unit_secs))
                .ok_or_else(malformed),
            None => Ok(0),
        }
    };

    let mut secs = 0i64;
    for (i, unit) in [
        (1, 365 * SECS_PER_DAY),
        (2, 30 * SECS_PER_DAY),
        (3, 7 * SECS_PER_DAY),
        (4, SECS_PER_DAY),
        (5, SECS_PER_HOUR),
        (6, SECS_PER_MINUTE),
    ] {
        secs = secs.checked_add(whole(i, unit)?).ok_or_else(malformed)?;
    }

    let mut millis = 0i64;
    if let Some(m) = captures.get(7) {
        let (whole_part, fraction) = m
            .as_str()
            .split_once(['.', ','])
            .unwrap_or((m.as_str(), ""));

        let whole_secs: i64 = whole_part.parse().map_err(|_| malformed())?;
        secs = secs.checked_add(whole_secs).ok_or_else(malformed)?;

        // Sub-millisecond digits are truncated.
        let digits: String = fraction.chars().chain("000".chars()).take(3).collect();
        millis = digits.parse().map_err(|_| malformed())?;
    }

    secs.checked_mul(1000)
        .and_then(|ms| ms.checked_add(millis))
        .and_then(TimeDelta::try_milliseconds)
        .ok_or_else(malformed)
}

/// Display pattern chosen from the total length of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimestampPattern {
    /// `mm:ss`, minutes absorb any overflow.
    MinutesSeconds,
    /// `hh:mm:ss`, hours absorb any overflow.
    HoursMinutesSeconds,
}

impl TimestampPattern {
    fn for_total(total: TimeDelta) -> Self {
        if total.num_milliseconds() < MILLIS_PER_HOUR {
            Self::MinutesSeconds
        } else {
            Self::HoursMinutesSeconds
        }
    }

    fn format(self, duration: TimeDelta) -> String {
        let total_seconds = duration.num_seconds().max(0);

        match self {
            Self::MinutesSeconds => {
                format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
            }
            Self::HoursMinutesSeconds => {
                let hours = total_seconds / 3600;
                let minutes = (total_seconds % 3600) / 60;
                let seconds = total_seconds % 60;
                format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
            }
        }
    }
}

/// Formats playback progress as `elapsed/total`, e.g. `01:30/04:13` or `00:01:30/01:00:00`.
///
/// The pattern is picked from the total: `mm:ss` under one hour, `hh:mm:ss`
/// otherwise, and the elapsed time always uses the same pattern.
///
/// # Errors
///
/// Returns [`DurationError::Malformed`] if `total_iso8601` cannot be parsed.
pub fn format_timestamp(elapsed_millis: u64, total_iso8601: &str) -> Result<String, DurationError> {
    let total = parse_iso8601_duration(total_iso8601)?;
    let elapsed = i64::try_from(elapsed_millis)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX);

    let pattern = TimestampPattern::for_total(total);
    Ok(format!("{}/{}", pattern.format(elapsed), pattern.format(total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("PT4M13S", 253_000)]
    #[case("PT1H", 3_600_000)]
    #[case("PT3600S", 3_600_000)]
    #[case("PT1H2M3S", 3_723_000)]
    #[case("P1DT2H", 93_600_000)]
    #[case("P1W", 604_800_000)]
    #[case("P0D", 0)]
    #[case("PT0S", 0)]
    #[case("PT1.5S", 1_500)]
    #[case("PT2,25S", 2_250)]
    #[case("PT1.9999S", 1_999)]
    #[case("PT0.05S", 50)]
    fn test_parse_iso8601_duration(#[case] input: &str, #[case] expected_millis: i64) {
        let parsed = parse_iso8601_duration(input).unwrap();
        assert_eq!(parsed.num_milliseconds(), expected_millis);
    }

    #[rstest]
    #[case("")]
    #[case("P")]
    #[case("PT")]
    #[case("P1DT")]
    #[case("4:13")]
    #[case("PT4M13")]
    #[case("pt4m13s")]
    #[case("PT-5S")]
    #[case("PT99999999999999999999S")]
    #[case("PT9223372036854775807S")]
    #[case("P1DT9223372036854775807S")]
    #[case("PT9223372036854775808.5S")]
    fn test_parse_iso8601_duration_rejects(#[case] input: &str) {
        assert_matches!(
            parse_iso8601_duration(input),
            Err(DurationError::Malformed(s)) if s == input
        );
    }

    #[rstest]
    #[case(90_000, "PT3600S", "00:01:30/01:00:00")]
    #[case(90_000, "PT59M59S", "01:30/59:59")]
    #[case(0, "PT4M13S", "00:00/04:13")]
    #[case(252_999, "PT4M13S", "04:12/04:13")]
    #[case(4_500_000, "PT30M", "75:00/30:00")]
    #[case(61_000, "PT1H2M3S", "00:01:01/01:02:03")]
    #[case(3_000, "P1DT2H", "00:00:03/26:00:00")]
    #[case(1_000, "P0D", "00:01/00:00")]
    fn test_format_timestamp(#[case] elapsed: u64, #[case] total: &str, #[case] expected: &str) {
        assert_eq!(format_timestamp(elapsed, total).unwrap(), expected);
    }

    #[test]
    fn test_format_timestamp_malformed_total() {
        assert_eq!(
            format_timestamp(1_000, "three minutes"),
            Err(DurationError::Malformed("three minutes".to_string()))
        );
    }
}
