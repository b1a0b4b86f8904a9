//! Timestamp codec for SRT-style `HH:MM:SS,mmm` values.
//!
//! Two paired conversions are used throughout the crate:
//! - [`parse_to_ms`]: strict `HH:MM:SS,mmm` -> total milliseconds
//! - [`format_ms`]: milliseconds -> zero-padded `HH:MM:SS,mmm`
//!
//! Hours are elapsed time, not wall-clock, so they are never wrapped at 24
//! and may grow beyond two digits.

use crate::error::TimestampError;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Parse a strict `HH:MM:SS,mmm` timestamp into total milliseconds.
///
/// Hours need at least two digits, minutes and seconds exactly two
/// (each below 60) and milliseconds exactly three. Anything else is an
/// error; a malformed timestamp is never treated as a zero offset.
///
/// # Examples
///
/// ```
/// use subprompt::subtitle::timestamp::parse_to_ms;
///
/// assert_eq!(parse_to_ms("01:01:01,500").unwrap(), 3_661_500);
/// assert!(parse_to_ms("1:01:01,500").is_err());
/// ```
pub fn parse_to_ms(timestamp: &str) -> Result<u64, TimestampError> {
    let malformed = || TimestampError::Malformed(timestamp.to_string());

    let (clock, millis) = timestamp.split_once(',').ok_or_else(malformed)?;
    let mut parts = clock.split(':');
    let (hours, minutes, seconds) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), Some(s), None) => (h, m, s),
        _ => return Err(malformed()),
    };

    if hours.len() < 2 || minutes.len() != 2 || seconds.len() != 2 || millis.len() != 3 {
        return Err(malformed());
    }

    let hours = parse_digits(hours).ok_or_else(malformed)?;
    let minutes = parse_digits(minutes).ok_or_else(malformed)?;
    let seconds = parse_digits(seconds).ok_or_else(malformed)?;
    let millis = parse_digits(millis).ok_or_else(malformed)?;

    if minutes >= 60 {
        return Err(TimestampError::OutOfRange {
            field: "minutes",
            value: minutes,
        });
    }
    if seconds >= 60 {
        return Err(TimestampError::OutOfRange {
            field: "seconds",
            value: seconds,
        });
    }

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis))
        .ok_or_else(malformed)
}

/// Format milliseconds as a zero-padded `HH:MM:SS,mmm` timestamp.
///
/// # Examples
///
/// ```
/// use subprompt::subtitle::timestamp::format_ms;
///
/// assert_eq!(format_ms(3_661_500), "01:01:01,500");
/// ```
pub fn format_ms(ms: u64) -> String {
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = ms % MS_PER_SECOND;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

/// Convert fractional seconds to whole milliseconds (rounded, floored at 0).
pub fn seconds_to_ms(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    }
}

/// Lenient timestamp parsing used when reading `.srt` files.
///
/// Accepts `,` or `.` as the millisecond separator, 1-3 fraction digits
/// (`,5` means 500 ms) and single-digit hours. Returns milliseconds; callers
/// re-format with [`format_ms`] to obtain the canonical form.
pub fn parse_srt_timestamp(raw: &str) -> Result<u64, TimestampError> {
    let trimmed = raw.trim();
    let malformed = || TimestampError::Malformed(trimmed.to_string());

    let (clock, fraction) = match trimmed.find([',', '.']) {
        Some(pos) => (&trimmed[..pos], Some(&trimmed[pos + 1..])),
        None => (trimmed, None),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => ("0", *m, *s),
        _ => return Err(malformed()),
    };

    let hours = parse_digits(hours).ok_or_else(malformed)?;
    let minutes = parse_digits(minutes).ok_or_else(malformed)?;
    let seconds = parse_digits(seconds).ok_or_else(malformed)?;
    if minutes >= 60 || seconds >= 60 {
        return Err(malformed());
    }

    let millis = match fraction {
        None => 0,
        Some(f) if f.is_empty() || f.len() > 3 => return Err(malformed()),
        Some(f) => {
            let value = parse_digits(f).ok_or_else(malformed)?;
            value * 10u64.pow(3 - f.len() as u32)
        }
    };

    hours
        .checked_mul(MS_PER_HOUR)
        .and_then(|h| h.checked_add(minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND + millis))
        .ok_or_else(malformed)
}

/// Parse an ASCII digit string. Rejects signs, whitespace and empty input,
/// all of which `str::parse` would otherwise accept or mis-report.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
