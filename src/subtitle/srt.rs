//! SubRip (`.srt`) parser.
//!
//! A file is a sequence of blocks separated by blank lines:
//!
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:02,500
//! First line
//! <i>second line</i>
//! ```
//!
//! The numeric index line is optional. Timing lines may use `.` instead of
//! `,` and may carry position hints after the end timestamp, which are
//! ignored. Parsing is all-or-nothing: any malformed block fails the whole
//! file.

use crate::error::SrtError;

use super::timestamp::parse_srt_timestamp;
use super::Cue;

const ARROW: &str = "-->";

/// Parse `.srt` text into cues in file order.
///
/// Returns [`SrtError::Empty`] when the input holds no cues at all.
pub fn parse(input: &str) -> Result<Vec<Cue>, SrtError> {
    let normalized = input
        .trim_start_matches('\u{feff}')
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let mut lines = normalized.lines().enumerate().peekable();
    let mut cues = Vec::new();

    while let Some((line_idx, line)) = lines.next() {
        let header = line.trim();
        if header.is_empty() {
            continue;
        }

        let (id, timing_line_no, timing) = if looks_like_index(header) {
            match lines.next() {
                Some((idx, next)) if next.contains(ARROW) => (header.parse().ok(), idx + 1, next),
                Some((idx, next)) => {
                    return Err(SrtError::MissingTiming {
                        line: idx + 1,
                        found: next.to_string(),
                    })
                }
                None => {
                    return Err(SrtError::MissingTiming {
                        line: line_idx + 2,
                        found: String::new(),
                    })
                }
            }
        } else if header.contains(ARROW) {
            (None, line_idx + 1, line)
        } else {
            return Err(SrtError::MissingTiming {
                line: line_idx + 1,
                found: line.to_string(),
            });
        };

        let (start_ms, end_ms) = parse_timing_line(timing, timing_line_no)?;

        let mut text_lines = Vec::new();
        while let Some((_, text)) = lines.peek() {
            if text.trim().is_empty() {
                break;
            }
            text_lines.push(text.trim_end().to_string());
            lines.next();
        }

        if start_ms >= end_ms {
            tracing::warn!(line = timing_line_no, start_ms, end_ms, "Cue ends before it starts");
        }
        if let Some(prev) = cues.last().map(|c: &Cue| c.start_seconds) {
            if (start_ms as f64 / 1000.0) < prev {
                tracing::warn!(line = timing_line_no, "Cue starts before the previous cue");
            }
        }

        cues.push(Cue::from_millis(id, start_ms, end_ms, text_lines.join("\n")));
    }

    if cues.is_empty() {
        return Err(SrtError::Empty);
    }

    tracing::debug!(count = cues.len(), "Parsed SRT cues");
    Ok(cues)
}

fn looks_like_index(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

fn parse_timing_line(line: &str, line_no: usize) -> Result<(u64, u64), SrtError> {
    let (start, rest) = line.split_once(ARROW).ok_or_else(|| SrtError::MissingTiming {
        line: line_no,
        found: line.to_string(),
    })?;
    // Position hints like `X1:40 X2:600` may follow the end timestamp
    let end = rest.split_whitespace().next().unwrap_or("");

    let to_err = |source| SrtError::Timestamp {
        line: line_no,
        source,
    };
    let start = parse_srt_timestamp(start).map_err(to_err)?;
    let end = parse_srt_timestamp(end).map_err(to_err)?;
    Ok((start, end))
}
