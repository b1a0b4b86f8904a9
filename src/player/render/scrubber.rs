//! Scrubber rendering for the teleprompter.
//!
//! A one-row track spanning the cue timeline. Every cue start gets a marker;
//! the active cue's marker is highlighted and the playhead shows elapsed time.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::subtitle::Cue;
use crate::theme::Theme;

/// One column of the scrubber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubCell {
    /// Not yet played
    Track,
    /// Already played
    Played,
    /// Current position
    Playhead,
    /// Start of a cue
    Marker,
    /// Start of the active cue
    ActiveMarker,
}

impl ScrubCell {
    fn symbol(self) -> char {
        match self {
            ScrubCell::Track => '─',
            ScrubCell::Played => '━',
            ScrubCell::Playhead => '⏺',
            ScrubCell::Marker => '◆',
            ScrubCell::ActiveMarker => '◈',
        }
    }
}

/// Column of a marker at `seconds` on a track `width` columns wide.
pub fn marker_column(seconds: f64, duration: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let ratio = if duration > 0.0 {
        (seconds / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((ratio * width as f64) as usize).min(width - 1)
}

/// Build the scrubber cells.
///
/// The active marker wins over the playhead, which wins over plain markers.
pub fn build_scrubber_cells(
    width: usize,
    elapsed_seconds: f64,
    duration: f64,
    cues: &[Cue],
    current: Option<usize>,
) -> Vec<ScrubCell> {
    if width == 0 {
        return Vec::new();
    }

    let head = marker_column(elapsed_seconds, duration, width);
    let mut cells: Vec<ScrubCell> = (0..width)
        .map(|i| {
            if i < head {
                ScrubCell::Played
            } else {
                ScrubCell::Track
            }
        })
        .collect();
    cells[head] = ScrubCell::Playhead;

    for (i, cue) in cues.iter().enumerate() {
        let col = marker_column(cue.start_seconds, duration, width);
        if current == Some(i) {
            cells[col] = ScrubCell::ActiveMarker;
        } else if !matches!(cells[col], ScrubCell::Playhead | ScrubCell::ActiveMarker) {
            cells[col] = ScrubCell::Marker;
        }
    }

    cells
}

/// Index of the cue whose marker is nearest to `column`.
///
/// Ties go to the earlier cue. `None` when there is nothing to hit.
pub fn cue_at_column(column: usize, width: usize, duration: f64, cues: &[Cue]) -> Option<usize> {
    if width == 0 {
        return None;
    }
    cues.iter()
        .enumerate()
        .min_by_key(|(_, cue)| marker_column(cue.start_seconds, duration, width).abs_diff(column))
        .map(|(i, _)| i)
}

/// Scrubber widget.
pub struct Scrubber<'a> {
    pub cues: &'a [Cue],
    pub elapsed_seconds: f64,
    pub duration: f64,
    pub current: Option<usize>,
    pub theme: &'a Theme,
}

impl Widget for Scrubber<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cells = build_scrubber_cells(
            area.width as usize,
            self.elapsed_seconds,
            self.duration,
            self.cues,
            self.current,
        );
        let spans: Vec<Span<'static>> = cells
            .into_iter()
            .map(|cell| {
                let style = match cell {
                    ScrubCell::Track => self.theme.text_secondary_style(),
                    ScrubCell::Played | ScrubCell::Marker => self.theme.accent_style(),
                    ScrubCell::Playhead => self.theme.text_style(),
                    ScrubCell::ActiveMarker => self.theme.accent_bold_style(),
                };
                Span::styled(cell.symbol().to_string(), style)
            })
            .collect();
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
