//! Rendering for the teleprompter.
//!
//! Screen layout, top to bottom:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │                              │
//! │        subtitle panel        │
//! │                              │
//! │           ⏮  ▶  ⏭            │  transport
//! │         00:00:01,250         │  clock
//! │ ◆━━━━⏺────◆──────◆────────── │  scrubber
//! │  space: play/pause | q: quit │  footer
//! └──────────────────────────────┘
//! ```

mod help;
mod scrubber;
mod subtitle;
mod transport;

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::player::state::PlayerState;
use crate::theme::Theme;

pub use help::{build_help_text, HelpOverlay, HELP_BOX_WIDTH, HELP_ROWS};
pub use scrubber::{build_scrubber_cells, cue_at_column, marker_column, ScrubCell, Scrubber};
pub use subtitle::{wrapped_height, SubtitlePanel};
pub use transport::{build_footer_spans, clock_line, transport_line, FOOTER_KEYS};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLayout {
    pub subtitle: Rect,
    pub transport: Rect,
    pub clock: Rect,
    pub scrubber: Rect,
    pub footer: Rect,
}

impl PlayerLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        // One column of padding either side of the track
        let track = rows[3];
        let scrubber = Rect {
            x: track.x.saturating_add(1),
            width: track.width.saturating_sub(2),
            ..track
        };

        Self {
            subtitle: rows[0],
            transport: rows[1],
            clock: rows[2],
            scrubber,
            footer: rows[4],
        }
    }
}

/// Draw the whole player.
pub fn render(frame: &mut Frame, state: &PlayerState, theme: &Theme, now: Instant) {
    let layout = PlayerLayout::new(frame.area());
    let elapsed_ms = state.elapsed_ms_at(now);
    let running = state.is_running();

    frame.render_widget(
        SubtitlePanel {
            cue: state.current_cue(),
            show_timestamps: state.show_timestamps,
            theme,
        },
        layout.subtitle,
    );
    frame.render_widget(centered(transport_line(running, theme)), layout.transport);
    frame.render_widget(centered(clock_line(elapsed_ms, running, theme)), layout.clock);
    frame.render_widget(
        Scrubber {
            cues: state.cues().cues(),
            elapsed_seconds: elapsed_ms as f64 / 1000.0,
            duration: state.cues().duration_seconds(),
            current: state.current_index(),
            theme,
        },
        layout.scrubber,
    );
    frame.render_widget(
        centered(Line::from(build_footer_spans(FOOTER_KEYS, theme))),
        layout.footer,
    );

    if state.show_help {
        frame.render_widget(HelpOverlay { theme }, frame.area());
    }
}

fn centered(line: Line<'static>) -> Paragraph<'static> {
    Paragraph::new(line).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::subtitle::{Cue, CueStore};
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn state(now: Instant) -> PlayerState {
        let cues = CueStore::new(vec![
            Cue::from_millis(Some(1), 0, 2_000, "First <i>line</i>"),
            Cue::from_millis(Some(2), 2_500, 4_000, "Second"),
        ]);
        let config = PlayerConfig {
            show_timestamps: false,
            ..PlayerConfig::default()
        };
        PlayerState::new_at(now, cues, None, &config)
    }

    #[test]
    fn layout_stacks_rows_at_bottom() {
        let layout = PlayerLayout::new(Rect::new(0, 0, 40, 12));
        assert_eq!(layout.subtitle, Rect::new(0, 0, 40, 8));
        assert_eq!(layout.transport.y, 8);
        assert_eq!(layout.clock.y, 9);
        assert_eq!(layout.scrubber, Rect::new(1, 10, 38, 1));
        assert_eq!(layout.footer.y, 11);
    }

    #[test]
    fn renders_active_cue_and_controls() {
        let now = Instant::now();
        let state = state(now);
        let theme = Theme::with_accent(Color::Cyan);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render(frame, &state, &theme, now))
            .unwrap();

        let buf = terminal.backend().buffer();
        let screen: Vec<String> = (0..12).map(|y| row(buf, y)).collect();
        assert!(screen.iter().any(|l| l.contains("First line")));
        assert!(screen[8].contains('▶'));
        assert!(screen[9].contains("00:00:00,000"));
        assert!(screen[10].contains('◈'));
        assert!(screen[11].contains("quit"));
    }

    #[test]
    fn help_overlay_covers_screen() {
        let now = Instant::now();
        let mut state = state(now);
        state.toggle_help();
        let theme = Theme::with_accent(Color::Cyan);
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| render(frame, &state, &theme, now))
            .unwrap();

        let buf = terminal.backend().buffer();
        let screen: String = (0..24).map(|y| row(buf, y)).collect::<Vec<_>>().join("\n");
        assert!(screen.contains("subprompt help"));
        assert!(screen.contains("Press any key to close"));
    }
}
