//! Help overlay for the teleprompter.
//!
//! Displays a centered modal with all keyboard and mouse controls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::theme::Theme;

/// (key, description) rows of the help overlay, grouped by section.
/// A row with an empty key is a section heading.
pub const HELP_ROWS: &[(&str, &str)] = &[
    ("", "Playback"),
    ("Space", "Play / pause"),
    ("←  h", "Previous cue"),
    ("→  l", "Next cue"),
    ("Home", "Back to 00:00:00"),
    ("Click", "Jump to the nearest cue marker"),
    ("", "Session"),
    ("R", "Reset session and quit"),
    ("", "General"),
    ("?", "Show this help"),
    ("q  Esc", "Quit"),
];

/// Width of the help box including borders.
pub const HELP_BOX_WIDTH: u16 = 46;

/// Height of the help box: rows, section spacing, closing hint and borders.
pub fn help_box_height() -> u16 {
    build_help_text(&Theme::default()).len() as u16 + 2
}

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    term_height.saturating_sub(help_box_height()) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    term_width.saturating_sub(HELP_BOX_WIDTH) / 2
}

/// Build the styled help text.
pub fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (key, desc) in HELP_ROWS {
        if key.is_empty() {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!(" {}", desc),
                theme.accent_bold_style(),
            )));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("   {:<8}", key), theme.accent_style()),
                Span::styled(desc.to_string(), Style::default().fg(theme.text_primary)),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "      Press any key to close",
        theme.text_secondary_style(),
    )));
    lines
}

/// Help modal widget; renders centered within the given area.
pub struct HelpOverlay<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = HELP_BOX_WIDTH.min(area.width);
        let height = help_box_height().min(area.height);
        let modal = Rect::new(
            area.x + calc_help_start_col(area.width),
            area.y + calc_help_start_row(area.height),
            width,
            height,
        );

        Clear.render(modal, buf);
        Paragraph::new(build_help_text(self.theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.accent_style())
                    .title(" subprompt help "),
            )
            .render(modal, buf);
    }
}
