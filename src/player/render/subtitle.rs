//! Subtitle panel: the active cue's text, vertically centered.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::subtitle::{markup, Cue};
use crate::theme::Theme;

/// Rows `lines` occupy once wrapped to `width` columns.
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    lines
        .iter()
        .map(|line| {
            let cols: usize = line
                .spans
                .iter()
                .map(|span| span.content.as_ref().width())
                .sum();
            cols.div_ceil(width).max(1)
        })
        .sum::<usize>()
        .min(u16::MAX as usize) as u16
}

/// Panel showing the active cue, or nothing in a gap.
pub struct SubtitlePanel<'a> {
    pub cue: Option<&'a Cue>,
    pub show_timestamps: bool,
    pub theme: &'a Theme,
}

impl SubtitlePanel<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let Some(cue) = self.cue else {
            return Vec::new();
        };
        let mut lines = markup::to_lines(&cue.text, self.theme.text_style());
        if self.show_timestamps {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("{} - {}", cue.start_time, cue.end_time),
                self.theme.text_secondary_style(),
            )));
        }
        lines
    }
}

impl Widget for SubtitlePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        if lines.is_empty() || area.height == 0 {
            return;
        }
        let height = wrapped_height(&lines, area.width).min(area.height);
        let inner = Rect {
            y: area.y + (area.height - height) / 2,
            height,
            ..area
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect::<String>()
    }

    #[test]
    fn wrapped_height_counts_wrapped_rows() {
        let lines = vec![Line::from("abcdefghij"), Line::from(""), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 4), 3 + 1 + 1);
        assert_eq!(wrapped_height(&lines, 20), 3);
        assert_eq!(wrapped_height(&lines, 0), 0);
    }

    #[test]
    fn renders_cue_text_centered() {
        let theme = Theme::with_accent(Color::Cyan);
        let cue = Cue::from_millis(Some(1), 0, 1_000, "Hello");
        let area = Rect::new(0, 0, 11, 5);
        let mut buf = Buffer::empty(area);
        SubtitlePanel {
            cue: Some(&cue),
            show_timestamps: false,
            theme: &theme,
        }
        .render(area, &mut buf);

        assert_eq!(row_text(&buf, 2), "   Hello   ");
        assert_eq!(row_text(&buf, 0).trim(), "");
    }

    #[test]
    fn renders_timestamps_under_text() {
        let theme = Theme::with_accent(Color::Cyan);
        let cue = Cue::from_millis(Some(1), 1_000, 2_500, "Hi");
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        SubtitlePanel {
            cue: Some(&cue),
            show_timestamps: true,
            theme: &theme,
        }
        .render(area, &mut buf);

        assert_eq!(row_text(&buf, 0).trim(), "Hi");
        assert_eq!(row_text(&buf, 2).trim(), "00:00:01,000 - 00:00:02,500");
    }

    #[test]
    fn gap_renders_nothing() {
        let theme = Theme::with_accent(Color::Cyan);
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        SubtitlePanel {
            cue: None,
            show_timestamps: true,
            theme: &theme,
        }
        .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
