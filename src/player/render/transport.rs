//! Transport controls, clock readout and key-hint footer.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::subtitle::timestamp::format_ms;
use crate::theme::Theme;

/// Key hints shown in the footer.
pub const FOOTER_KEYS: &[(&str, &str)] = &[
    ("space", "play/pause"),
    ("←/→", "step"),
    ("?", "help"),
    ("q", "quit"),
];

/// Build the `⏮  ▶  ⏭` line; the middle icon reflects the clock state.
pub fn transport_line(running: bool, theme: &Theme) -> Line<'static> {
    let play = if running { "⏸" } else { "▶" };
    Line::from(vec![
        Span::styled("⏮", theme.accent_style()),
        Span::raw("   "),
        Span::styled(play, theme.accent_bold_style()),
        Span::raw("   "),
        Span::styled("⏭", theme.accent_style()),
    ])
}

/// Elapsed time readout, with a pause hint while stopped.
pub fn clock_line(elapsed_ms: u64, running: bool, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(format_ms(elapsed_ms), theme.text_style())];
    if !running {
        spans.push(Span::styled("  paused", theme.text_secondary_style()));
    }
    Line::from(spans)
}

/// Styled spans for footer keybinding hints, joined by " | ".
pub fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
