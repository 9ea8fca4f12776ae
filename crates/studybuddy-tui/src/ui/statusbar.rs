//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the current route, an optional status message and the lockout
//! warning while sign-in is rate limited.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use studybuddy_core::{parse_color, Route, Theme};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub route: &'a Route,
    pub status_message: Option<&'a str>,
    /// Sign-in attempts left, shown only while some have been used.
    pub attempts_left: Option<u32>,
    pub rate_limited: bool,
}

/// Text of the warning segment, if any.
pub fn warning_text(props: &StatusBarProps<'_>) -> Option<String> {
    if props.rate_limited {
        return Some("Sign-in locked".to_string());
    }
    props
        .attempts_left
        .map(|n| format!("{n} sign-in attempt{} left", if n == 1 { "" } else { "s" }))
}

pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);

    let mut spans = vec![Span::styled(
        format!(" {} ", props.route.path()),
        Style::default()
            .fg(parse_color(&theme.statusbar.route_fg))
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(warning) = warning_text(props) {
        spans.push(Span::styled(
            format!("  {warning}"),
            Style::default()
                .fg(parse_color(&theme.statusbar.warning_fg))
                .bg(bg),
        ));
    }

    if let Some(msg) = props.status_message {
        spans.push(Span::styled(
            format!("  {msg}"),
            Style::default()
                .fg(parse_color(&theme.statusbar.message_fg))
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}
