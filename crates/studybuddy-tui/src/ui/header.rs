//! Top bar with the brand badge and, once signed in, a greeting.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use studybuddy_core::{parse_color, Theme};

/// Short brand shown at the left edge.
pub const BRAND: &str = "S.B";

/// Text shown next to the brand; empty when nobody is signed in.
pub fn greeting(user: Option<&str>) -> String {
    match user {
        Some(name) => format!("Hello {name}"),
        None => String::new(),
    }
}

pub fn render_header(f: &mut Frame, area: Rect, user: Option<&str>, theme: &Theme) {
    let bg = parse_color(&theme.header.bg);

    let mut spans = vec![
        Span::styled(
            format!(" {BRAND} "),
            Style::default()
                .fg(parse_color(&theme.header.brand_fg))
                .bg(parse_color(&theme.header.brand_bg))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Study Buddy", Style::default().bg(bg)),
    ];

    if user.is_some() {
        spans.push(Span::styled(
            format!("   {}", greeting(user)),
            Style::default()
                .fg(parse_color(&theme.header.greeting_fg))
                .bg(bg),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)), area);
}
