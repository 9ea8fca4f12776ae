//! Sign-up form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use studybuddy_core::{parse_color, SignupField, SignupState, Theme};

use super::popup::centered_rect;

/// The text shown for one field: its value, or the placeholder when empty.
/// Selectors get arrow hints.
fn field_text(state: &SignupState, field: SignupField) -> String {
    let value = state.form().display_value(field);
    let shown = if value.is_empty() {
        field.placeholder().to_string()
    } else {
        value
    };
    match field.options() {
        Some(_) => format!("< {shown} >"),
        None => shown,
    }
}

/// Builds the form body: every field, the status line and key hints.
pub fn form_lines(state: &SignupState, focused: SignupField, theme: &Theme) -> Vec<Line<'static>> {
    let label_fg = parse_color(&theme.form.label_fg);
    let focused_fg = parse_color(&theme.form.focused_fg);
    let hint_fg = parse_color(&theme.form.hint_fg);

    let mut lines = vec![Line::from("")];

    for field in SignupField::ALL {
        let is_focused = field == focused;
        let marker = if is_focused { "> " } else { "  " };
        let required = if field.is_required() { "" } else { " (optional)" };
        let empty = state.form().value(field).is_empty();

        let label_style = if is_focused {
            Style::default().fg(focused_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(label_fg)
        };
        let value_style = if empty {
            Style::default().fg(hint_fg)
        } else {
            label_style
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}{required}: ", field.label()), label_style),
            Span::styled(field_text(state, field), value_style),
        ]));
    }

    lines.push(Line::from(""));

    if state.is_loading() {
        lines.push(Line::from(Span::styled(
            "  Signing up...",
            Style::default()
                .fg(parse_color(&theme.form.loading_fg))
                .add_modifier(Modifier::ITALIC),
        )));
    }

    if let Some(err) = state.error() {
        lines.push(Line::from(Span::styled(
            format!("  {err}"),
            Style::default().fg(parse_color(&theme.form.error_fg)),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: next field | ←/→: choose option | Enter: sign up | Esc: back",
        Style::default().fg(hint_fg),
    )));

    lines
}

/// Renders the sign-up form centered in `area`.
pub fn render_signup(
    f: &mut Frame,
    area: Rect,
    state: &SignupState,
    focused: SignupField,
    theme: &Theme,
) {
    let area = centered_rect(70, 80, area);
    let border_fg = parse_color(&theme.form.border_fg);

    f.render_widget(Clear, area);

    let form = Paragraph::new(form_lines(state, focused, theme))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sign up ")
                .border_style(Style::default().fg(border_fg)),
        );

    f.render_widget(form, area);
}
