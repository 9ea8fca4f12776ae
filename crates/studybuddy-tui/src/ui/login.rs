//! Sign-in form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use studybuddy_core::{parse_color, LoginField, LoginState, Theme};

use super::popup::centered_rect;

const FIELDS: [LoginField; 2] = [LoginField::Username, LoginField::Password];

/// Builds the form body: fields, progress or error line, and key hints.
pub fn form_lines(state: &LoginState, focused: LoginField, theme: &Theme) -> Vec<Line<'static>> {
    let label_fg = parse_color(&theme.form.label_fg);
    let focused_fg = parse_color(&theme.form.focused_fg);
    let hint_fg = parse_color(&theme.form.hint_fg);

    let mut lines = vec![Line::from("")];

    for field in FIELDS {
        let is_focused = field == focused;
        let marker = if is_focused { "> " } else { "  " };
        let cursor = if is_focused { "_" } else { "" };
        let value = state.form().display_value(field);
        let style = if is_focused {
            Style::default().fg(focused_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(label_fg)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}: {value}{cursor}", field.label()),
            style,
        )));
    }

    lines.push(Line::from(""));

    if state.is_loading() {
        lines.push(Line::from(Span::styled(
            "  Signing in...",
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

    if state.attempts() > 0 && !state.is_rate_limited() {
        lines.push(Line::from(Span::styled(
            format!("  Attempts left: {}", state.remaining_attempts()),
            Style::default().fg(hint_fg),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab: next field | Enter: sign in | Ctrl+n: sign up | Esc: quit",
        Style::default().fg(hint_fg),
    )));

    lines
}

/// Renders the sign-in form centered in `area`.
pub fn render_login(
    f: &mut Frame,
    area: Rect,
    state: &LoginState,
    focused: LoginField,
    theme: &Theme,
) {
    let area = centered_rect(60, 60, area);
    let border_fg = parse_color(&theme.form.border_fg);

    f.render_widget(Clear, area);

    let form = Paragraph::new(form_lines(state, focused, theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Sign in ")
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(form, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use studybuddy_core::login::reduce;
    use studybuddy_core::LoginEvent;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn edit(state: LoginState, field: LoginField, value: &str) -> LoginState {
        reduce(
            state,
            LoginEvent::FieldEdited {
                field,
                value: value.to_string(),
            },
        )
    }

    #[test]
    fn focused_field_has_marker_and_password_is_masked() {
        let state = edit(LoginState::default(), LoginField::Username, "amy");
        let state = edit(state, LoginField::Password, "secret");
        let lines = text(&form_lines(&state, LoginField::Password, &Theme::default()));

        assert!(lines.contains(&"  Username: amy".to_string()));
        assert!(lines.contains(&"> Password: ******_".to_string()));
        assert!(!lines.iter().any(|l| l.contains("secret")));
    }

    #[test]
    fn loading_line_while_submitting() {
        let state = edit(LoginState::default(), LoginField::Username, "testuser");
        let state = edit(state, LoginField::Password, "pw");
        let state = reduce(state, LoginEvent::SubmitRequested);
        let lines = text(&form_lines(&state, LoginField::Username, &Theme::default()));

        assert!(lines.iter().any(|l| l.contains("Signing in...")));
    }

    #[test]
    fn failure_shows_error_and_attempts_left() {
        let state = edit(LoginState::default(), LoginField::Username, "testuser");
        let state = edit(state, LoginField::Password, "pw");
        let state = reduce(state, LoginEvent::SubmitRequested);
        let state = reduce(state, LoginEvent::AuthFailed);
        let lines = text(&form_lines(&state, LoginField::Password, &Theme::default()));

        assert!(lines.iter().any(|l| l.contains("Invalid username or password.")));
        assert!(lines.iter().any(|l| l.contains("Attempts left: 4")));
    }
}
