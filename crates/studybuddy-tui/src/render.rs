use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use studybuddy_core::{parse_color, ActionCategory, ActionRegistry, Keymap, Route, Theme};

use crate::app::App;
use crate::ui::dashboard::{render_dashboard, DashboardProps};
use crate::ui::header::render_header;
use crate::ui::login::render_login;
use crate::ui::popup::render_popup;
use crate::ui::signup::render_signup;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Main render function. Composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], app.user(), theme);

    match app.route() {
        Route::Home => render_login(f, chunks[1], app.login(), app.login_focus(), theme),
        Route::Signup => render_signup(f, chunks[1], app.signup(), app.signup_focus(), theme),
        Route::Dashboard => {
            let rows = app.sorted_certifications();
            let props = DashboardProps {
                dashboard: app.dashboard(),
                rows: &rows,
                sort: app.sort(),
                cursor: app.cursor(),
                date_format: app.date_format(),
            };
            render_dashboard(f, chunks[1], &props, theme);
        }
        Route::NotFound(path) => render_not_found(f, chunks[1], path, theme),
    }

    let login = app.login();
    let props = StatusBarProps {
        route: app.route(),
        status_message: app.status_message(),
        attempts_left: (login.attempts() > 0).then(|| login.remaining_attempts()),
        rate_limited: login.is_rate_limited(),
    };
    render_statusbar(f, chunks[2], &props, theme);

    if app.show_help() {
        let lines = help_lines(app.action_registry(), app.keymap());
        render_popup(f, "Help", &lines, theme);
    }
}

fn render_not_found(f: &mut Frame, area: Rect, path: &str, theme: &Theme) {
    let hint_fg = parse_color(&theme.form.hint_fg);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "404 - Page Not Found",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Nothing lives at {path}")),
        Line::from(""),
        Line::from(Span::styled(
            "h: sign in | n: sign up | q: quit",
            Style::default().fg(hint_fg),
        )),
    ];
    let body = Paragraph::new(lines).centered().block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", Route::NotFound(path.to_string()).title()))
            .border_style(Style::default().fg(parse_color(&theme.form.border_fg))),
    );
    f.render_widget(body, area);
}

/// Help popup content: form keys, then every action grouped by category
/// with its current key bindings.
pub fn help_lines(registry: &ActionRegistry, keymap: &Keymap) -> Vec<String> {
    let mut lines = vec![
        "Forms".to_owned(),
        "  Tab/↓    - Next field".to_owned(),
        "  S-Tab/↑  - Previous field".to_owned(),
        "  ←/→      - Choose option".to_owned(),
        "  Enter    - Submit".to_owned(),
        "  Ctrl+n   - Sign up (from sign in)".to_owned(),
        "  Esc      - Back / quit".to_owned(),
    ];

    for category in [
        ActionCategory::Navigation,
        ActionCategory::Dashboard,
        ActionCategory::Account,
        ActionCategory::System,
    ] {
        lines.push(category.label().to_owned());
        for desc in registry.all().iter().filter(|d| d.category == category) {
            let keys = keymap
                .keys_for_action(desc.action)
                .map(|k| k.join("/"))
                .unwrap_or_else(|| "-".to_owned());
            lines.push(format!("  {keys:<8} - {}", desc.name));
        }
    }

    lines.push(String::new());
    lines.push("Press Esc or ? to close".to_owned());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use studybuddy_core::config::settings::Config;

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn new_app() -> App {
        App::new(&Config::default(), Theme::default(), Keymap::default())
    }

    #[test]
    fn help_lists_bound_keys() {
        let lines = help_lines(&ActionRegistry::new(), &Keymap::default());
        assert!(lines.contains(&"  s        - Cycle Sort".to_owned()));
        assert!(lines.contains(&"  o        - Sign Out".to_owned()));
        assert!(lines.contains(&"Dashboard".to_owned()));
    }

    #[test]
    fn sign_in_screen_renders_form() {
        let screen = draw(&new_app());
        assert!(screen.contains("S.B"));
        assert!(screen.contains("Sign in"));
        assert!(screen.contains("Username:"));
    }

    #[test]
    fn dashboard_renders_sample_data() {
        let screen = draw(&new_app().with_route(Route::Dashboard));
        assert!(screen.contains("CompTIA Security+"));
        assert!(screen.contains("Completed Certifications"));
        assert!(screen.contains("Flash Card Generator"));
    }

    #[test]
    fn unknown_route_renders_not_found() {
        let screen = draw(&new_app().with_route(Route::parse("/settings")));
        assert!(screen.contains("404 - Page Not Found"));
        assert!(screen.contains("/settings"));
    }
}
