//! Dashboard screen: KPI row, sort toolbar, active certifications,
//! credential history and tools.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use studybuddy_core::{
    format_date, parse_color, CertSort, Certification, CertificationRecord, Dashboard, Theme,
};

/// Width of the text progress bar, excluding brackets.
const BAR_WIDTH: usize = 20;

/// Data needed to render the dashboard.
pub struct DashboardProps<'a> {
    pub dashboard: &'a Dashboard,
    /// Active certifications, already sorted.
    pub rows: &'a [Certification],
    pub sort: CertSort,
    pub cursor: usize,
    pub date_format: &'a str,
}

/// A text progress bar such as `[########------------]  40%`.
pub fn progress_bar(percent: u16, width: usize) -> String {
    let percent = percent.min(100);
    let filled = (usize::from(percent) * width + 50) / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        "-".repeat(width - filled)
    )
}

/// Left half of an active certification row.
pub fn cert_summary(cert: &Certification, date_format: &str) -> String {
    format!(
        "{}  [{}]  Due {}",
        cert.name,
        cert.kind,
        format_date(cert.due, date_format)
    )
}

/// One credential history row.
pub fn record_summary(record: &CertificationRecord, date_format: &str) -> String {
    format!(
        "{} [{}]  Date Completed {}  Expires {}",
        record.name,
        record.kind,
        format_date(record.completed, date_format),
        format_date(record.expires, date_format)
    )
}

pub fn render_dashboard(f: &mut Frame, area: Rect, props: &DashboardProps<'_>, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(7),
        ])
        .split(area);

    render_kpis(f, chunks[0], props.dashboard, theme);
    render_toolbar(f, chunks[1], props.sort, theme);
    render_active(f, chunks[2], props, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);
    render_history(f, bottom[0], props, theme);
    render_tools(f, bottom[1], props.dashboard, theme);
}

fn bordered(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(parse_color(&theme.dashboard.border_fg)))
}

fn render_kpis(f: &mut Frame, area: Rect, dashboard: &Dashboard, theme: &Theme) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let colors = [
        &theme.dashboard.completed_fg,
        &theme.dashboard.in_progress_fg,
        &theme.dashboard.hours_fg,
    ];
    let muted = parse_color(&theme.dashboard.muted_fg);

    for ((kpi, color), tile) in dashboard.summary().iter().zip(colors).zip(tiles.iter()) {
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                kpi.value.to_string(),
                Style::default()
                    .fg(parse_color(color))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(kpi.label, Style::default().fg(muted))),
        ])
        .centered()
        .block(Block::default().borders(Borders::ALL).border_style(
            Style::default().fg(parse_color(&theme.dashboard.border_fg)),
        ));
        f.render_widget(body, *tile);
    }
}

fn render_toolbar(f: &mut Frame, area: Rect, sort: CertSort, theme: &Theme) {
    let muted = parse_color(&theme.dashboard.muted_fg);
    let line = Line::from(vec![
        Span::styled(" Add Certification + ", Style::default().fg(muted)),
        Span::raw("   Sort: "),
        Span::styled(
            sort.label(),
            Style::default()
                .fg(parse_color(&theme.dashboard.selected_fg))
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_active(f: &mut Frame, area: Rect, props: &DashboardProps<'_>, theme: &Theme) {
    let selected_fg = parse_color(&theme.dashboard.selected_fg);
    let progress_fg = parse_color(&theme.dashboard.progress_fg);

    let lines: Vec<Line> = props
        .rows
        .iter()
        .enumerate()
        .map(|(i, cert)| {
            let is_selected = i == props.cursor;
            let marker = if is_selected { "> " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(selected_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Reset)
            };
            Line::from(vec![
                Span::styled(
                    format!("{marker}{}", cert_summary(cert, props.date_format)),
                    name_style,
                ),
                Span::raw("   Study progress "),
                Span::styled(
                    progress_bar(cert.percent(), BAR_WIDTH),
                    Style::default().fg(progress_fg),
                ),
            ])
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(bordered("Active Certifications", theme)),
        area,
    );
}

fn render_history(f: &mut Frame, area: Rect, props: &DashboardProps<'_>, theme: &Theme) {
    let lines: Vec<Line> = props
        .dashboard
        .history
        .iter()
        .map(|r| Line::from(format!(" {}", record_summary(r, props.date_format))))
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(bordered("Certifications", theme)),
        area,
    );
}

fn render_tools(f: &mut Frame, area: Rect, dashboard: &Dashboard, theme: &Theme) {
    let muted = parse_color(&theme.dashboard.muted_fg);
    let mut lines = Vec::new();
    for tool in &dashboard.tools {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" [{}] ", tool.badge),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(tool.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", tool.description),
            Style::default().fg(muted),
        )));
    }
    f.render_widget(Paragraph::new(lines).block(bordered("Tools", theme)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0, 10), "[----------]   0%");
        assert_eq!(progress_bar(55, 10), "[######----]  55%");
        assert_eq!(progress_bar(100, 10), "[##########] 100%");
    }

    #[test]
    fn progress_bar_clamps_over_100() {
        assert_eq!(progress_bar(250, 4), "[####] 100%");
    }

    #[test]
    fn cert_summary_uses_date_format() {
        let dash = Dashboard::sample();
        let line = cert_summary(&dash.active[0], "%m/%d/%Y");
        assert_eq!(line, "CompTIA Security+  [Exam]  Due 11/15/2025");
    }

    #[test]
    fn record_summary_shows_both_dates() {
        let dash = Dashboard::sample();
        let line = record_summary(&dash.history[0], "%Y-%m-%d");
        assert_eq!(
            line,
            "Linux Essentials [Cred]  Date Completed 2025-08-14  Expires 2028-08-14"
        );
    }
}
