//! Theme configuration for Study Buddy.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#6366f1"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_toml, CoreResult};

/// Complete theme configuration with per-component color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub header: HeaderTheme,
    #[serde(default)]
    pub form: FormTheme,
    #[serde(default)]
    pub dashboard: DashboardTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        read_toml(path)
    }
}

/// Top header bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderTheme {
    pub bg: String,
    pub brand_fg: String,
    pub brand_bg: String,
    pub greeting_fg: String,
}

impl Default for HeaderTheme {
    fn default() -> Self {
        Self {
            bg: "reset".to_string(),
            brand_fg: "white".to_string(),
            brand_bg: "#6366f1".to_string(),
            greeting_fg: "gray".to_string(),
        }
    }
}

/// Sign-in and sign-up form colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormTheme {
    pub border_fg: String,
    pub label_fg: String,
    pub focused_fg: String,
    pub error_fg: String,
    pub loading_fg: String,
    pub hint_fg: String,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            border_fg: "#6366f1".to_string(),
            label_fg: "white".to_string(),
            focused_fg: "yellow".to_string(),
            error_fg: "red".to_string(),
            loading_fg: "cyan".to_string(),
            hint_fg: "dark_gray".to_string(),
        }
    }
}

/// Dashboard colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardTheme {
    pub border_fg: String,
    pub completed_fg: String,
    pub in_progress_fg: String,
    pub hours_fg: String,
    pub progress_fg: String,
    pub selected_fg: String,
    pub muted_fg: String,
}

impl Default for DashboardTheme {
    fn default() -> Self {
        Self {
            border_fg: "gray".to_string(),
            completed_fg: "green".to_string(),
            in_progress_fg: "yellow".to_string(),
            hours_fg: "magenta".to_string(),
            progress_fg: "#6366f1".to_string(),
            selected_fg: "yellow".to_string(),
            muted_fg: "dark_gray".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBarTheme {
    pub bg: String,
    pub route_fg: String,
    pub message_fg: String,
    pub warning_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            route_fg: "black".to_string(),
            message_fg: "magenta".to_string(),
            warning_fg: "red".to_string(),
        }
    }
}

/// Popup dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupTheme {
    pub border_fg: String,
    pub title_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "cyan".to_string(),
            title_fg: "white".to_string(),
        }
    }
}

/// Converts a color name or `#rrggbb` hex string to a ratatui [`Color`](ratatui::style::Color).
///
/// Unknown names fall back to `Color::Reset`.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_theme_form() {
        let theme = Theme::default();
        assert_eq!(theme.form.error_fg, "red");
        assert_eq!(theme.form.focused_fg, "yellow");
    }

    #[test]
    fn default_theme_dashboard_kpis() {
        let theme = Theme::default();
        assert_eq!(theme.dashboard.completed_fg, "green");
        assert_eq!(theme.dashboard.in_progress_fg, "yellow");
        assert_eq!(theme.dashboard.hours_fg, "magenta");
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("Dark_Gray"), Color::DarkGray);
        assert_eq!(parse_color("purple"), Color::Magenta);
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#6366f1"), Color::Rgb(0x63, 0x66, 0xf1));
    }

    #[test]
    fn parse_unknown_falls_back_to_reset() {
        assert_eq!(parse_color("chartreuse-ish"), Color::Reset);
        assert_eq!(parse_color("#12"), Color::Reset);
    }

    #[test]
    fn load_partial_theme_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(
            &path,
            r#"
[statusbar]
bg = "black"
route_fg = "white"
message_fg = "cyan"
warning_fg = "yellow"
"#,
        )
        .unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.statusbar.bg, "black");
        assert_eq!(theme.form.border_fg, "#6366f1");
    }
}
