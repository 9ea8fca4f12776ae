//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod dashboard;
pub mod header;
pub mod login;
pub mod popup;
pub mod signup;
pub mod statusbar;
