//! Configuration management for Study Buddy.
//!
//! Settings ([`settings::Config`]), colors ([`theme::Theme`]) and key
//! bindings ([`keymap::Keymap`]) are stored as TOML files and loaded at startup.

pub mod keymap;
pub mod settings;
pub mod theme;
