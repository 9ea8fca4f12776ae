//! Unified action system for Study Buddy.
//!
//! Every key-triggerable action outside the text forms is represented by the
//! [`Action`] enum. [`ActionRegistry`] provides metadata (id, name,
//! description, category) used by `keymap.toml` parsing and the help popup.

/// Every key-triggerable action in Study Buddy.
///
/// Variants carry no parameters; context is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    GoHome,
    GoSignup,
    // Dashboard
    SortCycle,
    // Account
    SignOut,
    // System
    Help,
    Quit,
}

/// Broad category for grouping actions in the help popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Dashboard,
    Account,
    System,
}

impl ActionCategory {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Dashboard => "Dashboard",
            Self::Account => "Account",
            Self::System => "System",
        }
    }
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"sort_cycle"`).
    pub id: &'static str,
    /// Human-readable name (e.g. `"Cycle Sort"`).
    pub name: &'static str,
    /// Short description (e.g. `"Switch to the next certification ordering"`).
    pub description: &'static str,
    pub category: ActionCategory,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        let descriptors = vec![
            ActionDescriptor {
                action: Action::CursorUp,
                id: "cursor_up",
                name: "Cursor Up",
                description: "Select the previous certification",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::CursorDown,
                id: "cursor_down",
                name: "Cursor Down",
                description: "Select the next certification",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::GoHome,
                id: "go_home",
                name: "Go to Sign In",
                description: "Open the sign-in screen",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::GoSignup,
                id: "go_signup",
                name: "Go to Sign Up",
                description: "Open the account creation screen",
                category: ActionCategory::Navigation,
            },
            ActionDescriptor {
                action: Action::SortCycle,
                id: "sort_cycle",
                name: "Cycle Sort",
                description: "Switch to the next certification ordering",
                category: ActionCategory::Dashboard,
            },
            ActionDescriptor {
                action: Action::SignOut,
                id: "sign_out",
                name: "Sign Out",
                description: "Leave the dashboard and return to sign in",
                category: ActionCategory::Account,
            },
            ActionDescriptor {
                action: Action::Help,
                id: "help",
                name: "Help",
                description: "Show key bindings",
                category: ActionCategory::System,
            },
            ActionDescriptor {
                action: Action::Quit,
                id: "quit",
                name: "Quit",
                description: "Exit Study Buddy",
                category: ActionCategory::System,
            },
        ];
        Self { descriptors }
    }

    /// Returns all descriptors.
    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Finds an action by its string id (for keymap.toml parsing).
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
