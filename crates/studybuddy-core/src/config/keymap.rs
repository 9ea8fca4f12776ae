//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"s"`, `"?"`) to [`Action`]
//! values. They apply on screens without a focused text field; the sign-in
//! and sign-up forms consume raw characters instead.
//!
//! TOML files use string action identifiers (e.g. `"sort_cycle"`); these are
//! resolved to [`Action`] via [`ActionRegistry::find_by_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionRegistry};
use crate::error::{read_toml, CoreResult};

/// Raw TOML representation, deserialized first, then resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
///
/// Stores bindings as a `HashMap<String, Action>` for O(1) lookup, plus a
/// reverse map used by the help popup.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("j".to_string(), Action::CursorDown);
        bindings.insert("k".to_string(), Action::CursorUp);
        bindings.insert("s".to_string(), Action::SortCycle);
        bindings.insert("o".to_string(), Action::SignOut);
        bindings.insert("h".to_string(), Action::GoHome);
        bindings.insert("n".to_string(), Action::GoSignup);
        bindings.insert("?".to_string(), Action::Help);
        bindings.insert("q".to_string(), Action::Quit);

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sorted for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// Bindings in the file are layered over the defaults; unknown action
    /// ids are skipped with a warning.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw: RawKeymap = read_toml(path)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawKeymap) -> Self {
        let registry = ActionRegistry::new();
        let mut bindings = Self::default().bindings;
        for (key, action_id) in raw.bindings {
            match registry.find_by_id(&action_id) {
                Some(action) => {
                    bindings.insert(key, action);
                }
                None => tracing::warn!("Ignoring unknown action '{action_id}' bound to '{key}'"),
            }
        }
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }
}
