use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use studybuddy_core::{Action, Keymap, Route};

/// Actions that can result from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Select the next certification.
    CursorDown,
    /// Select the previous certification.
    CursorUp,
    /// Switch to the next certification ordering.
    SortCycle,
    /// Leave the dashboard.
    SignOut,
    /// Open or close the key binding popup.
    ToggleHelp,
    /// Close the key binding popup.
    CloseHelp,
    /// Switch to another screen.
    Navigate(Route),
    /// Quit the application.
    Quit,
    /// Append a character to the focused form field.
    FormChar(char),
    /// Remove the last character of the focused form field.
    FormBackspace,
    /// Move to the next form field.
    FormNextField,
    /// Move to the previous form field.
    FormPrevField,
    /// Submit the current form.
    FormSubmit,
    /// Pick the next option of a selector field.
    OptionNext,
    /// Pick the previous option of a selector field.
    OptionPrev,
    /// No action for this key.
    None,
}

/// Maps a key press to an [`InputAction`] for the current screen.
///
/// Form screens consume raw characters, so the keymap only applies to the
/// dashboard and the not-found screen.
pub fn handle_key(key: KeyEvent, route: &Route, help_open: bool, keymap: &Keymap) -> InputAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputAction::Quit;
    }
    if help_open {
        return handle_help_key(key);
    }
    match route {
        Route::Home => handle_login_key(key),
        Route::Signup => handle_signup_key(key),
        Route::Dashboard | Route::NotFound(_) => handle_normal_key(key, keymap),
    }
}

/// Converts an `Action` enum variant to the corresponding `InputAction`.
fn action_to_input_action(action: Action) -> InputAction {
    match action {
        Action::CursorDown => InputAction::CursorDown,
        Action::CursorUp => InputAction::CursorUp,
        Action::GoHome => InputAction::Navigate(Route::Home),
        Action::GoSignup => InputAction::Navigate(Route::Signup),
        Action::SortCycle => InputAction::SortCycle,
        Action::SignOut => InputAction::SignOut,
        Action::Help => InputAction::ToggleHelp,
        Action::Quit => InputAction::Quit,
    }
}

fn handle_help_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
            InputAction::CloseHelp
        }
        _ => InputAction::None,
    }
}

fn handle_normal_key(key: KeyEvent, keymap: &Keymap) -> InputAction {
    // Hardcoded keys: arrows and F1 (not remappable)
    match key.code {
        KeyCode::Down => InputAction::CursorDown,
        KeyCode::Up => InputAction::CursorUp,
        KeyCode::F(1) => InputAction::ToggleHelp,
        KeyCode::Char(c) => match keymap.action_for_key(&c.to_string()) {
            Some(action) => action_to_input_action(action),
            None => InputAction::None,
        },
        _ => InputAction::None,
    }
}

/// Keys shared by both forms.
fn handle_form_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Enter => InputAction::FormSubmit,
        KeyCode::Tab | KeyCode::Down => InputAction::FormNextField,
        KeyCode::BackTab | KeyCode::Up => InputAction::FormPrevField,
        KeyCode::Backspace => InputAction::FormBackspace,
        KeyCode::F(1) => InputAction::ToggleHelp,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::FormChar(c)
        }
        _ => InputAction::None,
    }
}

fn handle_login_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Quit,
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Navigate(Route::Signup)
        }
        _ => handle_form_key(key),
    }
}

fn handle_signup_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::Navigate(Route::Home),
        KeyCode::Right => InputAction::OptionNext,
        KeyCode::Left => InputAction::OptionPrev,
        _ => handle_form_key(key),
    }
}
