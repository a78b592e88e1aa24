use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use scanlist_core::InputState;

/// What a key press means for the item input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Submit,
    Leave,
}

pub fn handle_input_key(input: &mut InputState, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc | KeyCode::Tab => InputAction::Leave,
        KeyCode::Enter => InputAction::Submit,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(c);
            InputAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            InputAction::None
        }
        KeyCode::Delete => {
            input.delete();
            InputAction::None
        }
        KeyCode::Left => {
            input.move_left();
            InputAction::None
        }
        KeyCode::Right => {
            input.move_right();
            InputAction::None
        }
        KeyCode::Home => {
            input.move_home();
            InputAction::None
        }
        KeyCode::End => {
            input.move_end();
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Answer to a yes/no popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    None,
    Confirm,
    Cancel,
}

pub fn handle_confirm_key(key: KeyEvent) -> ConfirmAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => ConfirmAction::Confirm,
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => ConfirmAction::Cancel,
        _ => ConfirmAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_submit() {
        let mut input = InputState::new();
        for c in "hi".chars() {
            assert_eq!(handle_input_key(&mut input, key(KeyCode::Char(c))), InputAction::None);
        }
        assert_eq!(input.as_str(), "hi");
        assert_eq!(handle_input_key(&mut input, key(KeyCode::Enter)), InputAction::Submit);
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut input = InputState::new();
        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        handle_input_key(&mut input, ctrl_e);
        assert!(input.is_empty());
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(handle_confirm_key(key(KeyCode::Char('y'))), ConfirmAction::Confirm);
        assert_eq!(handle_confirm_key(key(KeyCode::Esc)), ConfirmAction::Cancel);
        assert_eq!(handle_confirm_key(key(KeyCode::Char('x'))), ConfirmAction::None);
    }
}
