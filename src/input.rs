//! UI-agnostic input actions and their crossterm key mapping.
//!
//! Scenes and logic functions consume these enums; only the mapping
//! functions below know about `KeyCode`.

use crossterm::event::KeyCode;

/// Input actions for the home menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
    /// Open the country reference browser.
    Atlas,
    /// Toggle the premium entitlement flag on the active profile.
    TogglePremium,
    /// Back out to the profile select screen.
    Back,
    Other,
}

pub fn menu_input(key: KeyCode) -> MenuInput {
    match key {
        KeyCode::Up | KeyCode::Char('k') => MenuInput::Up,
        KeyCode::Down | KeyCode::Char('j') => MenuInput::Down,
        KeyCode::Enter => MenuInput::Select,
        KeyCode::Char('a') | KeyCode::Char('A') => MenuInput::Atlas,
        KeyCode::Char('p') | KeyCode::Char('P') => MenuInput::TogglePremium,
        KeyCode::Esc => MenuInput::Back,
        _ => MenuInput::Other,
    }
}

/// Input actions during an active quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    Up,
    Down,
    /// Jump the cursor straight to an option slot (1-based key).
    Choose(usize),
    Submit,
    /// Abandon the session and return to the menu.
    Leave,
    Other,
}

pub fn quiz_input(key: KeyCode) -> QuizInput {
    match key {
        KeyCode::Up | KeyCode::Char('k') => QuizInput::Up,
        KeyCode::Down | KeyCode::Char('j') => QuizInput::Down,
        KeyCode::Char(c @ '1'..='9') => {
            QuizInput::Choose(c as usize - '1' as usize)
        }
        KeyCode::Enter => QuizInput::Submit,
        KeyCode::Esc => QuizInput::Leave,
        _ => QuizInput::Other,
    }
}

/// Input actions for the country reference browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtlasInput {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Back,
    Other,
}

pub fn atlas_input(key: KeyCode) -> AtlasInput {
    match key {
        KeyCode::Up | KeyCode::Char('k') => AtlasInput::Up,
        KeyCode::Down | KeyCode::Char('j') => AtlasInput::Down,
        KeyCode::PageUp => AtlasInput::PageUp,
        KeyCode::PageDown => AtlasInput::PageDown,
        KeyCode::Home => AtlasInput::Top,
        KeyCode::End => AtlasInput::Bottom,
        KeyCode::Esc | KeyCode::Char('a') => AtlasInput::Back,
        _ => AtlasInput::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_mapping() {
        assert_eq!(menu_input(KeyCode::Up), MenuInput::Up);
        assert_eq!(menu_input(KeyCode::Enter), MenuInput::Select);
        assert_eq!(menu_input(KeyCode::Char('a')), MenuInput::Atlas);
        assert_eq!(menu_input(KeyCode::Char('x')), MenuInput::Other);
    }

    #[test]
    fn test_quiz_digit_mapping_is_zero_based() {
        assert_eq!(quiz_input(KeyCode::Char('1')), QuizInput::Choose(0));
        assert_eq!(quiz_input(KeyCode::Char('4')), QuizInput::Choose(3));
    }
}
