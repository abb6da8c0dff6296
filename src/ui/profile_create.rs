//! Profile creation screen.

use crate::profile::manager::validate_name;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ProfileCreateScreen {
    pub name_input: String,
    pub validation_error: Option<String>,
}

impl ProfileCreateScreen {
    pub fn new() -> Self {
        Self {
            name_input: String::new(),
            validation_error: None,
        }
    }

    pub fn handle_char_input(&mut self, c: char) {
        if self.name_input.len() < 16 {
            self.name_input.push(c);
            self.validation_error = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        self.name_input.pop();
        self.validation_error = None;
    }

    pub fn is_valid(&mut self) -> bool {
        match validate_name(&self.name_input) {
            Ok(()) => true,
            Err(message) => {
                self.validation_error = Some(message);
                false
            }
        }
    }

    pub fn get_name(&self) -> String {
        self.name_input.trim().to_string()
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new("New profile")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(format!("{}_", self.name_input)).block(
            Block::default()
                .title(" Name ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(input, chunks[1]);

        let hint = match &self.validation_error {
            Some(error) => Paragraph::new(error.clone()).style(Style::default().fg(Color::Red)),
            None => Paragraph::new("Enter: create | Esc: cancel")
                .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(hint, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_and_validation() {
        let mut screen = ProfileCreateScreen::new();
        for c in "Marco".chars() {
            screen.handle_char_input(c);
        }
        assert!(screen.is_valid());
        assert_eq!(screen.get_name(), "Marco");

        screen.handle_backspace();
        assert_eq!(screen.name_input, "Marc");

        let mut empty = ProfileCreateScreen::new();
        assert!(!empty.is_valid());
        assert!(empty.validation_error.is_some());
    }

    #[test]
    fn test_input_length_is_capped() {
        let mut screen = ProfileCreateScreen::new();
        for _ in 0..30 {
            screen.handle_char_input('a');
        }
        assert_eq!(screen.name_input.len(), 16);
    }
}
