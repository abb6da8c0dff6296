//! Home menu: the game catalog, profile summary, and message log.

use crate::games::GameKind;
use crate::input::MenuInput;
use crate::profile::Profile;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Start(GameKind),
    OpenAtlas,
    TogglePremium,
    Back,
}

pub struct MenuScene {
    pub selected: usize,
}

impl MenuScene {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn handle(&mut self, input: MenuInput) -> Option<MenuAction> {
        match input {
            MenuInput::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            MenuInput::Down => {
                if self.selected + 1 < GameKind::ALL.len() {
                    self.selected += 1;
                }
                None
            }
            MenuInput::Select => Some(MenuAction::Start(GameKind::ALL[self.selected])),
            MenuInput::Atlas => Some(MenuAction::OpenAtlas),
            MenuInput::TogglePremium => Some(MenuAction::TogglePremium),
            MenuInput::Back => Some(MenuAction::Back),
            MenuInput::Other => None,
        }
    }

    pub fn draw(
        &self,
        frame: &mut Frame,
        area: Rect,
        profile: &Profile,
        today: &str,
        messages: &VecDeque<String>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(10),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Paragraph::new("ATLAS - geography trivia")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(28)])
            .split(chunks[1]);

        self.render_game_list(frame, main[0], profile);
        render_profile_panel(frame, main[1], profile, today);
        render_message_log(frame, chunks[2], messages);

        let controls = Paragraph::new(
            "Up/Down: select | Enter: play | A: atlas | P: premium | Esc: profiles",
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(controls, chunks[3]);
    }

    fn render_game_list(&self, frame: &mut Frame, area: Rect, profile: &Profile) {
        let block = Block::default()
            .title(" Games ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let items: Vec<ListItem> = GameKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let prefix = if i == self.selected { "> " } else { "  " };
                let best = profile
                    .stats
                    .best_for(kind.id())
                    .map(|b| format!("  best {}", b))
                    .unwrap_or_default();
                let style = if i == self.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{}{} {}", prefix, kind.icon(), kind.title()),
                        style,
                    ),
                    Span::styled(best, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

fn render_profile_panel(frame: &mut Frame, area: Rect, profile: &Profile, today: &str) {
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tier = if profile.premium {
        Span::styled("Premium", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("Free", Style::default().fg(Color::DarkGray))
    };
    let plays = match profile.gate.plays_left(profile.premium, today) {
        None => "Plays left: unlimited".to_string(),
        Some(n) => format!("Plays left today: {}", n),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(tier),
        Line::from(""),
        Line::from(plays),
        Line::from(format!("Games played: {}", profile.stats.games_played)),
    ];
    if let Some(accuracy) = profile.stats.accuracy_percent() {
        lines.push(Line::from(format!("Accuracy: {}%", accuracy)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_message_log(frame: &mut Frame, area: Rect, messages: &VecDeque<String>) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = messages
        .iter()
        .take(inner.height as usize)
        .map(|m| Line::from(Span::styled(m.clone(), Style::default().fg(Color::Gray))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_is_clamped() {
        let mut scene = MenuScene::new();
        scene.handle(MenuInput::Up);
        assert_eq!(scene.selected, 0);
        for _ in 0..20 {
            scene.handle(MenuInput::Down);
        }
        assert_eq!(scene.selected, GameKind::ALL.len() - 1);
    }

    #[test]
    fn test_select_starts_highlighted_game() {
        let mut scene = MenuScene::new();
        scene.handle(MenuInput::Down);
        assert_eq!(
            scene.handle(MenuInput::Select),
            Some(MenuAction::Start(GameKind::ALL[1]))
        );
    }
}
