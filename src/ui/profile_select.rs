//! Profile select screen.

use crate::profile::ProfileInfo;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub struct ProfileSelectScreen {
    pub selected_index: usize,
    /// Filename awaiting a second D press (delete confirmation).
    pub pending_delete: Option<String>,
}

impl ProfileSelectScreen {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            pending_delete: None,
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, profiles: &[ProfileInfo]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);

        let title = Paragraph::new("Who's playing?")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = profiles
            .iter()
            .enumerate()
            .map(|(i, info)| {
                let prefix = if i == self.selected_index { "> " } else { "  " };
                if info.is_corrupted {
                    return ListItem::new(format!("{}{} (corrupted)", prefix, info.name))
                        .style(Style::default().fg(Color::Red));
                }
                let tier = if info.premium { " *" } else { "" };
                let style = if i == self.selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}{}{}", prefix, info.name, tier), style),
                    Span::styled(
                        format!("  {} games", info.games_played),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Profiles ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(list, chunks[1]);

        let controls = if self.pending_delete.is_some() {
            Paragraph::new("Press D again to delete, any other key to cancel")
                .style(Style::default().fg(Color::Red))
        } else {
            Paragraph::new("Up/Down: select | Enter: play | N: new | D: delete | Q: quit")
                .style(Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(controls, chunks[2]);
    }
}
