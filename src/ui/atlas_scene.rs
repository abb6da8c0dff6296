//! Country reference browser.
//!
//! The table is windowed by scroll offset: only the rows inside the
//! viewport are materialized, however long the catalog grows.

use crate::catalog::{flag_emoji, COUNTRIES};
use crate::input::AtlasInput;
use crate::ui::format_count;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct AtlasScene {
    pub selected: usize,
    pub offset: usize,
}

impl AtlasScene {
    pub fn new() -> Self {
        Self {
            selected: 0,
            offset: 0,
        }
    }

    /// Process one input. Returns false when the browser should close.
    pub fn handle(&mut self, input: AtlasInput, viewport_rows: usize) -> bool {
        let last = COUNTRIES.len().saturating_sub(1);
        let page = viewport_rows.max(1);
        match input {
            AtlasInput::Up => self.selected = self.selected.saturating_sub(1),
            AtlasInput::Down => self.selected = (self.selected + 1).min(last),
            AtlasInput::PageUp => self.selected = self.selected.saturating_sub(page),
            AtlasInput::PageDown => self.selected = (self.selected + page).min(last),
            AtlasInput::Top => self.selected = 0,
            AtlasInput::Bottom => self.selected = last,
            AtlasInput::Back => return false,
            AtlasInput::Other => {}
        }
        self.scroll_into_view(page);
        true
    }

    /// Keep the selection inside the visible window.
    fn scroll_into_view(&mut self, viewport_rows: usize) {
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + viewport_rows {
            self.offset = self.selected + 1 - viewport_rows;
        }
    }

    /// Rows of country data visible for a viewport of the given height.
    pub fn visible_rows(&self, viewport_rows: usize) -> &'static [crate::catalog::Place] {
        let end = (self.offset + viewport_rows).min(COUNTRIES.len());
        &COUNTRIES[self.offset.min(end)..end]
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" Atlas - {} countries ", COUNTRIES.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 3 {
            return;
        }

        let header = Paragraph::new(Line::from(Span::styled(
            format!(
                "    {:<22} {:<26} {:<14} {:>14} {:>12}  {}",
                "Country", "Capital", "Region", "Population", "Area km2", "Drives"
            ),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(header, Rect::new(inner.x, inner.y, inner.width, 1));

        let viewport_rows = (inner.height - 2) as usize;
        let mut y = inner.y + 1;
        for (row, place) in self.visible_rows(viewport_rows).iter().enumerate() {
            let index = self.offset + row;
            let style = if index == self.selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let line = Paragraph::new(Line::from(Span::styled(
                format!(
                    "{} {:<22} {:<26} {:<14} {:>14} {:>12}  {}",
                    flag_emoji(place.code),
                    place.name,
                    place.capital,
                    place.region.name(),
                    format_count(place.population),
                    format_count(u64::from(place.area_km2)),
                    place.drives_on.name()
                ),
                style,
            )));
            frame.render_widget(line, Rect::new(inner.x, y, inner.width, 1));
            y += 1;
        }

        let footer = Paragraph::new("Up/Down/PgUp/PgDn: scroll | Esc: back")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(
            footer,
            Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_follows_selection() {
        let mut scene = AtlasScene::new();
        for _ in 0..25 {
            scene.handle(AtlasInput::Down, 10);
        }
        assert_eq!(scene.selected, 25);
        // Selection sits on the last visible row.
        assert_eq!(scene.offset, 16);
        assert_eq!(scene.visible_rows(10).len(), 10);

        for _ in 0..25 {
            scene.handle(AtlasInput::Up, 10);
        }
        assert_eq!(scene.selected, 0);
        assert_eq!(scene.offset, 0);
    }

    #[test]
    fn test_paging_and_bounds() {
        let mut scene = AtlasScene::new();
        scene.handle(AtlasInput::PageDown, 20);
        assert_eq!(scene.selected, 20);

        scene.handle(AtlasInput::Bottom, 20);
        assert_eq!(scene.selected, COUNTRIES.len() - 1);
        // Window never runs past the end of the table.
        let rows = scene.visible_rows(20);
        assert!(rows.len() <= 20);
        assert_eq!(rows.last().unwrap().code, COUNTRIES.last().unwrap().code);

        scene.handle(AtlasInput::Top, 20);
        assert_eq!(scene.selected, 0);
        assert_eq!(scene.offset, 0);
    }

    #[test]
    fn test_back_closes() {
        let mut scene = AtlasScene::new();
        assert!(scene.handle(AtlasInput::Down, 10));
        assert!(!scene.handle(AtlasInput::Back, 10));
    }
}
