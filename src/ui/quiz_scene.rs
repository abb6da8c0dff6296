//! Quiz scene: prompt, option list, feedback, finished overlay.

use crate::core::{Outcome, Phase, Session};
use crate::input::QuizInput;
use crate::ui::game_common::{centered_rect, quiz_layout};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// What the screen loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Continue,
    /// Drop the session and return to the menu.
    Leave,
}

pub struct QuizScene {
    pub cursor: usize,
}

impl QuizScene {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Process one input against the active session.
    pub fn handle(&mut self, input: QuizInput, session: &mut Session) -> QuizAction {
        if session.phase() == Phase::Finished {
            return match input {
                QuizInput::Submit | QuizInput::Leave => QuizAction::Leave,
                _ => QuizAction::Continue,
            };
        }

        let option_count = session.round().map_or(0, |r| r.options.len());
        match input {
            QuizInput::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            QuizInput::Down => {
                if self.cursor + 1 < option_count {
                    self.cursor += 1;
                }
            }
            QuizInput::Choose(index) => {
                if index < option_count {
                    self.cursor = index;
                    session.submit(index);
                }
            }
            QuizInput::Submit => {
                session.submit(self.cursor);
            }
            QuizInput::Leave => return QuizAction::Leave,
            QuizInput::Other => {}
        }

        // A resolved round resets the cursor for the next one.
        if session.phase() == Phase::Evaluating {
            self.cursor = 0;
        }
        QuizAction::Continue
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, session: &Session, best: Option<u32>) {
        let title = format!(" {} ", session.kind().title());
        let layout = quiz_layout(frame, area, &title, Color::Cyan, 24);

        self.render_content(frame, layout.content, session);
        render_status_bar(frame, layout.status_bar, session);
        render_info_panel(frame, layout.info_panel, session, best);

        if session.phase() == Phase::Finished {
            render_finished_overlay(frame, area, session);
        }
    }

    fn render_content(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let Some(round) = session.round() else {
            return;
        };

        let mut lines: Vec<Line> = Vec::new();

        if round.variant.shows_flag() {
            lines.push(Line::from(Span::styled(
                format!("  {}", crate::catalog::flag_emoji(round.target.code)),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            round.prompt.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        let evaluating = session.phase() == Phase::Evaluating;
        for (i, option) in round.options.iter().enumerate() {
            let is_cursor = i == self.cursor && !evaluating;
            let prefix = if is_cursor { "> " } else { "  " };

            let style = if evaluating {
                if round.is_correct(i) {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if session.last_choice() == Some(i) {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            } else if is_cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            lines.push(Line::from(Span::styled(
                format!("{}{}. {}", prefix, i + 1, option),
                style,
            )));
        }

        if evaluating {
            lines.push(Line::from(""));
            let feedback = match session.last_outcome() {
                Some(Outcome::Correct) => {
                    Span::styled("Correct!", Style::default().fg(Color::Green))
                }
                Some(Outcome::Incorrect) => Span::styled(
                    format!("Wrong - it was {}", round.correct),
                    Style::default().fg(Color::Red),
                ),
                None => Span::raw(""),
            };
            lines.push(Line::from(feedback));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, session: &Session) {
    let keys = match session.phase() {
        Phase::Finished => "Enter/Esc: back to menu".to_string(),
        _ => {
            let digits = format!("1-{}", session.round().map_or(0, |r| r.options.len()));
            format!("Up/Down: move | Enter: answer | {}: quick pick | Esc: quit", digits)
        }
    };
    let bar = Paragraph::new(keys).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session, best: Option<u32>) {
    let block = Block::default()
        .title(" Score ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(format!("Score   {}", session.score())),
        Line::from(format!("Streak  {}", session.streak())),
        Line::from(format!("Time    {}s", session.remaining_secs())),
    ];
    if let Some(rounds) = session.rounds_left() {
        lines.push(Line::from(format!("Rounds  {}", rounds)));
    }
    if let Some(secs) = session.question_secs_left() {
        let style = if secs <= 2 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Yellow)
        };
        lines.push(Line::from(Span::styled(format!("Clock   {}s", secs), style)));
    }
    if let Some(best) = best {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Best    {}", best)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_finished_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let overlay = centered_rect(area, 36, 9);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Time! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Final score: {}", session.score()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "{} right, {} wrong",
            session.correct_count(),
            session.incorrect_count()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::GameKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn active_session() -> Session {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut session = Session::new(GameKind::Capitals);
        session.start(&mut rng);
        session
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut scene = QuizScene::new();
        let mut session = active_session();
        let max = session.round().unwrap().options.len() - 1;

        for _ in 0..10 {
            scene.handle(QuizInput::Down, &mut session);
        }
        assert_eq!(scene.cursor, max);
        for _ in 0..10 {
            scene.handle(QuizInput::Up, &mut session);
        }
        assert_eq!(scene.cursor, 0);
    }

    #[test]
    fn test_submit_resolves_round_and_resets_cursor() {
        let mut scene = QuizScene::new();
        let mut session = active_session();
        scene.handle(QuizInput::Down, &mut session);
        scene.handle(QuizInput::Submit, &mut session);
        assert_eq!(session.phase(), Phase::Evaluating);
        assert_eq!(scene.cursor, 0);
    }

    #[test]
    fn test_out_of_range_quick_pick_is_ignored() {
        let mut scene = QuizScene::new();
        let mut session = active_session();
        scene.handle(QuizInput::Choose(8), &mut session);
        assert_eq!(session.phase(), Phase::Active);
    }

    #[test]
    fn test_leave_action() {
        let mut scene = QuizScene::new();
        let mut session = active_session();
        assert_eq!(
            scene.handle(QuizInput::Leave, &mut session),
            QuizAction::Leave
        );
    }
}
