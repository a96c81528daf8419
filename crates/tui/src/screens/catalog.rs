use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::Paragraph};

use super::Action;
use crate::{store::Store, styles, widgets::CardGrid};

/// The course catalog, shown as a wrapped grid of cards.
#[derive(Default)]
pub struct State {
    grid: CardGrid,
}

impl State {
    pub fn draw(&mut self, store: &Store, frame: &mut Frame, area: Rect) {
        if store.is_loading() {
            frame.render_widget(Paragraph::new("Loading..."), area);
            return;
        }

        let mut grid_area = area;
        if let Some(err) = store.error() {
            let layout = Layout::new(
                Direction::Vertical,
                [Constraint::Length(1), Constraint::Min(0)],
            )
            .split(area);
            frame.render_widget(
                Paragraph::new(styles::error_text(err.to_string())),
                layout[0],
            );
            grid_area = layout[1];
        }

        // The grid always draws, even when the load failed and it's empty.
        self.grid
            .render_to(frame, grid_area, store.catalog().unwrap_or(&[]));
    }

    pub fn handle_key(&mut self, _store: &Store, key: KeyEvent) -> Result<Action> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(Action::Exit),
            KeyCode::Down | KeyCode::Char('j') => self.grid.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.grid.scroll_up(),
            _ => (),
        };

        Ok(Action::None)
    }
}
