use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::app::App;

pub mod catalog;

/// What a screen asks the app to do after handling a key
pub enum Action {
    Exit,
    None,
}

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        self.catalog.draw(&self.store, frame, frame.size());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Exit application on `Ctrl-C`
            KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers == KeyModifiers::CONTROL => {
                self.quit();
                Ok(())
            }
            _ => {
                match self.catalog.handle_key(&self.store, key)? {
                    Action::None => (),
                    Action::Exit => self.quit(),
                };

                Ok(())
            }
        }
    }
}
