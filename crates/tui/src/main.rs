use anyhow::Result;
use app::App;
use event::{Event, EventBus};
use ratatui::prelude::*;
use simplelog::{LevelFilter, WriteLogger};
use std::{fs::File, io};
use xdg::BaseDirectories;

mod app;
mod event;
mod screens;
mod store;
mod styles;
#[cfg(test)]
mod testutil;
mod tui;
mod widgets;

fn main() -> Result<()> {
    let log_path = BaseDirectories::with_prefix("edres-tui")?.place_state_file("edres-tui.log")?;
    WriteLogger::init(
        LevelFilter::Debug,
        simplelog::Config::default(),
        File::create(log_path)?,
    )?;

    let backend = CrosstermBackend::new(io::stderr());
    let mut terminal = Terminal::new(backend)?;

    let events = EventBus::new();
    events.spawn_terminal_listener();

    let mut app = App::new(&events);

    tui::init(&mut terminal)?;

    let res = run(&mut terminal, &mut app, &events);

    tui::exit(&mut terminal)?;

    res
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, events: &EventBus) -> Result<()> {
    while app.running {
        tui::draw(terminal, app)?;
        match events.next()? {
            Event::Key(key_event) => app.handle_key(key_event)?,
            Event::Resize(_, _) => {}
            Event::Store(e) => app.store.event(e),
        }
    }

    Ok(())
}
