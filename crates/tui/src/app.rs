use crate::{
    event::EventBus,
    screens::catalog,
    store::{Store, Worker},
};

/// Holds all application state
pub struct App {
    pub running: bool,
    pub store: Store,
    pub catalog: catalog::State,
}

impl App {
    pub fn new(events: &EventBus) -> Self {
        let worker_channel = Worker::spawn_on(events);
        let mut store = Store::new(worker_channel);

        // The one catalog fetch this app ever performs.
        store.request_catalog();

        Self {
            running: true,
            store,
            catalog: catalog::State::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
