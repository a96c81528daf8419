use edres_client::Client;
use log::{debug, error};
use std::sync::mpsc::{channel, Receiver, Sender};

use super::{Event, LoadRequest};
use crate::event::{Event as CrateEvent, EventBus};

/// Performs requests it receives from the main thread, and sends the results back.
pub struct Worker {
    client: Client,
    msg_recv: Receiver<LoadRequest>,
    event_send: Sender<CrateEvent>,
}

impl Worker {
    /// Spawn the store worker on the given event bus, returning a channel to send requests down.
    pub(crate) fn spawn_on(bus: &EventBus) -> Sender<LoadRequest> {
        let (cmd_send, cmd_recv) = channel();

        bus.spawn("store_worker", move |_, event_send| {
            // we don't need running because the receiver will raise an error and we'll exit
            Worker {
                client: Client::new(),
                msg_recv: cmd_recv,
                event_send,
            }
            .main()
        });

        cmd_send
    }

    fn main(self) {
        while let Ok(msg) = self.msg_recv.recv() {
            debug!("received message: {:?}", msg);
            let event = match self.process_msg(msg) {
                Ok(e) => e,
                Err(e) => {
                    error!("load failed: {}", e);
                    Event::Error(e)
                }
            };
            if let Err(e) = self.event_send.send(CrateEvent::Store(event)) {
                debug!("error sending event: {:?}", e);
                break;
            }
        }

        debug!("shutting down");
    }

    fn process_msg(&self, msg: LoadRequest) -> Result<Event, edres_client::Error> {
        match msg {
            LoadRequest::Catalog { page, language } => {
                Ok(Event::Catalog(self.client.courses(page, &language)?))
            }
        }
    }
}
