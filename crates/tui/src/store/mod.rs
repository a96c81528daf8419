use std::sync::mpsc::Sender;

use edres_client::course::Course;

mod worker;
pub use worker::Worker;

/// The catalog page we fetch. The UI never pages past it.
pub const CATALOG_PAGE: u32 = 1;
/// Language filter sent with the catalog request.
pub const CATALOG_LANGUAGE: &str = "en";

/// Requests sent to the worker thread
#[derive(Debug)]
pub enum LoadRequest {
    Catalog { page: u32, language: String },
}

/// Messages received by the app from the worker thread
#[derive(Debug)]
pub enum Event {
    Error(edres_client::Error),
    Catalog(Vec<Course>),
}

/// Global data store
pub struct Store {
    catalog: Option<Vec<Course>>,
    error: Option<String>,
    requested: bool,

    worker_channel: Sender<LoadRequest>,
}

impl Store {
    pub fn new(worker_channel: Sender<LoadRequest>) -> Self {
        Self {
            worker_channel,
            catalog: None,
            error: None,
            requested: false,
        }
    }

    /// True until the fetch has either delivered courses or failed.
    pub fn is_loading(&self) -> bool {
        self.catalog.is_none() && self.error.is_none()
    }

    /// The courses from the last successful load, in server order.
    pub fn catalog(&self) -> Option<&[Course]> {
        self.catalog.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Queue the catalog fetch. Only the first call sends anything: we
    /// load once per run and never re-fetch.
    pub fn request_catalog(&mut self) {
        if self.requested {
            return;
        }
        self.requested = true;

        self.worker_channel
            .send(LoadRequest::Catalog {
                page: CATALOG_PAGE,
                language: CATALOG_LANGUAGE.to_string(),
            })
            .unwrap()
    }

    pub fn event(&mut self, e: Event) {
        match e {
            Event::Catalog(courses) => self.catalog = Some(courses),
            Event::Error(e) => self.error = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::channel;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::testutil;

    #[test]
    fn catalog_is_requested_at_most_once() {
        let (send, recv) = channel();
        let mut store = Store::new(send);

        store.request_catalog();
        store.request_catalog();
        store.request_catalog();

        let LoadRequest::Catalog { page, language } = recv.try_recv().unwrap();
        assert_eq!(page, 1);
        assert_eq!(language, "en");
        assert!(recv.try_recv().is_err());
    }

    #[test]
    fn loading_until_catalog_arrives() {
        let (send, _recv) = channel();
        let mut store = Store::new(send);

        assert!(store.is_loading());
        assert!(store.catalog().is_none());
        assert_eq!(store.error(), None);

        store.event(Event::Catalog(vec![testutil::course(1, "Pottery")]));

        assert!(!store.is_loading());
        assert_eq!(store.catalog().unwrap().len(), 1);
        assert_eq!(store.error(), None);
    }

    #[test]
    fn error_finishes_the_load_with_an_empty_catalog() {
        let (send, _recv) = channel();
        let mut store = Store::new(send);

        store.event(Event::Error(testutil::parse_error()));

        assert!(!store.is_loading());
        assert!(store.catalog().is_none());
        assert!(store.error().unwrap().contains("serde error"));
    }
}
