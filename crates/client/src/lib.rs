pub mod course;

use log::debug;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const EDRES_BASE: &str = "https://edres.com/";

/// A client for the edres public course catalog API
pub struct Client {
    http: reqwest::blocking::Client,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("http error: {}", .0)]
    HTTPError(#[from] reqwest::Error),

    #[error("serde error: {}", .0)]
    SerdeError(#[from] serde_json::Error),
}

impl Client {
    pub fn new() -> Self {
        Client {
            http: reqwest::blocking::Client::new(),
        }
    }

    /// GET the given path and parse the body as JSON.
    ///
    /// The body is parsed whatever the response status is: some endpoints
    /// serve error statuses with a well-formed JSON body.
    pub(crate) fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let resp = self.http.get(format!("{}{}", EDRES_BASE, url)).send()?;
        if log::log_enabled!(log::Level::Debug) {
            let s = resp.text()?;
            debug!("response: {}", s);
            Ok(serde_json::from_str(&s)?)
        } else {
            Ok(resp.json()?)
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
