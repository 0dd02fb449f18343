// src/load.rs

use std::fs;
use std::path::PathBuf;

use log::info;
use url::Url;

use crate::core::net;
use crate::error::Error;

/// Where the markup comes from. Everything that parses as an http(s) URL
/// is remote; the rest is treated as a filesystem path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Remote(Url),
    Local(PathBuf),
}

impl Source {
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => Source::Remote(u),
            _ => Source::Local(PathBuf::from(raw)),
        }
    }
}

/// Yield the raw markup text, or a load failure. Blocking I/O lives here,
/// strictly before the extraction core runs.
pub fn load_markup(source: &Source) -> Result<String, Error> {
    match source {
        Source::Remote(url) => {
            info!("fetching URL: {url}");
            net::http_get(url.as_str())
        }
        Source::Local(path) => {
            if !path.exists() {
                return Err(Error::MissingFile(path.clone()));
            }
            info!("reading local file: {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
    }
}
