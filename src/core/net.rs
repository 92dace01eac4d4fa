// src/core/net.rs
//
// Source transport. A locator is either an absolute http(s) URL or a path;
// relative locators are resolved against the configured data root, which may
// itself be a directory or a URL prefix.

use std::{fs, io, path::PathBuf};

use thiserror::Error;

use crate::config::consts::{FETCH_TIMEOUT, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Fetch one resource body as text. Implementations must be shareable
/// across the loader's worker threads.
pub trait Fetch: Send + Sync {
    fn fetch(&self, locator: &str) -> Result<String, FetchError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Location {
    Url(String),
    Path(PathBuf),
}

pub fn is_url(s: &str) -> bool {
    let lc = s.trim_start().to_ascii_lowercase();
    lc.starts_with("http://") || lc.starts_with("https://")
}

/// Resolve `locator` against `root`.
pub fn resolve(root: &str, locator: &str) -> Location {
    let locator = locator.trim();
    if is_url(locator) {
        return Location::Url(s!(locator));
    }
    let root = root.trim();
    if is_url(root) {
        let base = root.trim_end_matches('/');
        let rel = locator.trim_start_matches("./").trim_start_matches('/');
        return Location::Url(join!(base, "/", rel));
    }
    let path = PathBuf::from(locator);
    if path.is_absolute() || root.is_empty() {
        Location::Path(path)
    } else {
        Location::Path(PathBuf::from(root).join(path))
    }
}

/// Blocking HTTP GET. Single attempt; non-2xx is an error.
pub fn http_get(client: &reqwest::blocking::Client, url: &str) -> Result<String, FetchError> {
    let resp = client.get(url).send().map_err(|source| FetchError::Transport {
        url: s!(url),
        source,
    })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
    }
    resp.text().map_err(|source| FetchError::Transport { url: s!(url), source })
}

/// The production fetcher: files from disk, URLs over HTTP.
pub struct SourceFetcher {
    root: String,
    client: reqwest::blocking::Client,
}

impl SourceFetcher {
    pub fn new(root: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { root: root.into(), client })
    }

    pub fn root(&self) -> &str { &self.root }
}

impl Fetch for SourceFetcher {
    fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        match resolve(&self.root, locator) {
            Location::Url(url) => {
                logd!("Fetch: GET {}", url);
                http_get(&self.client, &url)
            }
            Location::Path(path) => {
                logd!("Fetch: read {}", path.display());
                fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source })
            }
        }
    }
}
