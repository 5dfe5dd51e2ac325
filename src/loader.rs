//! Loading JSON documents from strings, files and URLs.
use crate::resolver::{DefaultResolver, SchemaResolver};
use serde_json::Value;
use std::{error, fmt, fs::File, io, io::BufReader, path::Path, sync::Arc};
use url::Url;

/// A document could not be loaded.
#[derive(Debug)]
pub enum LoaderError {
    /// The file could not be read.
    Io(io::Error),
    /// The input is not valid JSON.
    Json(serde_json::Error),
    /// The remote document could not be downloaded.
    Http(anyhow::Error),
    /// The location is not a valid URL.
    Url(url::ParseError),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Io(error) => write!(f, "cannot read document: {}", error),
            LoaderError::Json(error) => write!(f, "document is not valid JSON: {}", error),
            LoaderError::Http(error) => write!(f, "cannot download document: {}", error),
            LoaderError::Url(error) => write!(f, "invalid document URL: {}", error),
        }
    }
}

impl error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoaderError::Io(error) => Some(error),
            LoaderError::Json(error) => Some(error),
            LoaderError::Http(error) => Some(&**error),
            LoaderError::Url(error) => Some(error),
        }
    }
}

impl From<io::Error> for LoaderError {
    fn from(error: io::Error) -> Self {
        LoaderError::Io(error)
    }
}
impl From<serde_json::Error> for LoaderError {
    fn from(error: serde_json::Error) -> Self {
        LoaderError::Json(error)
    }
}
impl From<url::ParseError> for LoaderError {
    fn from(error: url::ParseError) -> Self {
        LoaderError::Url(error)
    }
}

/// Parse a document from a string.
pub fn from_str(input: &str) -> Result<Value, LoaderError> {
    Ok(serde_json::from_str(input)?)
}

/// Read a document from a file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Value, LoaderError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Download a document over HTTP(S).
pub fn from_url(location: &str) -> Result<Value, LoaderError> {
    let url = Url::parse(location)?;
    let document = DefaultResolver.resolve(&url).map_err(LoaderError::Http)?;
    Ok(Arc::try_unwrap(document).unwrap_or_else(|document| (*document).clone()))
}

/// Download `location` when it is an `http`/`https` URL, read it as a file path otherwise.
pub fn from_location(location: &str) -> Result<Value, LoaderError> {
    match Url::parse(location) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => from_url(location),
        _ => from_path(location),
    }
}
