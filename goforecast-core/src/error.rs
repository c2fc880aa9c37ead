use std::{io, path::PathBuf};
use thiserror::Error;

/// Every way a single lookup can fail.
///
/// None of these are retried. The CLI prints the message behind an `Error: `
/// marker and exits with status 1.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The geocoding URL could not be assembled.
    #[error("malformed URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    /// Connection, DNS or body-read failure talking to the geocoding service.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Anything other than 200 or 201 from the geocoding service.
    #[error("on request: got code {code}")]
    UnexpectedStatus { code: u16 },

    /// The geocoding body was not the JSON shape we expect.
    #[error("failed to decode geocoding response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The geocoding request succeeded but matched nothing.
    #[error("no geocoding results returned{}", describe_status(.status, .message))]
    NoResults {
        status: Option<String>,
        message: Option<String>,
    },

    /// The top geocoding result has no geometry or location.
    #[error("first geocoding result has no location")]
    MissingLocation,

    #[error("failed to read state file {}: {source}", .path.display())]
    StateRead {
        path: PathBuf,
        #[source]
        source: StateFileError,
    },

    #[error("failed to write state file {}: {source}", .path.display())]
    StateWrite {
        path: PathBuf,
        #[source]
        source: StateFileError,
    },

    #[error("could not find Forecast IO API key. Please set with \"export {env_var}=<key>\"")]
    MissingApiKey { env_var: String },

    /// Raised by the forecast provider, passed through untouched. The whole
    /// cause chain is part of the message.
    #[error("forecast request failed: {0:#}")]
    ForecastFetch(#[source] anyhow::Error),

    #[error("missing {0}")]
    MissingArgument(&'static str),
}

/// Cause of a state file failure.
#[derive(Error, Debug)]
pub enum StateFileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn describe_status(status: &Option<String>, message: &Option<String>) -> String {
    match (status, message) {
        (Some(status), Some(message)) => format!(" (status {status}: {message})"),
        (Some(status), None) => format!(" (status {status})"),
        (None, Some(message)) => format!(" ({message})"),
        (None, None) => String::new(),
    }
}
