use thiserror::Error;

use super::Namespace;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("request for {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("bundle {namespace} is not valid JSON: {source}")]
    Parse {
        namespace: Namespace,
        #[source]
        source: serde_json::Error,
    },

    #[error("bundle {namespace} must be a JSON object at the top level")]
    NotAnObject { namespace: Namespace },
}
