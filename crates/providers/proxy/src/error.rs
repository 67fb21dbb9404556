use thiserror::Error;

/// Errors returned by a [`Proxy`](crate::Proxy).
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-success status code.
    #[error("gateway answered {status} for {route}")]
    Status {
        /// The requested route.
        route: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The gateway reported a failure in its response envelope.
    #[error("gateway error ({code}): {message}")]
    Gateway {
        /// The response code reported by the gateway.
        code: String,
        /// The error message reported by the gateway.
        message: String,
    },

    /// The response body was not the expected JSON envelope.
    #[error("malformed gateway response: {0}")]
    Response(#[from] serde_json::Error),

    /// An expected field was missing from the response.
    #[error("missing field `{0}` in gateway response")]
    MissingField(&'static str),

    /// A raw payload was not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The gateway endpoint could not be turned into a request URL.
    #[error("invalid gateway url: {0}")]
    Url(#[from] url::ParseError),

    /// The requested data does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The data source could not serve the request.
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}
