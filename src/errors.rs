use http::StatusCode;
use thiserror::Error;

/// Fallback shown when the backend fails without a usable `message`/`error` field.
pub const SERVER_ERROR_FALLBACK: &str = "Erro do servidor";

/// Shown whenever a request never receives a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Servidor não está respondendo. Verifique sua conexão.";

/// Normalized failure of any backend call.
///
/// `Display` yields the user-facing text; page controllers store exactly that
/// string as their error state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Backend answered with a non-success status.
    #[error("{message}")]
    Server { status: StatusCode, message: String },

    /// Request sent, no response received (offline, timeout, DNS failure).
    /// `detail` is kept for logs only.
    #[error("Servidor não está respondendo. Verifique sua conexão.")]
    Network { detail: String },

    /// Client-side failure building, dispatching or decoding the request.
    #[error("Erro inesperado: {0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn network<E: ToString>(err: E) -> Self {
        ApiError::Network {
            detail: err.to_string(),
        }
    }

    /// Helper for mapping any unknown error into an unexpected error
    pub fn unexpected<E: ToString>(err: E) -> Self {
        ApiError::Unexpected(err.to_string())
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Server { .. } => "server",
            ApiError::Network { .. } => "network",
            ApiError::Unexpected(_) => "unexpected",
        }
    }
}
