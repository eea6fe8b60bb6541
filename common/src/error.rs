use thiserror::Error;

/// Everything that can abort a query. None of these are retried or
/// downgraded to a partial result; the binary prints the message and exits
/// nonzero.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Network-level failure or a non-2xx HTTP status.
    #[error("GET {path} on {host} failed: {reason}")]
    Transport {
        host: String,
        path: String,
        /// HTTP status, when the manager answered at all.
        status: Option<u16>,
        reason: String,
    },

    /// Malformed XML, or a required element missing from a response.
    #[error("unexpected XML in the {context} response: {reason}")]
    Parse {
        context: &'static str,
        reason: String,
    },

    #[error("security group '{0}' was not found in the catalog")]
    GroupNotFound(String),
}

impl QueryError {
    pub fn transport(
        host: impl Into<String>,
        path: impl Into<String>,
        status: Option<u16>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Transport {
            host: host.into(),
            path: path.into(),
            status,
            reason: reason.into(),
        }
    }

    pub fn parse(context: &'static str, reason: impl Into<String>) -> Self {
        Self::Parse {
            context,
            reason: reason.into(),
        }
    }
}
