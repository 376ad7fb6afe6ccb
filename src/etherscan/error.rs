use thiserror::Error;

/// Errors returned by [`EtherscanClient`](super::client::EtherscanClient).
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// No API key was supplied when building the client
    #[error("Missing Etherscan API key. Set it in the config file, ETHERSCAN_API_KEY or pass it explicitly.")]
    MissingApiKey,

    /// The envelope came back with a status other than "1"
    #[error("Etherscan API error: {message}{}", fmt_detail(.detail))]
    Api {
        message: String,
        /// Free-form text Etherscan sometimes puts in `result` on failure
        detail: Option<String>,
    },

    /// Network failure or a non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not an envelope, or `result` did not match the record type
    #[error("Failed to decode '{action}' response: {source}")]
    Decode {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Pagination asked for more pages than the configured bound
    #[error("Pagination stopped after {max_pages} pages without reaching the last page")]
    PageLimitExceeded { max_pages: u32 },
}

fn fmt_detail(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({})", detail),
        None => String::new(),
    }
}

impl ExplorerError {
    /// Returns true for failures reported by the remote envelope.
    pub fn is_api_error(&self) -> bool {
        matches!(self, ExplorerError::Api { .. })
    }
}
