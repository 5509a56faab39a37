use thiserror::Error;

pub const DEFAULT_INIT_FAILURE: &str = "Failed to initialize. Please check your credentials.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("Could not reach the stats server: {0}")]
    Request(String),
    /// `detail` is the server's own message, shown verbatim.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatFetchError {
    #[error("request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },
    #[error("{endpoint} returned http {status}")]
    Status { endpoint: String, status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_shows_detail_verbatim() {
        let err = InitError::Rejected {
            status: 400,
            detail: "User's team not found in this league.".to_string(),
        };
        assert_eq!(err.to_string(), "User's team not found in this league.");
    }
}
