#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with `success: false`. The message is shown
    /// to the user verbatim.
    #[error("{0}")]
    Api(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl AppError {
    /// Text to surface as a notification at the call site.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
