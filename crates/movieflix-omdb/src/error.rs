use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmdbError {
    /// Bad local input, caught before any network call.
    #[error("{0}")]
    Validation(String),

    /// The remote answered with `Response: "False"`.
    #[error("{0}")]
    NotFound(String),

    #[error("failed to reach OMDb: {0}")]
    Network(#[from] reqwest::Error),
}

impl OmdbError {
    /// Displayable message for UI boundaries.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
