use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Please fill all fields!")]
    MissingFields,
    #[error("Username already exists!")]
    DuplicateUsername(String),
    #[error("User not found! Please sign up first.")]
    CredentialsNotFound,
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<serde_json::Error> for AccountError {
    fn from(e: serde_json::Error) -> Self {
        Self::Storage(StoreError::Json(e))
    }
}
