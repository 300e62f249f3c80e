use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("this directory does not contain a git repository")]
    NotAGitRepository,

    #[error("failed to unset git config key {key}: {cause}")]
    CleanupFailed { key: String, cause: String },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("failed to set git config key {key}: {cause}")]
    ApplyFailed { key: String, cause: String },

    #[error("failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("failed to read input: {0}")]
    PromptFailed(String),
}
