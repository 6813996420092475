use thiserror::Error;

/// Errors produced by tag registry operations.
///
/// Both variants are expected, user-triggerable outcomes: the HTTP boundary
/// translates them to 400/404 responses with the display message as the error
/// string. The core never logs, retries, or panics on them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tag name was missing or normalized to an empty string
    #[error("Tag name is required")]
    NameRequired,

    /// Delete targeted a tag absent from the registry
    #[error("Tag not found: {0}")]
    NotFound(String),
}
