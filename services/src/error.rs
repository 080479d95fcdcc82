use thiserror::Error;

/// The only failure a mock request can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MockError {
    #[error("Simulated API Error: Something went wrong.")]
    Simulated,
}

/// Errors surfaced by the open-ticket form.
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more required fields are missing. Holds the joined field messages.
    #[error("{0}")]
    Invalid(String),

    #[error("Failed to create ticket. Please try again.")]
    Submit(#[source] MockError),
}

/// Errors surfaced while replying inside a ticket conversation.
#[derive(Debug, Error)]
pub enum ThreadError {
    #[error("Please enter a message to reply.")]
    EmptyReply,

    #[error("Failed to send reply. Please try again.")]
    Send(#[source] MockError),
}
