//! Host Boundary Error Types

/// Errors surfaced by host registration calls
///
/// Both variants are non-fatal for the bootstrap: the registration sequencer
/// records them and continues with the remaining steps.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The host (or the relevant UI subsystem) is not reachable
    #[error("Host unavailable: {message}")]
    Unavailable { message: String },

    /// The host actively rejected a registration call
    #[error("Host rejected '{operation}': {message}")]
    Rejected { operation: String, message: String },
}

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;
