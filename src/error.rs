/// Error types for configuration and the HTTP server
use thiserror::Error;

/// Errors raised while configuring or running the server.
///
/// The query-string helpers themselves never fail; malformed input is
/// decoded as far as possible instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Host and port do not form a socket address
    #[error("Invalid host/port format: {0}")]
    InvalidAddress(String),

    /// Port value is not a number between 0 and 65535
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    /// Listener could not be bound
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}
