use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Network errors raised by socket operations.
///
/// The `Display` rendering of a variant is the exact message delivered to an
/// operation's error callback; callers never observe the variants themselves.
#[derive(Debug, Error, Clone)]
pub enum NetError {
    #[error("Name not resolved: {host}: {source}")]
    NameNotResolved {
        host: String,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("Name resolved to no addresses: {host}")]
    NoAddresses { host: String },
    #[error("Connection failed: {host}: {source}")]
    ConnectionFailed {
        host: String,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("TLS handshake failed: {0}")]
    HandshakeFailed(String),
    #[error("Write failed: {source}")]
    WriteFailed {
        #[source]
        source: Arc<io::Error>,
    },
    #[error("Socket not connected")]
    SocketNotConnected,
    #[error("SSL protocol error")]
    SslProtocolError,
}

impl NetError {
    pub(crate) fn name_not_resolved(host: impl Into<String>, source: io::Error) -> Self {
        NetError::NameNotResolved {
            host: host.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn connection_failed(host: impl Into<String>, source: io::Error) -> Self {
        NetError::ConnectionFailed {
            host: host.into(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn write_failed(source: io::Error) -> Self {
        NetError::WriteFailed {
            source: Arc::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_non_empty() {
        let errors = [
            NetError::name_not_resolved(
                "example.invalid",
                io::Error::new(io::ErrorKind::NotFound, "no such host"),
            ),
            NetError::NoAddresses {
                host: "example.invalid".into(),
            },
            NetError::connection_failed(
                "example.com",
                io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
            ),
            NetError::HandshakeFailed("alert received".into()),
            NetError::write_failed(io::Error::new(io::ErrorKind::BrokenPipe, "pipe")),
            NetError::SocketNotConnected,
            NetError::SslProtocolError,
        ];

        for e in errors {
            assert!(!e.to_string().is_empty());
        }
    }

    #[test]
    fn test_resolution_message_names_host() {
        let e = NetError::name_not_resolved(
            "api.example.com",
            io::Error::new(io::ErrorKind::NotFound, "no such host"),
        );
        assert!(e.to_string().contains("api.example.com"));
    }
}
