//! The TLS client socket and its supporting machinery.
//!
//! - [`strand`]: per-socket FIFO serialization of queued operations
//! - [`tls`]: BoringSSL client configuration (TLS 1.2 floor)
//! - [`client`]: the socket itself — connect, send, close

pub mod client;
pub mod strand;
pub mod tls;

pub use client::TlsSocket;
pub use strand::Strand;
pub use tls::TlsConfig;
