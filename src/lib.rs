//! # tlsock
//!
//! An asynchronous TLS client socket for Rust.
//!
//! `tlsock` couples name resolution, endpoint fallback, TLS negotiation, and a
//! per-socket serialization domain into a single callback-driven socket type.
//!
//! ## Features
//!
//! - **Strand serialization**: operations on one socket run one at a time,
//!   in submission order, with no explicit locking required by callers
//! - **Endpoint shuffling**: resolved endpoints are uniformly permuted before
//!   connecting, spreading clients across otherwise-equivalent addresses
//! - **TLS 1.2+**: BoringSSL client context with a fixed protocol-version floor
//! - **Callback contract**: every accepted operation fires exactly one of its
//!   success/error continuations, never both
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tlsock::socket::TlsSocket;
//!
//! #[tokio::main]
//! async fn main() {
//!     let socket = TlsSocket::new(&tokio::runtime::Handle::current()).unwrap();
//!     socket.connect_async(
//!         "example.com",
//!         443,
//!         || println!("connected"),
//!         |msg| eprintln!("connect failed: {msg}"),
//!     );
//! }
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core error definitions
//! - [`dns`] - Pluggable name resolution and endpoint shuffling
//! - [`socket`] - The TLS client socket and its serialization strand

pub mod base;
pub mod dns;
pub mod socket;
