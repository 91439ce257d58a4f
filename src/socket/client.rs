//! The asynchronous TLS client socket.
//!
//! A [`TlsSocket`] owns a client-role TLS context, a name resolver, and a
//! [`Strand`] that serializes its operations. `connect_async` and `send_async`
//! enqueue their work on the strand and return immediately; completion is
//! reported through per-call success/error callbacks, of which exactly one
//! fires per accepted call.

use crate::base::neterror::NetError;
use crate::dns::{shuffle_endpoints, GaiResolver, Name, Resolve};
use crate::socket::strand::Strand;
use crate::socket::tls::TlsConfig;
use boring::ssl::{SslConnector, SslVerifyMode};
use bytes::Bytes;
use std::io;
use std::net::{Shutdown, SocketAddr};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::runtime::Handle;
use tokio_boring::SslStream;

/// An asynchronous TLS client socket.
///
/// Created with a handle to an externally owned runtime; performs no I/O
/// until `connect_async`. The socket is shared through an `Arc`, and each
/// pending operation captures a clone of that `Arc`, so the socket outlives
/// its caller's handle for as long as any operation is in flight.
pub struct TlsSocket {
    connector: SslConnector,
    config: TlsConfig,
    strand: Strand,
    resolver: Arc<dyn Resolve>,
    // Touched only from strand jobs, which run one at a time; the lock is
    // ownership plumbing, never contended.
    stream: tokio::sync::Mutex<Option<SslStream<TcpStream>>>,
    // Duplicate handle to the raw transport, retained so `close` can break
    // the connection synchronously while an operation is suspended on it.
    raw: Mutex<Option<std::net::TcpStream>>,
}

impl TlsSocket {
    /// Creates a socket with the default configuration (TLS 1.2 floor, peer
    /// verification) and the system resolver.
    pub fn new(handle: &Handle) -> Result<Arc<Self>, NetError> {
        Self::with_config(handle, TlsConfig::default())
    }

    /// Creates a socket with an explicit TLS configuration.
    pub fn with_config(handle: &Handle, config: TlsConfig) -> Result<Arc<Self>, NetError> {
        Self::with_resolver(handle, config, Arc::new(GaiResolver::new()))
    }

    /// Creates a socket with an explicit TLS configuration and resolver.
    pub fn with_resolver(
        handle: &Handle,
        config: TlsConfig,
        resolver: Arc<dyn Resolve>,
    ) -> Result<Arc<Self>, NetError> {
        Ok(Arc::new(Self {
            connector: config.client_connector()?,
            config,
            strand: Strand::new(handle),
            resolver,
            stream: tokio::sync::Mutex::new(None),
            raw: Mutex::new(None),
        }))
    }

    /// Resolves `host`, connects to one of the shuffled candidates, and
    /// performs the TLS handshake; returns immediately after enqueueing.
    ///
    /// Exactly one of `on_success` / `on_error` fires. A failed attempt
    /// leaves the socket reusable for a fresh `connect_async`.
    pub fn connect_async<S, E>(
        self: &Arc<Self>,
        host: impl Into<String>,
        port: u16,
        on_success: S,
        on_error: E,
    ) where
        S: FnOnce() + Send + 'static,
        E: FnOnce(String) + Send + 'static,
    {
        let this = Arc::clone(self);
        let host = host.into();
        self.strand.dispatch(async move {
            notifying(this.connect(&host, port).await, on_success, on_error);
        });
    }

    /// Writes the whole of `data` to the TLS stream; returns immediately
    /// after enqueueing.
    ///
    /// Exactly one of `on_success` / `on_error` fires. Issues a single write
    /// operation per call; sequencing between calls comes from the strand,
    /// not from any buffering here.
    pub fn send_async<S, E>(self: &Arc<Self>, data: Bytes, on_success: S, on_error: E)
    where
        S: FnOnce() + Send + 'static,
        E: FnOnce(String) + Send + 'static,
    {
        let this = Arc::clone(self);
        self.strand.dispatch(async move {
            notifying(this.send(data).await, on_success, on_error);
        });
    }

    /// Synchronously shuts down the raw transport.
    ///
    /// Safe to call repeatedly. Leaves the TLS layer object in place; an
    /// operation suspended on the transport observes a failure at its next
    /// I/O step and reports it through its error callback.
    pub fn close(&self) {
        let raw = self.raw.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(transport) = raw.as_ref() {
            tracing::debug!("shutting down transport");
            // Benign on an already-closed channel.
            let _ = transport.shutdown(Shutdown::Both);
        }
    }

    async fn connect(&self, host: &str, port: u16) -> Result<(), NetError> {
        let addrs = self.resolver.resolve(Name::new(host)).await?;
        let candidates: Vec<SocketAddr> = addrs
            .map(|mut addr| {
                if addr.port() == 0 {
                    addr.set_port(port);
                }
                addr
            })
            .collect();
        let candidates = shuffle_endpoints(candidates);

        let transport = self.connect_any(host, &candidates).await?;
        let transport = self
            .retain_close_handle(transport)
            .map_err(|e| NetError::connection_failed(host, e))?;

        tracing::debug!(host = %host, "starting TLS handshake");
        let mut ssl = self
            .connector
            .configure()
            .map_err(|_| NetError::SslProtocolError)?;
        if !TlsConfig::should_set_sni(host) {
            ssl.set_use_server_name_indication(false);
        }
        if self.config.verify == SslVerifyMode::NONE {
            ssl.set_verify_hostname(false);
        }

        let stream = tokio_boring::connect(ssl, host, transport)
            .await
            .map_err(|e| NetError::HandshakeFailed(e.to_string()))?;
        tracing::debug!(host = %host, "TLS handshake complete");

        *self.stream.lock().await = Some(stream);
        Ok(())
    }

    /// Tries each candidate exactly once, in the order given, and returns the
    /// first established connection. Exhausting the list (or an empty list)
    /// is a connect failure carrying the last underlying cause.
    async fn connect_any(
        &self,
        host: &str,
        candidates: &[SocketAddr],
    ) -> Result<TcpStream, NetError> {
        let mut last_err: Option<io::Error> = None;
        for &addr in candidates {
            tracing::debug!(host = %host, %addr, "attempting connection");
            match TcpStream::connect(addr).await {
                Ok(transport) => {
                    tracing::debug!(host = %host, %addr, "connection established");
                    return Ok(transport);
                }
                Err(e) => {
                    tracing::debug!(host = %host, %addr, error = %e, "connection attempt failed");
                    last_err = Some(e);
                }
            }
        }
        let cause = last_err.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no endpoints to connect to")
        });
        Err(NetError::connection_failed(host, cause))
    }

    async fn send(&self, data: Bytes) -> Result<(), NetError> {
        let mut guard = self.stream.lock().await;
        let stream = guard.as_mut().ok_or(NetError::SocketNotConnected)?;
        tracing::debug!(len = data.len(), "writing buffer");
        stream.write_all(&data).await.map_err(NetError::write_failed)
    }

    /// Duplicates the transport's OS handle before the TLS layer takes it
    /// over. The duplicate shares the open connection, so `shutdown` on it
    /// breaks I/O for the stream held inside a suspended operation.
    fn retain_close_handle(&self, transport: TcpStream) -> io::Result<TcpStream> {
        let std_transport = transport.into_std()?;
        let dup = std_transport.try_clone()?;
        std_transport.set_nonblocking(true)?;
        let transport = TcpStream::from_std(std_transport)?;
        *self.raw.lock().unwrap_or_else(PoisonError::into_inner) = Some(dup);
        Ok(transport)
    }
}

/// The single translation point between internal faults and the callback
/// contract: success and error continuations are mutually exclusive, and a
/// fault never escapes past here.
fn notifying<S, E>(result: Result<(), NetError>, on_success: S, on_error: E)
where
    S: FnOnce(),
    E: FnOnce(String),
{
    match result {
        Ok(()) => on_success(),
        Err(e) => on_error(e.to_string()),
    }
}
