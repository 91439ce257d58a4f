//! System resolver using getaddrinfo.
//!
//! Wraps the standard library's `ToSocketAddrs` and runs it in
//! `tokio::task::spawn_blocking` so resolution never blocks the async runtime.

use super::{Addrs, Name, Resolve, Resolving};
use crate::base::neterror::NetError;
use std::{io, net::ToSocketAddrs};

/// System resolver backed by `getaddrinfo` in a thread pool.
///
/// Respects the host's DNS configuration (/etc/resolv.conf, hosts file).
/// Each resolution spawns one blocking task.
#[derive(Clone, Debug, Default)]
pub struct GaiResolver;

impl GaiResolver {
    /// Creates a new `GaiResolver`.
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for GaiResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(async move {
            let host = name.as_str().to_string();
            let domain = host.clone();

            let result = tokio::task::spawn_blocking(move || {
                tracing::debug!(host = %host, "resolving via getaddrinfo");
                (host.as_str(), 0u16)
                    .to_socket_addrs()
                    .map(|iter| iter.collect::<Vec<_>>())
            })
            .await;

            // Handle task join error (cancellation, panic)
            let addrs = result
                .map_err(|e| {
                    tracing::error!(error = %e, "resolution task failed");
                    NetError::name_not_resolved(
                        domain.clone(),
                        io::Error::new(io::ErrorKind::Other, e),
                    )
                })?
                .map_err(|e| {
                    tracing::debug!(domain = %domain, error = %e, "resolution failed");
                    NetError::name_not_resolved(domain.clone(), e)
                })?;

            if addrs.is_empty() {
                return Err(NetError::NoAddresses { host: domain });
            }

            tracing::debug!(domain = %domain, count = addrs.len(), "resolution complete");
            Ok(Box::new(addrs.into_iter()) as Addrs)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gai_resolver_localhost() {
        let resolver = GaiResolver::new();
        let result = resolver.resolve(Name::new("localhost")).await;

        // localhost should always resolve
        assert!(result.is_ok());
        let addrs: Vec<_> = result.unwrap().collect();
        assert!(!addrs.is_empty());
    }

    #[tokio::test]
    async fn test_gai_resolver_invalid_tld() {
        let resolver = GaiResolver::new();
        let result = resolver.resolve(Name::new("host.invalid")).await;

        // RFC 6761 reserves .invalid; resolution must fail with a message
        let err = result.err().expect("resolution of .invalid succeeded");
        assert!(err.to_string().contains("host.invalid"));
    }
}
