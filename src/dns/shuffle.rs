//! Uniform random permutation of resolved endpoints.

use rand::seq::SliceRandom;
use std::net::SocketAddr;

/// Returns a uniformly random permutation of `endpoints`.
///
/// Resolution order tends to be identical for every client of a host, so
/// connecting in resolved order herds all clients onto the first address.
/// Shuffling spreads load across otherwise-equivalent endpoints and
/// diversifies which address absorbs a fallback attempt.
///
/// Uses the thread-local, OS-seeded generator; no shared state, no
/// cryptographic requirement. Every input entry appears exactly once in the
/// output; empty and single-entry lists pass through unchanged.
pub fn shuffle_endpoints(mut endpoints: Vec<SocketAddr>) -> Vec<SocketAddr> {
    endpoints.shuffle(&mut rand::rng());
    endpoints
}
