//! Name resolution and endpoint ordering.
//!
//! The [`Resolve`] trait is the seam between the socket and whatever actually
//! turns a hostname into addresses; [`GaiResolver`] is the default system
//! resolver, and [`DnsResolverWithOverrides`] pins chosen hostnames to fixed
//! addresses (useful for tests and local development).
//!
//! Resolved candidate lists are passed through [`shuffle_endpoints`] before a
//! connection attempt so that clients do not all herd onto the DNS-first
//! address.

mod gai;
mod resolve;
mod shuffle;

pub use gai::GaiResolver;
pub use resolve::{Addrs, DnsResolverWithOverrides, Name, Resolve, Resolving};
pub use shuffle::shuffle_endpoints;
