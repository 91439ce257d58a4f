use crate::base::neterror::NetError;
use boring::ssl::{SslConnector, SslConnectorBuilder, SslMethod, SslVerifyMode, SslVersion};

/// TLS client configuration.
///
/// The protocol floor is a compiled-in policy: the socket never negotiates
/// below TLS 1.2. Certificate validation is delegated to BoringSSL's default
/// trust chain; the `verify` knob exists so tests can talk to self-signed
/// peers.
#[derive(Debug, Clone)]
pub struct TlsConfig {
    pub min_version: SslVersion,
    pub verify: SslVerifyMode,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            min_version: SslVersion::TLS1_2,
            verify: SslVerifyMode::PEER,
        }
    }
}

impl TlsConfig {
    /// A configuration that skips certificate verification.
    ///
    /// Only appropriate against peers you control, e.g. self-signed test
    /// servers.
    pub fn insecure() -> Self {
        Self {
            verify: SslVerifyMode::NONE,
            ..Self::default()
        }
    }

    /// Apply this configuration to an SSL connector builder.
    pub fn apply_to_builder(&self, builder: &mut SslConnectorBuilder) -> Result<(), NetError> {
        builder
            .set_min_proto_version(Some(self.min_version))
            .map_err(|_| NetError::SslProtocolError)?;
        builder.set_verify(self.verify);
        Ok(())
    }

    /// Build a client-role connector with this configuration applied.
    pub fn client_connector(&self) -> Result<SslConnector, NetError> {
        let mut builder =
            SslConnector::builder(SslMethod::tls_client()).map_err(|_| NetError::SslProtocolError)?;
        self.apply_to_builder(&mut builder)?;
        Ok(builder.build())
    }

    /// Check if SNI (Server Name Indication) should be set for this host.
    /// Per RFC 6066, SNI MUST NOT be set for raw IP addresses.
    pub fn should_set_sni(host: &str) -> bool {
        host.parse::<std::net::IpAddr>().is_err()
    }
}
