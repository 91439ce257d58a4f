use boring::ssl::{SslConnector, SslMethod, SslVerifyMode, SslVersion};
use tlsock::socket::tls::TlsConfig;

#[test]
fn test_default_config() {
    let config = TlsConfig::default();

    assert_eq!(config.min_version, SslVersion::TLS1_2);
    assert_eq!(config.verify, SslVerifyMode::PEER);

    // Check application to builder
    let mut builder = SslConnector::builder(SslMethod::tls_client()).unwrap();
    let result = config.apply_to_builder(&mut builder);
    assert!(result.is_ok(), "Failed to apply default config to SslConnector");
}

#[test]
fn test_insecure_config() {
    let config = TlsConfig::insecure();

    // The protocol floor stays in place even without verification
    assert_eq!(config.min_version, SslVersion::TLS1_2);
    assert_eq!(config.verify, SslVerifyMode::NONE);
    assert!(config.client_connector().is_ok());
}

#[test]
fn test_should_set_sni() {
    assert!(TlsConfig::should_set_sni("example.com"));
    assert!(TlsConfig::should_set_sni("sub.domain.example.com"));

    // Raw IP addresses must not get SNI (RFC 6066)
    assert!(!TlsConfig::should_set_sni("127.0.0.1"));
    assert!(!TlsConfig::should_set_sni("::1"));
    assert!(!TlsConfig::should_set_sni("2001:db8::1"));
}
