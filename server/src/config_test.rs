use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_numbers_with_whitespace() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_port_rejects_garbage_and_overflow() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort { value: "http".to_owned() }));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { value: "70000".to_owned() }));
}

// =============================================================================
// parse_host
// =============================================================================

#[test]
fn parse_host_defaults_to_unspecified() {
    assert_eq!(parse_host(None), Ok(DEFAULT_HOST));
}

#[test]
fn parse_host_accepts_v4_and_v6() {
    assert_eq!(parse_host(Some("127.0.0.1")), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert!(parse_host(Some("::1")).is_ok_and(|ip| ip.is_ipv6()));
}

#[test]
fn parse_host_rejects_hostnames() {
    assert_eq!(
        parse_host(Some("localhost")),
        Err(ConfigError::InvalidHost { value: "localhost".to_owned() })
    );
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn default_config_binds_all_interfaces_on_3000() {
    let config = ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT };
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT: 'x'");
    let err = ConfigError::InvalidHost { value: "y".to_owned() };
    assert_eq!(err.to_string(), "invalid HOST: 'y' (expected an IP address)");
}
