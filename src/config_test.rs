use super::*;

#[test]
fn parse_port_absent_or_blank_is_none() {
    assert_eq!(parse_port(None).unwrap(), None);
    assert_eq!(parse_port(Some("  ")).unwrap(), None);
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some(" 8080 ")).unwrap(), Some(8080));
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err().to_string();
    assert!(err.contains("invalid PORT 'eighty'"));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn listen_addr_overrides_only_port() {
    let site: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    assert_eq!(HostConfig { port: Some(9000) }.listen_addr(site), "127.0.0.1:9000".parse().unwrap());
    assert_eq!(HostConfig::default().listen_addr(site), site);
}
