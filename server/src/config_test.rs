use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, site_root: DEFAULT_SITE_ROOT.to_owned() });
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, DEFAULT_SITE_ROOT);
}

#[test]
fn explicit_values_are_used() {
    let cfg = ServerConfig::from_vars(Some("8080"), Some("/srv/genia/site/")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, "/srv/genia/site");
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(ServerConfig::from_vars(Some("http"), None), Err(ServerConfigError::InvalidPort("http".into())));
    assert_eq!(ServerConfig::from_vars(Some("70000"), None), Err(ServerConfigError::InvalidPort("70000".into())));
}
