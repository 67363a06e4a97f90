use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn leptos_options_follow_server_config() {
    let config = ServerConfig::from_vars(Some("4100"), Some("dist")).unwrap();
    let options = leptos_options(&config).unwrap();
    assert_eq!(options.site_root.as_ref(), "dist");
    assert_eq!(options.site_addr.port(), 4100);
    assert!(!options.output_name.is_empty());
}
