use super::*;

#[test]
fn new_strips_trailing_slashes() {
    let config = ApiConfig::new("http://localhost:3002//", None);
    assert_eq!(config.base_url, "http://localhost:3002");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(ApiConfig::new("   ", None).base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn blank_token_is_ignored() {
    assert_eq!(ApiConfig::new("http://h", Some("  ")).bearer_token, None);
    assert_eq!(ApiConfig::new("http://h", Some("  ")).authorization(), None);
}

#[test]
fn token_becomes_bearer_header() {
    let config = ApiConfig::new("http://h", Some(" abc.def "));
    assert_eq!(config.authorization(), Some("Bearer abc.def".to_owned()));
}

#[test]
fn url_joins_request_path() {
    let config = ApiConfig::new("http://h/", None);
    let request = ApiRequest::get("/api/rooms");
    assert_eq!(config.url(&request), "http://h/api/rooms");
}
