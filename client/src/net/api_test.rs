use super::*;

#[test]
fn request_summary_shows_method_and_absolute_url() {
    let api = ApiConfig::new("http://localhost:3002/", None);
    let request = ApiRequest::delete("/api/rooms/5");
    assert_eq!(request_summary(&api, &request), "DELETE http://localhost:3002/api/rooms/5");
}

#[test]
fn unavailable_error_is_a_network_error() {
    assert_eq!(
        unavailable_error().to_string(),
        "network request failed: not available on server"
    );
}
