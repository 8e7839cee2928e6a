use super::*;

// =============================================================================
// ApiConfig::new
// =============================================================================

#[test]
fn new_keeps_plain_url() {
    let config = ApiConfig::new("http://localhost:3000");
    assert_eq!(config.base_url, "http://localhost:3000");
}

#[test]
fn new_trims_trailing_slash() {
    let config = ApiConfig::new("http://localhost:3000/");
    assert_eq!(config.base_url, "http://localhost:3000");
}

#[test]
fn new_trims_multiple_trailing_slashes() {
    let config = ApiConfig::new("https://api.example.com///");
    assert_eq!(config.base_url, "https://api.example.com");
}

// =============================================================================
// ApiConfig::default
// =============================================================================

#[test]
fn default_is_local_backend() {
    assert_eq!(ApiConfig::default().base_url, "http://localhost:3000");
}

#[test]
fn default_matches_new_of_default_url() {
    assert_eq!(ApiConfig::default(), ApiConfig::new("http://localhost:3000"));
}
