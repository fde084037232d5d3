use super::{apply_file_overrides, normalize_api_url, Settings};

#[test]
fn empty_api_url_falls_back_to_default() {
    assert_eq!(normalize_api_url(""), Settings::default().api_url);
    assert_eq!(normalize_api_url("   "), Settings::default().api_url);
}

#[test]
fn bare_host_gets_http_scheme() {
    assert_eq!(
        normalize_api_url("enquiries.example.com/api/enquiries"),
        "http://enquiries.example.com/api/enquiries"
    );
    assert_eq!(
        normalize_api_url("127.0.0.1:9000/enquiries"),
        "http://127.0.0.1:9000/enquiries"
    );
}

#[test]
fn url_with_scheme_is_kept_verbatim() {
    assert_eq!(
        normalize_api_url("https://api.example.com/enquiries"),
        "https://api.example.com/enquiries"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(
        normalize_api_url("  https://api.example.com/enquiries\n"),
        "https://api.example.com/enquiries"
    );
}

#[test]
fn file_override_replaces_api_url() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        "api_url = \"https://booking.example.com/enquiries\"\n",
    );
    assert_eq!(settings.api_url, "https://booking.example.com/enquiries");
}

#[test]
fn unreadable_file_config_is_ignored() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "not valid toml [[");
    assert_eq!(settings.api_url, Settings::default().api_url);

    apply_file_overrides(&mut settings, "other_key = \"value\"\n");
    assert_eq!(settings.api_url, Settings::default().api_url);
}
