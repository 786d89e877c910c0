#[cfg(test)]
mod tests {
    use pixeldash::app::api_client::{
        startup_base_url, ApiResponse, PanelApiClient, BASE_URL_ENV, DEFAULT_BASE_URL,
    };

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = PanelApiClient::new("http://192.168.1.50:5000/").unwrap();

        assert_eq!(client.base_url(), "http://192.168.1.50:5000");
    }

    #[test]
    fn test_base_url_kept_verbatim_otherwise() {
        let client = PanelApiClient::new("http://panel.local:5000").unwrap();

        assert_eq!(client.base_url(), "http://panel.local:5000");
    }

    #[test]
    fn test_api_response_tolerates_missing_fields() {
        let empty: ApiResponse = serde_json::from_str("{}").unwrap();
        assert!(!empty.success);
        assert!(empty.message.is_none());

        let bare_success: ApiResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(bare_success.success);
        assert!(bare_success.message.is_none());

        let failure: ApiResponse =
            serde_json::from_str(r#"{"success": false, "message": "config invalid"}"#).unwrap();
        assert!(!failure.success);
        assert_eq!(failure.message.as_deref(), Some("config invalid"));
    }

    #[test]
    fn test_startup_base_url_precedence() {
        // All the environment cases live in one test; the variable is process
        // global and the cases would race as separate tests.
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(startup_base_url(None), DEFAULT_BASE_URL);
        assert_eq!(
            startup_base_url(Some("http://saved.local:5000")),
            "http://saved.local:5000"
        );
        assert_eq!(startup_base_url(Some("")), DEFAULT_BASE_URL);
        assert_eq!(startup_base_url(Some("   ")), DEFAULT_BASE_URL);

        std::env::set_var(BASE_URL_ENV, "http://env.local:5000");
        assert_eq!(
            startup_base_url(Some("http://saved.local:5000")),
            "http://env.local:5000"
        );

        std::env::set_var(BASE_URL_ENV, "  http://padded.local:5000  ");
        assert_eq!(startup_base_url(None), "http://padded.local:5000");

        // An empty override does not shadow the saved URL.
        std::env::set_var(BASE_URL_ENV, "");
        assert_eq!(
            startup_base_url(Some("http://saved.local:5000")),
            "http://saved.local:5000"
        );

        std::env::remove_var(BASE_URL_ENV);
    }
}
