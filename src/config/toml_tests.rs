//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.endpoint.url.is_none());
        assert!(config.poll.interval.is_none());
    }

    #[test]
    fn parse_full_endpoint_section() {
        let toml = r#"
            [endpoint]
            url = "https://queue.example.com/api/v1"
            bearer = "secret-token"
            timeout = 20

            [endpoint.headers]
            X-Custom-Header = "custom-value"
            Accept = "application/json"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        let endpoint = &config.endpoint;

        assert_eq!(
            endpoint.url.as_deref(),
            Some("https://queue.example.com/api/v1")
        );
        assert_eq!(endpoint.bearer.as_deref(), Some("secret-token"));
        assert_eq!(endpoint.timeout, Some(20));
        assert_eq!(endpoint.headers.len(), 2);
        assert_eq!(
            endpoint.headers.get("X-Custom-Header").map(String::as_str),
            Some("custom-value")
        );
    }

    #[test]
    fn parse_poll_section() {
        let toml = r#"
            [poll]
            interval = 120
            limit = 500
            mode = "single"
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.poll.interval, Some(120));
        assert_eq!(config.poll.limit, Some(500));
        assert_eq!(config.poll.mode.as_deref(), Some("single"));
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let result = TomlConfig::parse("[webhook]\nurl = \"https://example.com\"");

        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_key_is_rejected() {
        let result = TomlConfig::parse("[poll]\ncadence = 5");

        assert!(result.is_err());
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(TomlConfig::parse("[endpoint\nurl = ").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        // Only the uncommented example value is set.
        assert_eq!(config.poll.interval, Some(30));
        assert!(config.endpoint.url.is_none());
        assert!(config.poll.limit.is_none());
        assert!(config.poll.mode.is_none());
    }

    #[test]
    fn default_template_documents_every_section() {
        let template = default_config_template();

        assert!(template.contains("[endpoint]"));
        assert!(template.contains("[poll]"));
        assert!(template.contains("# url ="));
        assert!(template.contains("# bearer ="));
        assert!(template.contains("# limit ="));
        assert!(template.contains("# mode ="));
    }
}
