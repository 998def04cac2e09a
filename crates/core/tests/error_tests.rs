// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use sales_dashboard_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn http_status() {
        let err = CoreError::HttpStatus {
            endpoint: "statistics".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "HTTP 503 from statistics endpoint");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            endpoint: "barChart".into(),
            message: "expected a sequence".into(),
        };
        assert_eq!(err.to_string(), "API error (barChart): expected a sequence");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn config() {
        let err = CoreError::Config("per_page must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: per_page must be at least 1"
        );
    }

    #[test]
    fn file_io() {
        let err = CoreError::FileIO("permission denied".into());
        assert_eq!(err.to_string(), "File I/O error: permission denied");
    }

    #[test]
    fn invalid_input() {
        let err = CoreError::InvalidInput("Unknown month: Smarch".into());
        assert_eq!(err.to_string(), "Invalid input: Unknown month: Smarch");
    }
}

// ── From conversions ────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::FileIO(ref m) if m.contains("no such file")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("per_page = = 3").unwrap_err();
        let err: CoreError = toml_err.into();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[tokio::test]
    async fn from_reqwest_error_redacts_query() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let reqwest_err = reqwest::Client::new()
            .get(format!("http://{addr}/transactions?search=secret-term"))
            .send()
            .await
            .unwrap_err();
        let err: CoreError = reqwest_err.into();
        match err {
            CoreError::Network(msg) => assert!(!msg.contains("secret-term"), "{msg}"),
            other => panic!("expected Network, got {other:?}"),
        }
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

#[test]
fn core_error_is_send_sync_error() {
    fn assert_bounds<T: std::error::Error + Send + Sync + 'static>() {}
    assert_bounds::<CoreError>();
}
