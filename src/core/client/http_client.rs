use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info};
use uuid::Uuid;

use crate::core::client::http_transport::{
    HttpTransport, RawResponse, ReqwestTransport, TransportError,
};
use crate::core::config::AppConfig;
use crate::core::util::query_util::build_url;
use crate::errors::{ApiError, SERVER_ERROR_FALLBACK};

/// GET-only client bound to one base address. Every failure comes out as an
/// [`ApiError`].
#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Production client: reqwest transport with the configured timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config.request_timeout).map_err(|e| {
            error!(error = %e, "Request error");
            ApiError::unexpected(e)
        })?;
        Ok(Self::new(config.api_base_url.clone(), Arc::new(transport)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` with `query` and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = build_url(&self.base_url, path, query);
        let request_id = Uuid::new_v4().to_string();

        info!(request_id = %request_id, "Making GET request to {}", url);

        let response = match self.transport.get(&url, &request_id).await {
            Ok(resp) => resp,
            Err(e) => {
                error!(request_id = %request_id, url = %url, error = %e, "Response error");
                return Err(normalize_transport_error(e));
            }
        };

        if !response.status.is_success() {
            let err = server_error(&response);
            error!(
                request_id = %request_id,
                url = %url,
                status = %response.status,
                message = %err,
                "Response error"
            );
            return Err(err);
        }

        serde_json::from_str::<T>(&response.body).map_err(|e| {
            error!(request_id = %request_id, url = %url, error = %e, "Failed to decode response body");
            ApiError::unexpected(e)
        })
    }
}

fn normalize_transport_error(err: TransportError) -> ApiError {
    match err {
        TransportError::NoResponse(detail) => ApiError::Network { detail },
        TransportError::Request(msg) => ApiError::Unexpected(msg),
    }
}

fn server_error(response: &RawResponse) -> ApiError {
    ApiError::Server {
        status: response.status,
        message: server_message_from_body(&response.body),
    }
}

/// `message`, then `error`, then the generic fallback. Empty strings and
/// non-string values are skipped.
pub fn server_message_from_body(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|v| {
            ["message", "error"].iter().find_map(|key| {
                v.get(*key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use http::StatusCode;
    use serde::Deserialize;
    use std::sync::Mutex;

    use crate::errors::NETWORK_ERROR_MESSAGE;

    /// Replays canned outcomes and records requested URLs.
    #[derive(Default)]
    pub(crate) struct CannedTransport {
        pub(crate) outcomes: Mutex<Vec<Result<RawResponse, TransportError>>>,
        pub(crate) urls: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        pub(crate) fn replying(status: StatusCode, body: &str) -> Self {
            let t = Self::default();
            t.push(Ok(RawResponse {
                status,
                body: body.to_string(),
            }));
            t
        }

        pub(crate) fn failing(err: TransportError) -> Self {
            let t = Self::default();
            t.push(Err(err));
            t
        }

        pub(crate) fn push(&self, outcome: Result<RawResponse, TransportError>) {
            self.outcomes.lock().unwrap().push(outcome);
        }
    }

    #[async_trait]
    impl HttpTransport for CannedTransport {
        async fn get(&self, url: &str, _request_id: &str) -> Result<RawResponse, TransportError> {
            self.urls.lock().unwrap().push(url.to_string());
            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                return Err(TransportError::Request("no canned response left".into()));
            }
            outcomes.remove(0)
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ping {
        ok: bool,
    }

    fn client(transport: CannedTransport) -> (HttpClient, Arc<CannedTransport>) {
        let transport = Arc::new(transport);
        (
            HttpClient::new("http://localhost:5000/api/", transport.clone()),
            transport,
        )
    }

    #[tokio::test]
    async fn decodes_success_body() {
        let (client, transport) = client(CannedTransport::replying(StatusCode::OK, r#"{"ok":true}"#));
        let ping: Ping = client
            .get_json("/ping", &[("level", "senior".to_string())])
            .await
            .unwrap();
        assert_eq!(ping, Ping { ok: true });
        assert_eq!(
            transport.urls.lock().unwrap().as_slice(),
            ["http://localhost:5000/api/ping?level=senior"]
        );
    }

    #[tokio::test]
    async fn server_error_prefers_message_over_error() {
        let (client, _) = client(CannedTransport::replying(
            StatusCode::BAD_REQUEST,
            r#"{"message":"datas inválidas","error":"ignored"}"#,
        ));
        let err = client.get_json::<Ping>("/ping", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "datas inválidas");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn server_error_reads_error_field() {
        let (client, _) = client(CannedTransport::replying(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":"db down"}"#,
        ));
        let err = client.get_json::<Ping>("/ping", &[]).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "db down".into()
            }
        );
    }

    #[tokio::test]
    async fn server_error_without_usable_body_uses_fallback() {
        let (client, _) = client(CannedTransport::replying(StatusCode::BAD_GATEWAY, "<html>oops</html>"));
        let err = client.get_json::<Ping>("/ping", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), SERVER_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn error_status_with_empty_body_is_a_server_error() {
        let (client, _) = client(CannedTransport::replying(StatusCode::INTERNAL_SERVER_ERROR, ""));
        let err = client.get_json::<Ping>("/ping", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Server { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.to_string(), SERVER_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn missing_response_becomes_network_error() {
        let (client, _) = client(CannedTransport::failing(TransportError::NoResponse(
            "operation timed out".into(),
        )));
        let err = client.get_json::<Ping>("/ping", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
        assert_eq!(err.kind(), "network");
    }

    #[tokio::test]
    async fn request_failure_becomes_unexpected_error() {
        let (client, _) = client(CannedTransport::failing(TransportError::Request(
            "builder error".into(),
        )));
        let err = client.get_json::<Ping>("/ping", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Erro inesperado: builder error");
    }

    #[tokio::test]
    async fn undecodable_success_body_is_unexpected() {
        let (client, _) = client(CannedTransport::replying(StatusCode::OK, "not json"));
        let err = client.get_json::<Ping>("/ping", &[]).await.unwrap_err();
        assert_eq!(err.kind(), "unexpected");
    }

    #[test]
    fn empty_message_falls_through_to_error() {
        assert_eq!(
            server_message_from_body(r#"{"message":"","error":"sessão expirada"}"#),
            "sessão expirada"
        );
        assert_eq!(server_message_from_body(r#"{"message":42}"#), SERVER_ERROR_FALLBACK);
    }
}
