//! Session setup and path resolution against the session home directory.

use std::sync::Arc;

use log::warn;
use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::error::{ErrorCallback, HdfsError, Result};
use crate::fs::operations::utils::resolve_path;
use crate::http::{HttpClient, Transport};

/// A connected gateway session.
///
/// Holds the base service URL, the optional `user.name` query value, the
/// home directory fetched once at connect time and the shared transport.
/// Apart from the two registration setters, a session is immutable after
/// [`connect`] returns, so independent tasks can issue operations
/// concurrently through a shared reference.
///
/// [`connect`]: Session::connect
pub struct Session {
    pub(crate) api: ApiClient,
    home_dir: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("home_dir", &self.home_dir)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Connect to a gateway without a user name.
    pub async fn connect(base_url: &str) -> Result<Session> {
        Self::init(Arc::new(HttpClient::new()), base_url, None).await
    }

    /// Connect to a gateway, sending `user.name` on every request.
    pub async fn connect_as(base_url: &str, user: &str) -> Result<Session> {
        Self::init(Arc::new(HttpClient::new()), base_url, Some(user)).await
    }

    /// Connect through an HTTP proxy.
    ///
    /// This method is only available on native targets (not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn connect_with_proxy(
        base_url: &str,
        user: Option<&str>,
        proxy: &str,
    ) -> Result<Session> {
        Self::init(Arc::new(HttpClient::with_proxy(proxy)?), base_url, user).await
    }

    /// Connect with an injected transport (tests, shared connection pools).
    pub async fn connect_with_transport(
        base_url: &str,
        user: Option<&str>,
        transport: Arc<dyn Transport>,
    ) -> Result<Session> {
        Self::init(transport, base_url, user).await
    }

    async fn init(
        transport: Arc<dyn Transport>,
        base_url: &str,
        user: Option<&str>,
    ) -> Result<Session> {
        let base_url = normalize_base_url(base_url)?;
        let api = ApiClient::new(transport, base_url, user.map(str::to_string));
        let mut session = Session {
            api,
            home_dir: String::new(),
        };

        // One GETHOMEDIRECTORY before the session is handed out; relative
        // path resolution depends on it. A failed fetch leaves the home
        // directory empty rather than failing the connect.
        match session.home_directory().await {
            Ok(path) => session.home_dir = path,
            Err(err) => warn!("home directory fetch failed: {}", err),
        }

        Ok(session)
    }

    /// The home directory fetched at connect time (empty when the fetch
    /// failed).
    pub fn home_dir(&self) -> &str {
        &self.home_dir
    }

    /// Resolve a path against the session home directory.
    pub fn resolve(&self, path: &str) -> String {
        resolve_path(&self.home_dir, path)
    }

    /// Register a callback notified once per failed request.
    pub fn set_error_callback(&mut self, callback: ErrorCallback) {
        self.api.set_error_callback(callback);
    }

    /// Register a cancellation token.
    ///
    /// Cancelling the token aborts any in-flight request with
    /// [`HdfsError::Cancelled`].
    pub fn set_cancellation(&mut self, token: CancellationToken) {
        self.api.set_cancellation(token);
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    if !base_url.contains("://") {
        return Err(HdfsError::InvalidUrl(base_url.to_string()));
    }
    if base_url.ends_with('/') {
        Ok(base_url.to_string())
    } else {
        Ok(format!("{}/", base_url))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::http::mock::MockTransport;

    async fn connected(transport: Arc<MockTransport>, user: Option<&str>) -> Session {
        transport.push_response(200, r#"{"Path": "/user/hdfs"}"#);
        Session::connect_with_transport("http://test.me/plz/", user, transport)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_connect_fetches_home_directory_once() {
        let transport = Arc::new(MockTransport::new());
        let session = connected(transport.clone(), Some("hdfs")).await;

        assert_eq!(session.home_dir(), "/user/hdfs");
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "http://test.me/plz/webhdfs/v1/?user.name=hdfs&op=GETHOMEDIRECTORY"
        );
    }

    #[tokio::test]
    async fn test_connect_survives_home_directory_failure() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(500, "boom");
        let session = Session::connect_with_transport("http://test.me/plz", None, transport)
            .await
            .unwrap();

        assert_eq!(session.home_dir(), "");
        // Relative resolution degrades to the root.
        assert_eq!(session.resolve("p"), "/p");
    }

    #[tokio::test]
    async fn test_resolution_uses_home_directory() {
        let transport = Arc::new(MockTransport::new());
        let session = connected(transport, None).await;

        assert_eq!(session.resolve("a/b"), "/user/hdfs/a/b");
        assert_eq!(session.resolve("/a/b"), "/a/b");
        assert_eq!(session.resolve(""), "/");
        assert_eq!(session.resolve("hdfs://host:8020/a/b"), "/a/b");
    }

    #[tokio::test]
    async fn test_base_url_gets_trailing_slash() {
        let transport = Arc::new(MockTransport::new());
        transport.push_response(200, r#"{"Path": "/user/x"}"#);
        let _ = Session::connect_with_transport("http://test.me:9870", None, transport.clone())
            .await
            .unwrap();

        assert!(transport.requests()[0]
            .url
            .starts_with("http://test.me:9870/webhdfs/v1/"));
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_rejected() {
        let err = Session::connect("not-a-url").await.unwrap_err();
        assert!(matches!(err, HdfsError::InvalidUrl(_)));
    }
}
