//! Request dispatch against the WebHDFS gateway.

use std::sync::Arc;

use bytes::Bytes;
use log::debug;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::api::operation::Operation;
use crate::error::{ErrorCallback, ErrorEvent, HdfsError, Result};
use crate::http::{ByteStream, Method, Transport, TransportResponse};

/// Version prefix of the gateway REST namespace.
const API_PREFIX: &str = "webhdfs/v1";

/// Dispatcher for gateway operations.
///
/// Builds operation URLs, issues requests through the transport and maps
/// outcomes onto typed errors plus the optional error-notification channel.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    user: Option<String>,
    error_callback: Option<ErrorCallback>,
    cancel: Option<CancellationToken>,
}

impl ApiClient {
    /// Create a dispatcher. `base_url` must already end with a slash.
    pub(crate) fn new(
        transport: Arc<dyn Transport>,
        base_url: String,
        user: Option<String>,
    ) -> Self {
        Self {
            transport,
            base_url,
            user,
            error_callback: None,
            cancel: None,
        }
    }

    /// Register the error notification callback.
    pub(crate) fn set_error_callback(&mut self, callback: ErrorCallback) {
        self.error_callback = Some(callback);
    }

    /// Register a cancellation token checked on every dispatch.
    pub(crate) fn set_cancellation(&mut self, token: CancellationToken) {
        self.cancel = Some(token);
    }

    /// Build the fully qualified URL for an operation.
    ///
    /// Shape: `{base}webhdfs/v1{path}?[user.name={user}&]op={CODE}[&params]`.
    /// Extra parameters are appended verbatim in caller order.
    pub(crate) fn build_url(
        &self,
        path: &str,
        op: Operation,
        params: &[(&str, String)],
    ) -> String {
        let mut url = format!("{}{}{}?", self.base_url, API_PREFIX, path);
        if let Some(user) = &self.user {
            url.push_str("user.name=");
            url.push_str(user);
            url.push('&');
        }
        url.push_str("op=");
        url.push_str(op.code());
        for (key, value) in params {
            url.push('&');
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }

    /// Invoke a JSON-bodied operation and return the parsed envelope.
    ///
    /// An empty 2xx body yields `Value::Null`, which the shape decoders turn
    /// into their default value. Non-2xx responses notify the error callback
    /// once, then fail with [`HdfsError::Remote`] carrying the status and the
    /// raw body.
    pub(crate) async fn invoke(
        &self,
        path: &str,
        op: Operation,
        params: &[(&str, String)],
        body: Option<Bytes>,
    ) -> Result<Value> {
        let method = op.method();
        let url = self.build_url(path, op, params);
        debug!("request op={} method={} url={}", op.code(), method.as_str(), url);

        let response = self.dispatch(method, &url, body).await?;
        let status = response.status;
        let success = response.is_success();
        let text = response.text().await?;
        debug!("response op={} status={} bytes={}", op.code(), status, text.len());

        if !success {
            self.notify(&ErrorEvent::Response {
                status,
                body: text.clone(),
            });
            return Err(remote_error(status, text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Issue an OPEN request and hand the body through as a byte stream.
    ///
    /// The HTTP status is deliberately not checked: OPEN returns whatever
    /// stream the gateway produced, and callers detect failure as a
    /// zero-length stream. `offset` and `length` are appended only when
    /// positive; zero means "from the start" / "to the end".
    pub(crate) async fn open_stream(
        &self,
        path: &str,
        offset: u64,
        length: u64,
    ) -> Result<ByteStream> {
        let mut params = Vec::new();
        if offset > 0 {
            params.push(("offset", offset.to_string()));
        }
        if length > 0 {
            params.push(("length", length.to_string()));
        }

        let url = self.build_url(path, Operation::Open, &params);
        debug!("request op=OPEN method=GET url={}", url);

        let response = self.dispatch(Method::Get, &url, None).await?;
        debug!("response op=OPEN status={}", response.status);
        Ok(response.body)
    }

    /// Run one transport exchange, honoring cancellation and reporting
    /// transport faults to the error callback.
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<Bytes>,
    ) -> Result<TransportResponse> {
        let call = self.transport.execute(method, url, body);
        let outcome = match &self.cancel {
            Some(token) => tokio::select! {
                _ = token.cancelled() => return Err(HdfsError::Cancelled),
                outcome = call => outcome,
            },
            None => call.await,
        };

        match outcome {
            Ok(response) => Ok(response),
            Err(err) => {
                self.notify(&ErrorEvent::Exception(err.to_string()));
                Err(err)
            }
        }
    }

    fn notify(&self, event: &ErrorEvent) {
        if let Some(callback) = &self.error_callback {
            callback(event);
        }
    }
}

/// Build a remote error, folding in the `RemoteException` envelope message
/// when the body carries one.
fn remote_error(status: u16, body: String) -> HdfsError {
    let parsed: Option<Value> = serde_json::from_str(&body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("RemoteException"))
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| format!("gateway returned status {}", status));
    HdfsError::Remote {
        status,
        message,
        body,
    }
}
