//! The Display service client.
//!
//! Every RPC is available in two forms:
//!
//! - **Request form**: `client.get_kiosk(request).await` sends the request
//!   and waits for the response.
//! - **Callable form**: `client.get_kiosk_callable().future_call(request)`
//!   dispatches immediately and returns an [`ApiFuture`](crate::ApiFuture).
//!
//! Both forms go through [`DisplayClient::invoke`].

use reqwest::Method;
use tracing::{debug, instrument};
use url::Url;

use kiosk_define::RestMethod;
use kiosk_definitions::display::{
    DeleteKioskRequest, DeleteSignRequest, Empty, GetKioskRequest, GetSignIdForKioskIdRequest,
    GetSignIdResponse, GetSignRequest, Kiosk, ListKiosksResponse, ListSignsResponse,
    SetSignIdForKioskIdsRequest, Sign,
};

use crate::callable::UnaryCallable;
use crate::config::ClientConfig;
use crate::error::{ConfigError, KioskError};
use crate::rpc::{self, Rpc};

/// Client for the Kiosk Display service.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DisplayClient {
    http: reqwest::Client,
    base_url: String,
}

impl DisplayClient {
    /// Creates a client from explicit configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, KioskError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Self::with_http_client(http, &config.base_url())
    }

    /// Creates a client configured from `KIOSK_*` environment variables.
    pub fn from_env() -> Result<Self, KioskError> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// Creates a client for a custom base URL (e.g., a mock server).
    ///
    /// ```
    /// use kiosk_client::DisplayClient;
    ///
    /// let client = DisplayClient::with_base_url("http://localhost:8080/").unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8080");
    /// ```
    pub fn with_base_url(base_url: &str) -> Result<Self, KioskError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    fn with_http_client(http: reqwest::Client, base_url: &str) -> Result<Self, KioskError> {
        let parsed = Url::parse(base_url).map_err(ConfigError::from)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()).into());
        }

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes one RPC and waits for its response.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails (network error, timeout, etc.)
    /// - The service answers with a non-success status code
    /// - The response body cannot be deserialized
    #[instrument(name = "rpc", skip(self, request), fields(rpc = M::NAME))]
    pub async fn invoke<M: Rpc>(&self, request: M::Request) -> Result<M::Response, KioskError> {
        let url = format!("{}{}", self.base_url, M::path(&request));
        debug!(method = %M::METHOD, %url, "sending request");

        let mut req_builder = self.http.request(http_method(M::METHOD), &url);
        if M::has_body() {
            req_builder = req_builder.json(&request);
        }

        let response = req_builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            debug!(status, "service returned an error");
            return Err(KioskError::ApiError { status, body });
        }

        let bytes = response.bytes().await?;
        // Empty-returning RPCs may answer with no body at all.
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };
        Ok(serde_json::from_slice(body)?)
    }

    /// Returns a callable for any RPC.
    pub fn callable<M: Rpc>(&self) -> UnaryCallable<M> {
        UnaryCallable::new(self.clone())
    }

    /// Create a kiosk. This enrolls the kiosk for sign display.
    pub async fn create_kiosk(&self, request: Kiosk) -> Result<Kiosk, KioskError> {
        self.invoke::<rpc::CreateKiosk>(request).await
    }

    /// Callable form of [`Self::create_kiosk`].
    pub fn create_kiosk_callable(&self) -> UnaryCallable<rpc::CreateKiosk> {
        self.callable()
    }

    /// List active kiosks.
    pub async fn list_kiosks(&self, request: Empty) -> Result<ListKiosksResponse, KioskError> {
        self.invoke::<rpc::ListKiosks>(request).await
    }

    /// Callable form of [`Self::list_kiosks`].
    pub fn list_kiosks_callable(&self) -> UnaryCallable<rpc::ListKiosks> {
        self.callable()
    }

    /// Get a kiosk.
    pub async fn get_kiosk(&self, request: GetKioskRequest) -> Result<Kiosk, KioskError> {
        self.invoke::<rpc::GetKiosk>(request).await
    }

    /// Callable form of [`Self::get_kiosk`].
    pub fn get_kiosk_callable(&self) -> UnaryCallable<rpc::GetKiosk> {
        self.callable()
    }

    /// Delete a kiosk.
    pub async fn delete_kiosk(&self, request: DeleteKioskRequest) -> Result<Empty, KioskError> {
        self.invoke::<rpc::DeleteKiosk>(request).await
    }

    /// Callable form of [`Self::delete_kiosk`].
    pub fn delete_kiosk_callable(&self) -> UnaryCallable<rpc::DeleteKiosk> {
        self.callable()
    }

    /// Create a sign. This enrolls the sign for sign display.
    pub async fn create_sign(&self, request: Sign) -> Result<Sign, KioskError> {
        self.invoke::<rpc::CreateSign>(request).await
    }

    /// Callable form of [`Self::create_sign`].
    pub fn create_sign_callable(&self) -> UnaryCallable<rpc::CreateSign> {
        self.callable()
    }

    /// List active signs.
    pub async fn list_signs(&self, request: Empty) -> Result<ListSignsResponse, KioskError> {
        self.invoke::<rpc::ListSigns>(request).await
    }

    /// Callable form of [`Self::list_signs`].
    pub fn list_signs_callable(&self) -> UnaryCallable<rpc::ListSigns> {
        self.callable()
    }

    /// Get a sign.
    pub async fn get_sign(&self, request: GetSignRequest) -> Result<Sign, KioskError> {
        self.invoke::<rpc::GetSign>(request).await
    }

    /// Callable form of [`Self::get_sign`].
    pub fn get_sign_callable(&self) -> UnaryCallable<rpc::GetSign> {
        self.callable()
    }

    /// Delete a sign.
    pub async fn delete_sign(&self, request: DeleteSignRequest) -> Result<Empty, KioskError> {
        self.invoke::<rpc::DeleteSign>(request).await
    }

    /// Callable form of [`Self::delete_sign`].
    pub fn delete_sign_callable(&self) -> UnaryCallable<rpc::DeleteSign> {
        self.callable()
    }

    /// Set a sign for display on one or more kiosks.
    pub async fn set_sign_id_for_kiosk_ids(
        &self,
        request: SetSignIdForKioskIdsRequest,
    ) -> Result<Empty, KioskError> {
        self.invoke::<rpc::SetSignIdForKioskIds>(request).await
    }

    /// Callable form of [`Self::set_sign_id_for_kiosk_ids`].
    pub fn set_sign_id_for_kiosk_ids_callable(&self) -> UnaryCallable<rpc::SetSignIdForKioskIds> {
        self.callable()
    }

    /// Get the sign that should be displayed on a kiosk.
    pub async fn get_sign_id_for_kiosk_id(
        &self,
        request: GetSignIdForKioskIdRequest,
    ) -> Result<GetSignIdResponse, KioskError> {
        self.invoke::<rpc::GetSignIdForKioskId>(request).await
    }

    /// Callable form of [`Self::get_sign_id_for_kiosk_id`].
    pub fn get_sign_id_for_kiosk_id_callable(&self) -> UnaryCallable<rpc::GetSignIdForKioskId> {
        self.callable()
    }
}

fn http_method(method: RestMethod) -> Method {
    match method {
        RestMethod::Get => Method::GET,
        RestMethod::Post => Method::POST,
        RestMethod::Put => Method::PUT,
        RestMethod::Patch => Method::PATCH,
        RestMethod::Delete => Method::DELETE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparsable_base_url() {
        let err = DisplayClient::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, KioskError::Config(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = DisplayClient::with_base_url("ftp://kiosk.example.com").unwrap_err();
        assert!(matches!(err, KioskError::Config(ConfigError::UnsupportedScheme(_))));
    }

    #[test]
    fn new_uses_configured_location() {
        let config = ClientConfig {
            host: "display.internal".to_string(),
            port: 9090,
            ..ClientConfig::default()
        };
        let client = DisplayClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://display.internal:9090");
    }

    #[test]
    fn rest_methods_map_to_http_methods() {
        assert_eq!(http_method(RestMethod::Get), Method::GET);
        assert_eq!(http_method(RestMethod::Delete), Method::DELETE);
    }
}
