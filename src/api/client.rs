use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::error::ApiError;

/// User agent sent with every API request
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Per-request configuration for [`ApiClient::call`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method, `GET` by default
    pub method: Method,
    /// Raw request body
    pub body: Option<String>,
    /// Extra headers; these replace defaults with the same name
    pub headers: HeaderMap,
}

impl RequestOptions {
    /// Options for a request with the given method
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a header, replacing any previous value under the same name
    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Thin wrapper around `reqwest` that talks to the events API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL. An empty base means every path must be an absolute URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing `reqwest` client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// The base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `base + path` into an absolute URL
    pub fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    /// Call the API and decode the JSON response body.
    ///
    /// A JSON content type is sent unless the caller passes its own
    /// `Content-Type`. Caller headers are merged per name: passing only
    /// unrelated headers keeps the JSON default instead of dropping it. Any
    /// non-success status fails with [`ApiError::Status`], carrying the
    /// response text or `HTTP <status>` when the body is empty.
    pub async fn call<T>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for name in options.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in options.headers.iter() {
            headers.append(name.clone(), value.clone());
        }

        let response = self
            .send(
                path,
                RequestOptions {
                    headers,
                    ..options
                },
            )
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Events API answered {} for {}", status, path);
            return Err(ApiError::from_status(status, &body));
        }

        decode_json(response).await
    }

    /// Issue a single request exactly as described by `options`
    pub(crate) async fn send(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, ApiError> {
        let url = self.url_for(path)?;
        debug!("Calling events API: {} {}", options.method, url);

        let mut request = self
            .client
            .request(options.method, url)
            .headers(options.headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }

        request.send().await.map_err(|e| {
            warn!("Events API request to {} failed: {}", path, e);
            ApiError::Transport(e)
        })
    }
}

/// Decode a successful response body into `T`
pub(crate) async fn decode_json<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
