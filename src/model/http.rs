/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::{API_KEY_HEADER, CONTENT_TYPE_JSON, USER_AGENT};
use crate::error::AppError;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Thin client over the Base44 REST API.
///
/// Holds the configuration and a pooled `reqwest` client. Every call goes
/// through [`HttpClient::make_api_request`], which attaches the `api_key`
/// and `Content-Type` headers.
#[derive(Clone)]
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a client from configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to use
    /// * `Err(AppError)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.rest_api.timeout())
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL for an API path fragment.
    ///
    /// The fragment is always appended to the configured base URL, so the
    /// `api_key` header never leaves the configured host.
    #[must_use]
    pub fn url(&self, api_path: &str) -> String {
        let api_path = api_path.trim_start_matches('/');
        format!("{}/{}", self.config.rest_api.base_url, api_path)
    }

    /// Makes a request against `{base_url}/{api_path}`.
    ///
    /// For `GET`, `data` is sent as query parameters; for other methods as
    /// the JSON body. Returns the decoded JSON answer, or the failure as is.
    ///
    /// # Example
    /// ```ignore
    /// let trades: Value = client
    ///     .make_api_request("apps/APP/entities/Trade", Method::GET, None)
    ///     .await?;
    /// ```
    pub async fn make_api_request<T: DeserializeOwned>(
        &self,
        api_path: &str,
        method: Method,
        data: Option<&Value>,
    ) -> Result<T, AppError> {
        let url = self.url(api_path);
        let headers = vec![
            (API_KEY_HEADER, self.config.credentials.api_key.as_str()),
            ("Content-Type", CONTENT_TYPE_JSON),
        ];
        make_http_request(&self.http_client, method, &url, headers, data).await
    }

    /// `GET` request, the default method of [`HttpClient::make_api_request`]
    pub async fn get_api<T: DeserializeOwned>(
        &self,
        api_path: &str,
        params: Option<&Value>,
    ) -> Result<T, AppError> {
        self.make_api_request(api_path, Method::GET, params).await
    }

    /// `PUT` request with a JSON body
    pub async fn put_api<T: DeserializeOwned>(
        &self,
        api_path: &str,
        body: &Value,
    ) -> Result<T, AppError> {
        self.make_api_request(api_path, Method::PUT, Some(body)).await
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.rest_api.base_url)
            .field("app_id", &self.config.credentials.app_id)
            .finish()
    }
}

/// Makes a single HTTP request and decodes the JSON answer.
///
/// `data` is interpreted according to the method:
/// * `GET`: the JSON object is flattened into query parameters
///   (see [`query_pairs`]).
/// * anything else: the value is serialized as the JSON body. `None` sends
///   no body.
///
/// Any status outside 2xx/3xx is returned as [`AppError::HttpStatus`] with
/// the raw body attached. There is no retry.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `data` - Optional query parameters or body
///
/// # Example
///
/// ```ignore
/// let headers = vec![("api_key", "your-api-key"), ("Content-Type", "application/json")];
/// let trades: serde_json::Value = make_http_request(
///     &client,
///     Method::GET,
///     "https://app.base44.com/api/apps/APP/entities/Trade",
///     headers,
///     None,
/// ).await?;
/// ```
pub async fn make_http_request<T: DeserializeOwned>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    data: Option<&Value>,
) -> Result<T, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method.clone(), url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(d) = data {
        if method == Method::GET {
            request = request.query(&query_pairs(d)?);
        } else {
            request = request.json(d);
        }
    }

    let response = request.send().await?;
    let response = check_status(response).await?;
    parse_response(response).await
}

/// Passes 2xx and 3xx responses through, turns everything else into an error
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() || status.is_redirection() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::HttpStatus { status, body })
}

/// Decodes the body as JSON; an empty body decodes as `null`
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_slice(&bytes)?)
}

/// Flattens a JSON object into query parameters.
///
/// Strings are sent verbatim, numbers and booleans as their JSON text,
/// `null` entries are skipped, arrays repeat the key for each element and
/// nested objects are sent as JSON text. `null` data yields no parameters;
/// any other non-object value is rejected.
pub fn query_pairs(data: &Value) -> Result<Vec<(String, String)>, AppError> {
    let map = match data {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(AppError::InvalidInput(format!(
                "query parameters must be a JSON object, got {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    Ok(pairs)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
