use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use rfetch_common::{Config, Result, RfetchError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::options::{Credentials, FetchOptions};
use crate::validation::validate_url;

/// Builds the transport client for a single invocation.
fn build_http_client(config: &Config) -> Result<Client> {
    let mut headers = HeaderMap::new();
    let user_agent: HeaderValue = config.user_agent.parse().map_err(|e| {
        RfetchError::Config(format!(
            "Invalid user agent '{}': {e}",
            config.user_agent
        ))
    })?;
    headers.insert(USER_AGENT, user_agent);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Client::builder()
        .default_headers(headers)
        .connect_timeout(config.connect_timeout)
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .build()
        .map_err(RfetchError::from)
}

/// Translates caller options into a request, forwarding every field as
/// given. Nothing here inspects or rewrites the caller's values.
fn apply_options(
    client: &Client,
    url: &str,
    options: Option<&FetchOptions>,
) -> Result<RequestBuilder> {
    let method = options
        .and_then(|opts| opts.method.clone())
        .unwrap_or(Method::GET);
    let mut request = client.request(method, url);

    if let Some(opts) = options {
        for (name, value) in &opts.headers {
            let header_name: HeaderName = name.parse().map_err(|e| {
                RfetchError::Validation(format!("Invalid header name '{name}': {e}"))
            })?;
            let header_value: HeaderValue = value.parse().map_err(|e| {
                RfetchError::Validation(format!("Invalid value for header '{name}': {e}"))
            })?;
            request = request.header(header_name, header_value);
        }
        if let Some(body) = &opts.body {
            request = request.json(body);
        }
        match &opts.credentials {
            Some(Credentials::Bearer(token)) => {
                request = request.bearer_auth(token);
            }
            Some(Credentials::Basic { user, password }) => {
                request = request.basic_auth(user, password.as_deref());
            }
            None => {}
        }
        if let Some(timeout) = opts.timeout {
            request = request.timeout(timeout);
        }
    }

    Ok(request)
}

/// Fetches `url` and deserializes the response body into `T`.
///
/// Exactly one request is issued per call; nothing is cached, retried, or
/// shared between invocations. Only a status of exactly 200 takes the
/// success path: any other status, including other 2xx codes, is read as an
/// error envelope (`{"message": ...}`) and surfaced as `RfetchError::Api`.
/// `T` is trusted, not checked -- the body is deserialized structurally and
/// never validated against a schema beyond what serde requires.
pub async fn fetch_resource<T: DeserializeOwned>(
    url: &str,
    options: Option<&FetchOptions>,
) -> Result<T> {
    let config = Config::load()?;
    fetch_resource_with_config(url, options, &config).await
}

/// Same as [`fetch_resource`] with a caller-supplied transport configuration.
pub async fn fetch_resource_with_config<T: DeserializeOwned>(
    url: &str,
    options: Option<&FetchOptions>,
    config: &Config,
) -> Result<T> {
    validate_url(url)?;
    debug!("Fetching resource from {}", url);

    let client = build_http_client(config)?;
    let request = apply_options(&client, url, options)?;

    let response = request.send().await.map_err(|e| {
        error!("HTTP request failed for {}: {}", url, e);
        RfetchError::from(e)
    })?;

    // The status alone decides which parse strategy the body gets.
    let status = response.status();
    debug!("Received HTTP status {} for {}", status, url);

    if status != StatusCode::OK {
        return Err(read_error_envelope(response, status, url).await);
    }

    let text = response.text().await?;
    let resource = serde_json::from_str::<T>(&text).map_err(|e| {
        error!("Failed to parse response body from {}: {}", url, e);
        RfetchError::from(e)
    })?;
    Ok(resource)
}

/// Reads a non-200 response body as an error envelope and produces the
/// failure to surface. A body that is not valid JSON propagates as the
/// decoder's own parse error; a JSON body without a `message` field falls
/// back to the status line.
async fn read_error_envelope(response: Response, status: StatusCode, url: &str) -> RfetchError {
    error!(
        "HTTP request to {} returned non-200 status: {}",
        url, status
    );
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read error response body from {}: {}", url, e);
            return RfetchError::from(e);
        }
    };
    let envelope = match serde_json::from_str::<Value>(&text) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Error response body from {} is not valid JSON: {}", url, e);
            return RfetchError::from(e);
        }
    };
    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP status {status} from {url}"));
    RfetchError::Api {
        status: status.as_u16(),
        message,
    }
}
