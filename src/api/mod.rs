//! Client for the backend REST API (`<API_URL>/slides...`).

pub mod cache;

use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Method, Response, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::errors::AppError;
use cache::{CacheMode, FetchCache};

/// A backend path built from static parts and caller-supplied segments.
/// Segments are percent-encoded when turned into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    pub fn slides() -> Self {
        Endpoint {
            segments: vec!["slides".to_string()],
            query: Vec::new(),
        }
    }

    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Path relative to the API root, e.g. `/slides?page=2`. Used as the cache key.
    pub fn path(&self) -> String {
        let mut path = format!("/{}", self.segments.join("/"));
        if !self.query.is_empty() {
            let query: Vec<String> = self.query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            path.push('?');
            path.push_str(&query.join("&"));
        }
        path
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
    cache: FetchCache,
}

impl ApiClient {
    pub fn new(api_url: &str) -> Result<Self, AppError> {
        let base = Url::parse(api_url)
            .map_err(|e| AppError::Config(format!("Invalid API URL '{api_url}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(AppError::Config(format!("API URL '{api_url}' cannot carry a path")));
        }
        Ok(ApiClient {
            http: Client::new(),
            base,
            cache: FetchCache::default(),
        })
    }

    pub fn url(&self, endpoint: &Endpoint) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(&endpoint.segments);
        }
        if !endpoint.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(endpoint.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    /// Invalidation signal: the next read under `route` goes to the backend.
    pub fn revalidate_path(&self, route: &str) {
        self.cache.revalidate_path(route);
    }

    /// GET a JSON body. A non-success status yields `Ok(None)`; transport and
    /// decoding failures are errors.
    pub async fn get_json(&self, endpoint: &Endpoint, mode: CacheMode) -> Result<Option<Value>, AppError> {
        let key = endpoint.path();
        if mode == CacheMode::ForceCache {
            if let Some(body) = self.cache.get(&key) {
                log::debug!("GET {key} served from cache");
                return Ok(Some(body));
            }
        }

        let mut request = self.http.get(self.url(endpoint));
        if let Some(directive) = mode.directive() {
            request = request.header(CACHE_CONTROL, directive);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {key} returned {status}");
            return Ok(None);
        }

        let body: Value = response.json().await?;
        if mode == CacheMode::ForceCache {
            self.cache.insert(key, body.clone());
        }
        Ok(Some(body))
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint, mode: CacheMode) -> Result<Option<T>, AppError> {
        match self.get_json(endpoint, mode).await? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        access_token: &str,
        body: &B,
    ) -> Result<Response, AppError> {
        let response = self
            .http
            .request(method, self.url(endpoint))
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    pub async fn send_multipart(
        &self,
        endpoint: &Endpoint,
        access_token: &str,
        form: multipart::Form,
    ) -> Result<Response, AppError> {
        let response = self
            .http
            .post(self.url(endpoint))
            .bearer_auth(access_token)
            .multipart(form)
            .send()
            .await?;
        Ok(response)
    }
}

/// Pull the backend's error message out of a failed response body.
/// Accepts `{"error":{"message":..}}`, `{"message":..}` and `{"error":".."}`.
pub async fn error_message(response: Response) -> Option<String> {
    let body: Value = response.json().await.ok()?;
    body.pointer("/error/message")
        .or_else(|| body.get("message"))
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
