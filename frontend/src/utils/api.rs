use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;
use crate::config;
use crate::error::ApiError;

/// Entry point for calls to the shop API. Every request is sent to
/// `config::get_backend_url()` with cookies included.
pub struct Api;

/// Request builder that remembers the query it was given so URLs can be
/// assembled before the underlying `gloo_net` request exists.
pub struct RequestWrapper {
    method: &'static str,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestWrapper {
    fn new(path: &str, method: &'static str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter; values are percent-encoded in `url()`.
    pub fn query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }

    /// Set the request body as JSON
    pub fn json<T: Serialize>(mut self, data: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_string(data)?);
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        Ok(self)
    }

    /// Full URL including the backend prefix and encoded query string.
    pub fn url(&self) -> String {
        let mut url = format!("{}{}", config::get_backend_url(), self.path);
        if !self.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(self.query.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }
        url
    }

    fn build(self) -> Request {
        let url = self.url();
        let mut request = match self.method {
            "POST" => Request::post(&url),
            "DELETE" => Request::delete(&url),
            "PUT" => Request::put(&url),
            _ => Request::get(&url),
        }
        .credentials(RequestCredentials::Include);
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        if let Some(body) = self.body {
            request = request.body(body);
        }
        request
    }

    /// Send the request. Non-2xx responses are returned as-is.
    pub async fn send(self) -> Result<Response, ApiError> {
        let method = self.method;
        let path = self.path.clone();
        let response = self.build().send().await.map_err(|e| {
            gloo_console::log!("API request failed:", method, &path, e.to_string());
            ApiError::from(e)
        })?;
        Ok(response)
    }

    /// Send the request and decode a 2xx JSON body; any other status becomes
    /// `ApiError::Status`.
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let response = self.send().await?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Api {
    /// Create a GET request with automatic credentials and backend URL
    pub fn get(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "GET")
    }

    /// Create a POST request with automatic credentials and backend URL
    pub fn post(path: &str) -> RequestWrapper {
        RequestWrapper::new(path, "POST")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_query_values() {
        let request = Api::get("/api/subsidy").query("telecom", "LG U+");
        assert_eq!(
            request.url(),
            format!("{}/api/subsidy?telecom=LG+U%2B", config::get_backend_url())
        );
    }

    #[test]
    fn url_without_query_has_no_separator() {
        let request = Api::get("/api/auth/status");
        assert!(!request.url().contains('?'));
    }

    #[test]
    fn json_body_sets_content_type() {
        let request = Api::post("/api/login")
            .json(&serde_json::json!({ "email": "a@b.c" }))
            .unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"email":"a@b.c"}"#));
        assert!(request
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/json"));
    }
}
