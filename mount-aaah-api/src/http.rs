use http::{Method, StatusCode};
use serde::de::DeserializeOwned;

use thiserror::Error;

/// A transport-level failure: the request could not be sent or the body could not be decoded.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error {
    #[cfg(not(target_family = "wasm"))]
    #[from]
    error: reqwest::Error,
    #[cfg(target_family = "wasm")]
    #[from]
    error: reqwasm::Error,
}

#[derive(Clone, Debug, Default)]
pub struct Client {
    #[cfg(not(target_family = "wasm"))]
    inner: native::InnerClient,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerClient,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send(&self, request: Request) -> Result<Response, Error> {
        self.inner.send(request).await
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    uri: String,
    method: Method,
    headers: Vec<(&'static str, String)>,
}

impl Request {
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            uri: String::new(),
            method: Method::GET,
            headers: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    /// Creates a new `RequestBuilder` rooted at `base`.
    pub fn new(base: &str) -> Self {
        Self {
            inner: Request {
                uri: base.trim_end_matches('/').to_owned(),
                ..Default::default()
            },
        }
    }

    /// Sets the request method to `GET`.
    pub fn get(mut self) -> Self {
        self.inner.method = Method::GET;
        self
    }

    /// Appends `uri` to the current request uri.
    pub fn uri(mut self, uri: &str) -> Self {
        self.inner.uri.push_str(uri);
        self
    }

    /// Adds an header to the request.
    pub fn header<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: ToString,
    {
        self.inner.headers.push((key, value.to_string()));
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

impl From<RequestBuilder> for Request {
    fn from(req: RequestBuilder) -> Self {
        req.inner
    }
}

#[derive(Debug)]
pub struct Response {
    #[cfg(not(target_family = "wasm"))]
    inner: native::InnerResponse,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerResponse,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns `true` if the response contains a 2xx status code.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    pub async fn json<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.inner.json().await
    }
}

#[cfg(not(target_family = "wasm"))]
mod native {
    use super::{Error, Request, Response};

    use http::StatusCode;
    use serde::de::DeserializeOwned;

    #[derive(Clone, Debug, Default)]
    pub struct InnerClient {
        inner: reqwest::Client,
    }

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response, Error> {
            let mut req = self.inner.request(request.method, &request.uri);

            for (key, value) in request.headers {
                req = req.header(key, value);
            }

            let resp = req.send().await?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(reqwest::Response);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            StatusCode::from_u16(self.0.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
        }

        pub async fn json<T>(self) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            Ok(self.0.json().await?)
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use super::{Error, Request, Response};

    use http::StatusCode;
    use serde::de::DeserializeOwned;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct InnerClient;

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response, Error> {
            // Only GET requests are ever built.
            let mut req = reqwasm::http::Request::new(&request.uri).method(reqwasm::http::Method::GET);

            for (key, value) in request.headers.iter() {
                req = req.header(key, value);
            }

            let resp = req.send().await?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(reqwasm::http::Response);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::BAD_GATEWAY)
        }

        pub async fn json<T>(self) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            Ok(self.0.json().await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::RequestBuilder;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new("https://example.com/")
            .get()
            .uri("/v1/games")
            .uri("?universeIds=1")
            .build();

        assert_eq!(req.uri(), "https://example.com/v1/games?universeIds=1");
        assert_eq!(req.method(), &Method::GET);
    }
}
