use http::StatusCode;
use reqwest::{Url, blocking::Client};
use serde::de::DeserializeOwned;

use crate::{api::ClientConfig, prelude::*};

/// GET request relative to the API base URL.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub segments: Vec<String>,

    /// Already encoded query string, empty when there is none.
    pub query: String,
}

impl Request {
    pub fn new<S: AsRef<str>>(segments: &[S], query: String) -> Self {
        Self { segments: segments.iter().map(|segment| segment.as_ref().to_owned()).collect(), query }
    }

    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

#[must_use]
#[derive(Clone, Debug)]
pub struct Response {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    pub fn error_for_status(self) -> Result<Self> {
        match self.status {
            status if status.is_success() => Ok(self),
            status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
                Err(Error::Auth { status, url: self.url })
            }
            status => Err(Error::NotFound { status, url: self.url }),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body)
            .map_err(|source| Error::Decode { url: self.url.clone(), source })
    }
}

/// Performs a single GET. Implementations never retry.
pub trait Transport {
    fn get(&self, request: &Request) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, request: &Request) -> Result<Response> {
        (**self).get(request)
    }
}

/// Blocking HTTP transport with Basic authentication.
pub struct HttpTransport {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    #[instrument(skip_all, fields(base_url = %config.base_url))]
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|error| {
            Error::InvalidArgument(format!("invalid base URL `{}`: {error}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidArgument(format!("`{base_url}` cannot be a base URL")));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, base_url, api_key: config.api_key.clone() })
    }

    fn url(&self, request: &Request) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidArgument(format!("`{}` cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(&request.segments);
        if !request.query.is_empty() {
            url.set_query(Some(&request.query));
        }
        Ok(url)
    }
}

impl Transport for HttpTransport {
    fn get(&self, request: &Request) -> Result<Response> {
        let url = self.url(request)?;
        let response = self.client.get(url.clone()).basic_auth(&self.api_key, Some("")).send()?;
        let status = response.status();
        let body = response.text()?;
        Ok(Response { url: url.into(), status, body })
    }
}
