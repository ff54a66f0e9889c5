use super::error::{ResolveError, Result};

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP used by the resolver.
///
/// Non-success statuses are returned as responses, not errors; only a
/// request that could not complete is an `Err`.
pub trait Transport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        (**self).get(url, query)
    }
}

/// Blocking `reqwest` client sending one fixed `User-Agent`. Timeouts are the
/// client's defaults.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ResolveError::Transport {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        tracing::debug!(url = %url, "GET");

        let failed = |e: reqwest::Error| ResolveError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).query(query).send().map_err(failed)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(failed)?.to_vec();

        tracing::debug!(url = %url, status, bytes = body.len(), "response");
        Ok(HttpResponse { status, body })
    }
}

/// GET `url` and return the body of a successful, non-empty response.
pub(crate) fn fetch(
    transport: &impl Transport,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Vec<u8>> {
    let response = transport.get(url, query)?;
    body_of(url, response)
}

pub(crate) fn body_of(url: &str, response: HttpResponse) -> Result<Vec<u8>> {
    match response.status {
        404 => Err(ResolveError::NotFound(url.to_string())),
        status if !response.is_success() => Err(ResolveError::Status {
            url: url.to_string(),
            status,
        }),
        _ if response.body.is_empty() => Err(ResolveError::NotFound(format!("empty body from {url}"))),
        _ => Ok(response.body),
    }
}

pub(crate) fn parse_json<D: serde::de::DeserializeOwned>(url: &str, body: &[u8]) -> Result<D> {
    serde_json::from_slice(body).map_err(|source| ResolveError::Parse {
        url: url.to_string(),
        source,
    })
}
