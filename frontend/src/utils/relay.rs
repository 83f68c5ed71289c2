use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;
use web_sys::FormData;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayBody {
    /// Sent as `multipart/form-data`; the browser picks the boundary.
    Multipart(Vec<(String, String)>),
    /// Already `application/x-www-form-urlencoded`.
    UrlEncoded(String),
}

/// One outbound POST, independent of how it is transported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayRequest {
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: RelayBody,
}

impl RelayRequest {
    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// Sends a request and reports the HTTP status.
#[async_trait(?Send)]
pub trait Relay {
    async fn post(&self, request: RelayRequest) -> Result<u16, RelayError>;
}

#[async_trait(?Send)]
impl<R: Relay + ?Sized> Relay for std::rc::Rc<R> {
    async fn post(&self, request: RelayRequest) -> Result<u16, RelayError> {
        (**self).post(request).await
    }
}

/// `fetch`-backed relay.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchRelay;

fn form_data(fields: &[(String, String)]) -> Result<FormData, RelayError> {
    let data = FormData::new().map_err(|e| RelayError::Encode(format!("{:?}", e)))?;
    for (key, value) in fields {
        data.append_with_str(key, value)
            .map_err(|e| RelayError::Encode(format!("{:?}", e)))?;
    }
    Ok(data)
}

#[async_trait(?Send)]
impl Relay for FetchRelay {
    async fn post(&self, request: RelayRequest) -> Result<u16, RelayError> {
        let mut builder = Request::post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let builder = match request.body {
            RelayBody::Multipart(fields) => builder.body(form_data(&fields)?),
            RelayBody::UrlEncoded(body) => builder.body(body),
        };
        let response = builder
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;
        Ok(response.status())
    }
}
