//! Blocking transport backed by ureq.

use ureq::Agent;

use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Executes `HttpRequest` values with a ureq agent.
///
/// ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
/// responses come back as data and `ZoomClient` does the status check.
/// A fresh agent is configured per request because the timeout travels with
/// the request. DELETE requests carry their body when one was built.
#[derive(Debug, Clone, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for UreqTransport {
    type Error = ureq::Error;

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ureq::Error> {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(request.timeout))
            .build()
            .new_agent();

        let url = request.url.as_str();
        let headers = &request.headers;
        let body = request.body.as_deref();
        let payload = body.unwrap_or_default().as_bytes();

        let mut response = match (request.method, body) {
            (HttpMethod::Get, _) => with_headers(agent.get(url), headers).call(),
            (HttpMethod::Delete, None) => with_headers(agent.delete(url), headers).call(),
            (HttpMethod::Delete, Some(_)) => with_headers(agent.delete(url), headers)
                .force_send_body()
                .send(payload),
            (HttpMethod::Post, _) => with_headers(agent.post(url), headers).send(payload),
            (HttpMethod::Put, _) => with_headers(agent.put(url), headers).send(payload),
            (HttpMethod::Patch, _) => with_headers(agent.patch(url), headers).send(payload),
        }?;

        let status = response.status().as_u16();
        let response_headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // A body that is not UTF-8 still arrived with a status; it fails JSON
        // decoding later instead of failing the round-trip here.
        let bytes = response.body_mut().read_to_vec()?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(HttpResponse {
            status,
            headers: response_headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
