//! Ureq-based transport backend (blocking).
//!
//! A fresh agent is built for every call, so no connection outlives the
//! request that opened it.

use std::io;

use ureq::tls::TlsConfig;
use ureq::{Agent, Proxy, RequestBuilder};

use super::{Transport, TransportResponse};
use crate::error::{ErrorCode, TransportError};
use crate::http::headers::split_line;
use crate::http::{PreparedRequest, RequestMethod};

/// A [`Transport`] implementation backed by [`ureq`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UreqTransport;

impl UreqTransport {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Transport for UreqTransport {
    fn name(&self) -> &'static str {
        "ureq"
    }

    fn send(&self, request: &PreparedRequest) -> Result<TransportResponse, TransportError> {
        ensure_supported_scheme(&request.url)?;
        let agent = build_agent(request)?;
        let url = request.url.as_str();
        let body = request.body.as_deref().unwrap_or_default();

        let result = match request.method {
            RequestMethod::Get => with_headers(agent.get(url), request).call(),
            RequestMethod::Post => with_headers(agent.post(url), request).send(body),
            RequestMethod::Put => with_headers(agent.put(url), request).send(body),
            RequestMethod::Patch => with_headers(agent.patch(url), request).send(body),
            RequestMethod::Delete if body.is_empty() => {
                with_headers(agent.delete(url), request).call()
            }
            RequestMethod::Delete => with_headers(agent.delete(url), request)
                .force_send_body()
                .send(body),
        };

        let mut response = result.map_err(classify)?;
        let status = response.status().as_u16();
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(|e| classify(e).with_status(status))?;

        Ok(TransportResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

fn ensure_supported_scheme(url: &str) -> Result<(), TransportError> {
    let scheme = url.split_once("://").map(|(scheme, _)| scheme);
    match scheme {
        Some(s) if s.eq_ignore_ascii_case("http") || s.eq_ignore_ascii_case("https") => Ok(()),
        _ => Err(TransportError::new(
            ErrorCode::UnsupportedProtocol,
            format!("protocol not supported: {}", scheme.unwrap_or(url)),
        )),
    }
}

fn build_agent(request: &PreparedRequest) -> Result<Agent, TransportError> {
    let tls = TlsConfig::builder()
        .disable_verification(!request.ssl_verify)
        .build();

    let mut config = Agent::config_builder()
        // Statuses are data for the caller, not transport failures.
        .http_status_as_error(false)
        .max_redirects(request.max_redirects)
        .tls_config(tls);

    if let Some(total) = request.timeouts.total {
        config = config.timeout_global(Some(total));
    }
    if let Some(connect) = request.timeouts.connect {
        config = config.timeout_connect(Some(connect));
    }
    if let Some(settings) = &request.proxy {
        let proxy = Proxy::new(&settings.transport_url()).map_err(|e| {
            TransportError::new(ErrorCode::CouldntResolveProxy, e.to_string())
        })?;
        config = config.proxy(Some(proxy));
    }

    Ok(config.build().new_agent())
}

fn with_headers<B>(mut builder: RequestBuilder<B>, request: &PreparedRequest) -> RequestBuilder<B> {
    for line in &request.header_lines {
        match split_line(line) {
            Some((name, value)) => builder = builder.header(name, value),
            None => tracing::warn!(
                target: "requests::transport",
                line = %line,
                "Dropping header line without a name"
            ),
        }
    }
    if let Some(authorization) = &request.authorization {
        builder = builder.header("authorization", authorization.clone());
    }
    if let Some(user_agent) = &request.user_agent {
        builder = builder.header("user-agent", user_agent.as_str());
    }
    builder
}

/// Map a ureq error onto the transport error table.
fn classify(error: ureq::Error) -> TransportError {
    let message = error.to_string();
    let code = match &error {
        ureq::Error::Timeout(_) => ErrorCode::OperationTimedOut,
        ureq::Error::HostNotFound => ErrorCode::CouldntResolveHost,
        ureq::Error::ConnectionFailed => ErrorCode::CouldntConnect,
        ureq::Error::Io(e) => classify_io(e),
        ureq::Error::TooManyRedirects => ErrorCode::TooManyRedirects,
        ureq::Error::RedirectFailed | ureq::Error::BadUri(_) => ErrorCode::UrlMalformat,
        ureq::Error::Http(_) => ErrorCode::BadFunctionArgument,
        ureq::Error::InvalidProxyUrl => ErrorCode::CouldntResolveProxy,
        ureq::Error::ConnectProxyFailed(_) => ErrorCode::ProxyHandshake,
        ureq::Error::Tls(_) | ureq::Error::TlsRequired => ErrorCode::SslConnectError,
        ureq::Error::BodyExceedsLimit(_) => ErrorCode::FilesizeExceeded,
        ureq::Error::Protocol(_) => ErrorCode::WeirdServerReply,
        _ if message.contains("certificate") => ErrorCode::PeerFailedVerification,
        _ if message.to_ascii_lowercase().contains("tls") => ErrorCode::SslConnectError,
        _ => ErrorCode::RecvError,
    };
    TransportError::new(code, message)
}

fn classify_io(error: &io::Error) -> ErrorCode {
    match error.kind() {
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::AddrNotAvailable
        | io::ErrorKind::NetworkUnreachable
        | io::ErrorKind::HostUnreachable => ErrorCode::CouldntConnect,
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ErrorCode::OperationTimedOut,
        io::ErrorKind::BrokenPipe => ErrorCode::SendError,
        // The system resolver reports lookup failures as uncategorized I/O errors.
        _ if error.to_string().contains("lookup") => ErrorCode::CouldntResolveHost,
        _ => ErrorCode::RecvError,
    }
}
