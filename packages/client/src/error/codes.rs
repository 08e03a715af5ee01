//! Transport error numbers and their descriptive text
//!
//! Numbers follow the libcurl `CURLcode` numbering so callers that already
//! branch on those values keep working regardless of the backend in use.

use std::fmt;

/// Transport-level failure classes with stable numeric identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The URL scheme is not handled by the transport.
    UnsupportedProtocol,
    /// The URL (or a redirect target) is malformed.
    UrlMalformat,
    /// The proxy address could not be resolved or used.
    CouldntResolveProxy,
    /// DNS lookup of the remote host failed.
    CouldntResolveHost,
    /// The TCP connection could not be established.
    CouldntConnect,
    /// The server reply could not be parsed as HTTP.
    WeirdServerReply,
    /// The total or connect timeout elapsed.
    OperationTimedOut,
    /// The TLS handshake failed.
    SslConnectError,
    /// The transport rejected a request part, such as a header line.
    BadFunctionArgument,
    /// The redirect limit was exceeded.
    TooManyRedirects,
    /// Sending the request to the peer failed.
    SendError,
    /// Receiving the response from the peer failed.
    RecvError,
    /// The peer certificate did not verify.
    PeerFailedVerification,
    /// The response body exceeded the configured limit.
    FilesizeExceeded,
    /// The proxy refused or broke the handshake.
    ProxyHandshake,
}

impl ErrorCode {
    /// Every known code, in numeric order.
    pub const ALL: [ErrorCode; 15] = [
        ErrorCode::UnsupportedProtocol,
        ErrorCode::UrlMalformat,
        ErrorCode::CouldntResolveProxy,
        ErrorCode::CouldntResolveHost,
        ErrorCode::CouldntConnect,
        ErrorCode::WeirdServerReply,
        ErrorCode::OperationTimedOut,
        ErrorCode::SslConnectError,
        ErrorCode::BadFunctionArgument,
        ErrorCode::TooManyRedirects,
        ErrorCode::SendError,
        ErrorCode::RecvError,
        ErrorCode::PeerFailedVerification,
        ErrorCode::FilesizeExceeded,
        ErrorCode::ProxyHandshake,
    ];

    /// The numeric identifier reported through `error_number`.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            ErrorCode::UnsupportedProtocol => 1,
            ErrorCode::UrlMalformat => 3,
            ErrorCode::CouldntResolveProxy => 5,
            ErrorCode::CouldntResolveHost => 6,
            ErrorCode::CouldntConnect => 7,
            ErrorCode::WeirdServerReply => 8,
            ErrorCode::OperationTimedOut => 28,
            ErrorCode::SslConnectError => 35,
            ErrorCode::BadFunctionArgument => 43,
            ErrorCode::TooManyRedirects => 47,
            ErrorCode::SendError => 55,
            ErrorCode::RecvError => 56,
            ErrorCode::PeerFailedVerification => 60,
            ErrorCode::FilesizeExceeded => 63,
            ErrorCode::ProxyHandshake => 97,
        }
    }

    /// Fixed descriptive text for this code.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::UnsupportedProtocol => "Unsupported protocol",
            ErrorCode::UrlMalformat => "URL using bad/illegal format or missing URL",
            ErrorCode::CouldntResolveProxy => "Couldn't resolve proxy name",
            ErrorCode::CouldntResolveHost => "Couldn't resolve host name",
            ErrorCode::CouldntConnect => "Couldn't connect to server",
            ErrorCode::WeirdServerReply => "Weird server reply",
            ErrorCode::OperationTimedOut => "Timeout was reached",
            ErrorCode::SslConnectError => "SSL connect error",
            ErrorCode::BadFunctionArgument => "A libcurl function was given a bad argument",
            ErrorCode::TooManyRedirects => "Number of redirects hit maximum amount",
            ErrorCode::SendError => "Failed sending data to the peer",
            ErrorCode::RecvError => "Failure when receiving data from the peer",
            ErrorCode::PeerFailedVerification => {
                "SSL peer certificate or SSH remote key was not OK"
            }
            ErrorCode::FilesizeExceeded => "Maximum file size exceeded",
            ErrorCode::ProxyHandshake => "Proxy handshake error",
        }
    }

    /// Look up a code by its numeric identifier.
    #[must_use]
    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.number() == number)
    }

    /// Human-readable text for any error number, including `0` and
    /// numbers this table does not know.
    #[must_use]
    pub fn describe(number: u32) -> &'static str {
        if number == 0 {
            return "No error";
        }
        Self::from_number(number).map_or("Unknown error", Self::description)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A failure during network transmission, carried as data rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    /// Classified failure.
    pub code: ErrorCode,
    /// Backend-specific detail, never empty.
    pub message: String,
    /// HTTP status if a response head arrived before the failure, else `0`.
    pub status: u16,
}

impl TransportError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            code.description().to_owned()
        } else {
            message
        };
        Self {
            code,
            message,
            status: 0,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}
