//! # Errors
//!
//! meterview has two failure modes that matter to callers:
//! - a required field is missing (validation, always before any network call)
//! - the billing platform rejected the call (remote, passed through verbatim)
//!
//! Both are carried through `anyhow::Error` as a [`MeterError`] so services
//! can use `?` freely; the HTTP adapter downcasts them back when rendering.

use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for meterview core APIs.
pub type MeterResult<T> = std::result::Result<T, AnyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,   // 400
    Remote,       // upstream status, 502 when there is none
    GeneralError, // 500
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Remote => 502,
            ErrorKind::GeneralError => 500,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::Remote => "RemoteError",
            ErrorKind::GeneralError => "GeneralError",
        }
    }
}

/// What the billing platform sent back when it refused a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    /// `None` when the call never produced a response (DNS, TLS, connection reset).
    pub status: Option<u16>,
    pub body: String,
}

/// A structured meterview error that can live inside `anyhow::Error`.
#[derive(Debug)]
pub struct MeterError {
    pub kind: ErrorKind,
    pub message: String,
    pub upstream: Option<Upstream>,
    pub details: Option<String>,
    pub source: Option<AnyError>,
}

impl MeterError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            upstream: None,
            details: None,
            source: None,
        }
    }

    pub fn with_upstream(mut self, status: Option<u16>, body: impl Into<String>) -> Self {
        self.upstream = Some(Upstream {
            status,
            body: body.into(),
        });
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    /// HTTP status to answer with. Remote errors reuse the upstream status.
    pub fn code(&self) -> u16 {
        match (&self.kind, &self.upstream) {
            (ErrorKind::Remote, Some(Upstream { status: Some(s), .. })) => *s,
            (kind, _) => kind.status_code(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    /// Convert into `anyhow::Error` so it flows through `?`.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Find a `MeterError` anywhere in an `anyhow` chain.
    pub fn from_anyhow(err: &AnyError) -> Option<&MeterError> {
        err.chain().find_map(|e| e.downcast_ref::<MeterError>())
    }

    /// A copy without the inner `source`, suitable for returning to clients.
    pub fn sanitize_for_client(&self) -> MeterError {
        MeterError {
            kind: self.kind,
            message: self.message.clone(),
            upstream: self.upstream.clone(),
            details: self.details.clone(),
            source: None,
        }
    }

    /// `{"error": message}` payload used for every non-passthrough error.
    pub fn to_json(&self) -> serde_json::Value {
        let mut base = serde_json::json!({ "error": self.message });
        if let Some(d) = &self.details {
            base["details"] = serde_json::Value::String(d.clone());
        }
        base
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, msg)
    }
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Remote, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
}

impl fmt::Display for MeterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for MeterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Convenience helper for "bail with MeterError".
#[macro_export]
macro_rules! bail_meter {
    ($ctor:ident, $msg:expr) => {
        return Err($crate::errors::MeterError::$ctor($msg).into_anyhow());
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::MeterError::$ctor(format!($fmt, $($arg)*)).into_anyhow());
    };
}
