/// HTTP request methods.
///
/// GET, POST and HEAD are accepted; POST bodies are never read. Anything
/// else is carried verbatim in `Unrecognized` and answered with 400.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Get,
    Post,
    Head,
    /// A method token the server does not know, kept for diagnostics.
    Unrecognized(String),
}

impl Method {
    /// Maps a request-line token to a method. Case-sensitive, as the tokens
    /// are defined uppercase on the wire.
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "HEAD" => Method::Head,
            other => Method::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Head => "HEAD",
            Method::Unrecognized(token) => token,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Method::Unrecognized(_))
    }
}

/// A single request header, split once on the first colon. The value keeps
/// any further colons and is whitespace-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// A parsed HTTP request.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    /// Path exactly as received on the wire; rooting against the document
    /// root happens during resolution.
    pub path: String,
    /// Protocol version from the request line (e.g. 1.1).
    pub version: f32,
    /// Headers in arrival order.
    pub headers: Vec<Header>,
}

impl Request {
    /// Looks up a header value by name (case-insensitive in HTTP practice).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}
