use crate::files::compress;
use crate::files::resolver::Resolved;
use crate::http::mime;

/// HTTP status codes the server can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// A complete response ready for serialization. Headers are a fixed set
/// (Content-Type, optional Content-Encoding, Content-Length) emitted in a
/// fixed order, so identical requests produce byte-identical responses.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub content_encoding: Option<&'static str>,
    pub body: Vec<u8>,
}

impl Response {
    /// Assembles the response for a resolved resource. With compression
    /// enabled the body is deflated and Content-Length reflects the
    /// compressed bytes actually transmitted.
    pub fn from_resolved(resolved: Resolved, compress_body: bool) -> anyhow::Result<Self> {
        let content_type = mime::content_type(&resolved.path);

        let (body, content_encoding) = if compress_body {
            (compress::deflate(&resolved.body)?, Some("deflate"))
        } else {
            (resolved.body, None)
        };

        Ok(Self {
            status: resolved.status,
            content_type,
            content_encoding,
            body,
        })
    }
}
