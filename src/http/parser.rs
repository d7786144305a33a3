use crate::http::request::{Header, Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No request line where one was expected.
    EmptyBlock,
    /// Request line not of the form `METHOD SP PATH SP HTTP/X.Y`.
    InvalidRequestLine,
    /// Version token missing the `HTTP/` prefix or not a number.
    InvalidVersion,
}

/// Parses one header block (terminating blank line already removed) into a
/// request. Leading empty lines are skipped. An unrecognized method is not an
/// error here; the resolver answers it with the 400 page.
pub fn parse_header_block(lines: &[String]) -> Result<Request, ParseError> {
    let mut lines = lines.iter().skip_while(|line| line.is_empty());

    let request_line = lines.next().ok_or(ParseError::EmptyBlock)?;
    let mut parts = request_line.split_whitespace();

    let method_token = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let path = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let protocol = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    let version = protocol
        .strip_prefix("HTTP/")
        .ok_or(ParseError::InvalidVersion)?
        .parse::<f32>()
        .map_err(|_| ParseError::InvalidVersion)?;

    let method = Method::from_token(method_token);

    let mut headers = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }

        // Split on the first colon only; later colons belong to the value.
        let (name, value) = match line.split_once(':') {
            Some((name, value)) => (name.to_string(), value.trim().to_string()),
            None => (line.clone(), String::new()),
        };

        headers.push(Header { name, value });
    }

    Ok(Request {
        method,
        path: path.to_string(),
        version,
        headers,
    })
}
