use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::http::request::Request;
use crate::http::response::StatusCode;

const BAD_REQUEST_PAGE: &str = "400.html";
const FORBIDDEN_PAGE: &str = "403.html";
const NOT_FOUND_PAGE: &str = "404.html";
const INDEX_PAGE: &str = "index.html";

/// Outcome of resolving a request against the document root.
///
/// Produced once and never mutated afterwards. `path` is the file actually
/// read, which for error statuses is the matching fallback page.
#[derive(Debug)]
pub struct Resolved {
    pub status: StatusCode,
    pub path: PathBuf,
    pub body: Vec<u8>,
}

impl Resolved {
    /// Byte length of the resource before any compression.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}

/// Maps a request to file bytes under `root`.
///
/// Rules, in order: an unrecognized method gets the 400 page without any
/// resolution; a path containing `../` gets the 403 page; a directory-form
/// path gets its `index.html`; anything unreadable gets the 404 page.
/// Errors only when the fallback page itself cannot be read, which the
/// caller treats as fatal for the connection.
pub async fn resolve(root: &Path, request: &Request) -> anyhow::Result<Resolved> {
    if !request.method.is_recognized() {
        return fallback(root, StatusCode::BadRequest, BAD_REQUEST_PAGE).await;
    }

    let target = root.join(request.path.trim_start_matches('/'));

    // Substring check only, no canonicalization; the root itself is trusted
    // not to contain `../`.
    if target.to_string_lossy().contains("../") {
        return fallback(root, StatusCode::Forbidden, FORBIDDEN_PAGE).await;
    }

    let target = if request.path.ends_with('/') {
        target.join(INDEX_PAGE)
    } else {
        target
    };

    match tokio::fs::read(&target).await {
        Ok(body) => Ok(Resolved {
            status: StatusCode::Ok,
            path: target,
            body,
        }),
        Err(e) => {
            tracing::debug!("Could not read {}: {}", target.display(), e);
            fallback(root, StatusCode::NotFound, NOT_FOUND_PAGE).await
        }
    }
}

async fn fallback(root: &Path, status: StatusCode, page: &str) -> anyhow::Result<Resolved> {
    let path = root.join(page);
    let body = tokio::fs::read(&path)
        .await
        .with_context(|| format!("missing fallback page {}", path.display()))?;

    Ok(Resolved { status, path, body })
}
