use bytes::{Buf, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::config::Config;
use crate::files::resolver;
use crate::http::parser::parse_header_block;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Assembles CRLF-terminated lines from an incremental byte stream.
///
/// Incoming bytes accumulate in a growable buffer; each `next_line` call
/// hands out the text up to the next CR-LF pair, without the terminator.
/// A CR not followed by LF is ordinary line content, as is a bare LF.
/// The same assembler serves every request cycle on a connection; consumed
/// bytes are split off the front of the buffer, so no per-cycle reset is
/// needed.
pub struct LineAssembler {
    buffer: BytesMut,
    read_chunk: usize,
}

impl LineAssembler {
    pub fn new(read_chunk: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(4096),
            read_chunk,
        }
    }

    /// Returns the next line, or `None` once the peer has gone away.
    ///
    /// End-of-stream (and any read error) before a terminator is a
    /// disconnect, not a protocol error; a partially assembled line is
    /// discarded with the connection.
    pub async fn next_line<S>(&mut self, stream: &mut S) -> anyhow::Result<Option<String>>
    where
        S: AsyncRead + Unpin,
    {
        loop {
            if let Some(pos) = self.buffer.windows(2).position(|w| w == b"\r\n") {
                let line = self.buffer.split_to(pos);
                self.buffer.advance(2);

                let line = std::str::from_utf8(&line)
                    .map_err(|_| anyhow::anyhow!("header line is not valid UTF-8"))?
                    .to_string();
                return Ok(Some(line));
            }

            self.buffer.reserve(self.read_chunk);
            match stream.read_buf(&mut self.buffer).await {
                Ok(0) | Err(_) => return Ok(None),
                Ok(_) => {}
            }
        }
    }

    /// Collects the lines of one header block, up to and excluding the blank
    /// line that ends it. Stray blank lines before the request line are
    /// skipped. `None` means the peer disconnected first.
    pub async fn read_header_block<S>(&mut self, stream: &mut S) -> anyhow::Result<Option<Vec<String>>>
    where
        S: AsyncRead + Unpin,
    {
        let mut lines = Vec::new();

        loop {
            match self.next_line(stream).await? {
                None => return Ok(None),
                Some(line) => {
                    if line.is_empty() {
                        if lines.is_empty() {
                            continue;
                        }
                        return Ok(Some(lines));
                    }
                    lines.push(line);
                }
            }
        }
    }
}

pub struct Connection<S> {
    stream: S,
    assembler: LineAssembler,
    config: Config,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, config: Config) -> Self {
        let assembler = LineAssembler::new(config.tuning.read_buffer_size);
        Self {
            stream,
            assembler,
            config,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection until the peer disconnects or a fatal local
    /// error occurs. Requests are handled strictly in arrival order, one
    /// response completed before the next assembly cycle begins.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Processing(req);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(req) => {
                    tracing::debug!(
                        "{} {} HTTP/{} ({} headers)",
                        req.method.as_str(),
                        req.path,
                        req.version,
                        req.headers.len()
                    );

                    let resolved = resolver::resolve(&self.config.document_root, req).await?;
                    tracing::debug!(
                        "Resolved {} -> {} ({} bytes, status {})",
                        req.path,
                        resolved.path.display(),
                        resolved.content_length(),
                        resolved.status.as_u16()
                    );

                    let response = Response::from_resolved(resolved, self.config.tuning.compress)?;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // one request-response cycle done; wait for the next
                    self.state = ConnectionState::Reading;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let Some(lines) = self.assembler.read_header_block(&mut self.stream).await? else {
            return Ok(None);
        };

        match parse_header_block(&lines) {
            Ok(req) => Ok(Some(req)),
            Err(e) => Err(anyhow::anyhow!("HTTP parse error: {:?}", e)),
        }
    }
}
