//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.x server side of staticd: one request
//! parsed and answered per cycle, connection held open until the peer goes
//! away.
//!
//! # Architecture
//!
//! - **`connection`**: the line assembler and the per-connection state machine
//! - **`parser`**: turns one header block of lines into a structured request
//! - **`request`**: method, header and request types
//! - **`response`**: status codes and response assembly
//! - **`writer`**: serializes and writes a response to the client
//! - **`mime`**: fixed content-type table based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Assemble lines until the blank line
//!        └──────┬──────┘
//!               │ Header block complete
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse, resolve against the document root
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Peer still there → Reading (same connection)
//!               └─ EOF / fatal error → Closed
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
