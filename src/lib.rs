//! staticd - Minimal HTTP/1.x Static File Daemon
//!
//! Core library for connection handling, request parsing and document-root
//! resource resolution.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
