use std::io::{self, Write};

use flate2::Compression;
use flate2::write::DeflateEncoder;

/// Deflates a body at best compression.
///
/// The encoder owns its output buffer, so incompressible input that expands
/// comes back whole rather than truncated to the source length.
pub fn deflate(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(bytes)?;
    encoder.finish()
}
