use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Server configuration, read-only after startup. Each connection task gets
/// its own clone; there is no shared mutable state.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base directory all request paths are resolved against.
    pub document_root: PathBuf,
    pub port: u16,
    pub tuning: Tuning,
}

/// Tuning knobs the positional CLI does not cover, loaded from an optional
/// YAML file named by the `STATICD_CONFIG` environment variable.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Tuning {
    /// Deflate-compress response bodies and advertise Content-Encoding.
    pub compress: bool,
    /// Transport read chunk size for the line assembler.
    pub read_buffer_size: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            compress: false,
            read_buffer_size: 1024,
        }
    }
}

impl Config {
    /// Builds a config from the process argument list
    /// (`staticd <document-root> <port>`).
    pub fn from_args(args: &[String]) -> anyhow::Result<Self> {
        let [_, root, port] = args else {
            anyhow::bail!("expected exactly two arguments, got {}", args.len().saturating_sub(1));
        };

        let port: u16 = port
            .parse()
            .with_context(|| format!("invalid port {port:?}"))?;

        Ok(Self {
            document_root: PathBuf::from(root),
            port,
            tuning: Tuning::load(),
        })
    }
}

impl Tuning {
    /// Reads the tuning file if `STATICD_CONFIG` is set; falls back to the
    /// defaults on any problem rather than refusing to start.
    pub fn load() -> Self {
        let Ok(path) = std::env::var("STATICD_CONFIG") else {
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                tracing::warn!("Ignoring tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }
}
