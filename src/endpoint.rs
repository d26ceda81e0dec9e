//! Target endpoint resolution shared by every probe command.

use crate::ProbeError;

/// Host and port of the server under probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Resolve the `--host`/`--port` pair into a concrete endpoint.
    ///
    /// A `host:port` value overrides the separate `port`; the split happens
    /// at the first colon.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidPort`] when the embedded port does not
    /// parse as a `u16`.
    pub fn resolve(host: &str, port: u16) -> Result<Self, ProbeError> {
        match host.split_once(':') {
            Some((name, embedded)) => {
                let port = embedded
                    .parse::<u16>()
                    .map_err(|_| ProbeError::InvalidPort(embedded.to_owned()))?;
                Ok(Self {
                    host: name.to_owned(),
                    port,
                })
            }
            None => Ok(Self {
                host: host.to_owned(),
                port,
            }),
        }
    }

    /// Absolute `http://` URL for `path` on this endpoint.
    #[must_use]
    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, path)
    }

    /// Absolute `ws://` URL for `path` on this endpoint.
    #[must_use]
    pub fn ws_url(&self, path: &str) -> String {
        format!("ws://{}:{}{}", self.host, self.port, path)
    }
}

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod tests;
