//! Logger context value object
//!
//! Static identifiers written into every result line. Fixed when the
//! logger is created and never changed afterwards.

use std::net::{IpAddr, Ipv4Addr, ToSocketAddrs};

use chrono::FixedOffset;

/// Immutable per-logger context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerContext {
    daemon_id: i32,
    process_id: i32,
    thread_id: i32,
    host_name: String,
    local_address: IpAddr,
    layer: String,
    operation: String,
    target: String,
    utc_offset: Option<FixedOffset>,
}

impl LoggerContext {
    pub fn builder() -> LoggerContextBuilder {
        LoggerContextBuilder::default()
    }

    pub fn daemon_id(&self) -> i32 {
        self.daemon_id
    }

    pub fn process_id(&self) -> i32 {
        self.process_id
    }

    pub fn thread_id(&self) -> i32 {
        self.thread_id
    }

    /// Host name of the local address; empty for a literal address
    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn local_address(&self) -> IpAddr {
        self.local_address
    }

    /// The address as written to result lines: `host/ip`, or `/ip` without a host name
    pub fn local_address_text(&self) -> String {
        format!("{}/{}", self.host_name, self.local_address)
    }

    /// Layer in which results are logged (e.g. `client`, `server`)
    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Pinned offset for the timestamp field; `None` uses the local
    /// offset in effect at each timestamp
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
    }
}

/// Builder for [`LoggerContext`]
///
/// Unset ids default to 0 and the names to empty strings. Without an
/// explicit address the local host name and its first resolved address
/// are used (`127.0.0.1` if it does not resolve).
#[derive(Debug, Clone, Default)]
pub struct LoggerContextBuilder {
    daemon_id: i32,
    process_id: i32,
    thread_id: i32,
    host_name: Option<String>,
    local_address: Option<IpAddr>,
    layer: String,
    operation: String,
    target: String,
    utc_offset: Option<FixedOffset>,
}

impl LoggerContextBuilder {
    pub fn daemon_id(mut self, id: i32) -> Self {
        self.daemon_id = id;
        self
    }

    pub fn process_id(mut self, id: i32) -> Self {
        self.process_id = id;
        self
    }

    pub fn thread_id(mut self, id: i32) -> Self {
        self.thread_id = id;
        self
    }

    pub fn host_name(mut self, name: impl Into<String>) -> Self {
        self.host_name = Some(name.into());
        self
    }

    pub fn local_address(mut self, address: IpAddr) -> Self {
        self.local_address = Some(address);
        self
    }

    pub fn layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = layer.into();
        self
    }

    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = operation.into();
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    pub fn build(self) -> LoggerContext {
        let (host_name, local_address) = match (self.host_name, self.local_address) {
            (host, Some(address)) => (host.unwrap_or_default(), address),
            (Some(host), None) => {
                let address = resolve(&host);
                (host, address)
            }
            (None, None) => local_host(),
        };

        LoggerContext {
            daemon_id: self.daemon_id,
            process_id: self.process_id,
            thread_id: self.thread_id,
            host_name,
            local_address,
            layer: self.layer,
            operation: self.operation,
            target: self.target,
            utc_offset: self.utc_offset,
        }
    }
}

/// Local host name and address
fn local_host() -> (String, IpAddr) {
    match hostname::get() {
        Ok(name) => {
            let name = name.to_string_lossy().into_owned();
            let address = resolve(&name);
            (name, address)
        }
        Err(e) => {
            tracing::debug!(error = %e, "could not read local host name");
            (String::new(), IpAddr::V4(Ipv4Addr::LOCALHOST))
        }
    }
}

fn resolve(host: &str) -> IpAddr {
    (host, 0)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}
