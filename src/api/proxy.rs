//! HTTP proxy configuration.

use std::fmt;

use crate::error::{Result, SlideshareError};

/// Port used when none is given.
pub const DEFAULT_PROXY_PORT: u16 = 8080;

/// An HTTP proxy, optionally requiring basic authentication.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Proxy {
    host: String,
    port: u16,
    credentials: Option<(String, String)>,
}

impl Proxy {
    /// Proxy on `host` at the default port.
    pub fn new<S: Into<String>>(host: S) -> Result<Self> {
        Self::with_port(host, DEFAULT_PROXY_PORT)
    }

    /// Proxy on `host:port`.
    pub fn with_port<S: Into<String>>(host: S, port: u16) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(SlideshareError::invalid("proxy host cannot be empty"));
        }
        Ok(Self {
            host,
            port,
            credentials: None,
        })
    }

    /// Require basic authentication with the given user and password.
    pub fn with_credentials<U: Into<String>, P: Into<String>>(mut self, user: U, password: P) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    /// Build a proxy from loosely-specified parts, as found in configuration.
    ///
    /// A user without a password is rejected; a password without a user is
    /// ignored.
    pub fn from_parts(
        host: &str,
        port: Option<u16>,
        user: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self> {
        let proxy = Self::with_port(host, port.unwrap_or(DEFAULT_PROXY_PORT))?;
        match (user, password) {
            (Some(user), Some(password)) => Ok(proxy.with_credentials(user, password)),
            (Some(_), None) => Err(SlideshareError::invalid(
                "you must provide a password for the proxy user",
            )),
            (None, _) => Ok(proxy),
        }
    }

    /// Proxy host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Proxy port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Proxy user, if authentication is required.
    pub fn user(&self) -> Option<&str> {
        self.credentials.as_ref().map(|(user, _)| user.as_str())
    }

    /// Proxy password, if authentication is required.
    pub fn password(&self) -> Option<&str> {
        self.credentials.as_ref().map(|(_, password)| password.as_str())
    }

    /// Whether this proxy uses authentication.
    pub fn uses_authentication(&self) -> bool {
        self.credentials.is_some()
    }

    /// Proxy URL, without credentials.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Convert into a proxy reqwest routes every request through.
    pub fn to_reqwest(&self) -> Result<reqwest::Proxy> {
        let proxy = reqwest::Proxy::all(self.url())?;
        Ok(match &self.credentials {
            Some((user, password)) => proxy.basic_auth(user, password),
            None => proxy,
        })
    }
}

impl fmt::Display for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.user() {
            Some(user) => write!(f, "{}@{}:{}", user, self.host, self.port),
            None => write!(f, "{}:{}", self.host, self.port),
        }
    }
}

// Password is never printed.
impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proxy")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user())
            .finish()
    }
}
