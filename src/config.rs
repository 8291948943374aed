//! Client configuration.

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::api::{Protocol, Proxy};
use crate::error::{Result, SlideshareError};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "SLIDESHARE_API_KEY";
/// Environment variable holding the shared secret.
pub const ENV_SHARED_SECRET: &str = "SLIDESHARE_SHARED_SECRET";
/// Environment variable selecting `http` or `https`.
pub const ENV_PROTOCOL: &str = "SLIDESHARE_PROTOCOL";
/// Environment variable holding the proxy host.
pub const ENV_PROXY_HOST: &str = "SLIDESHARE_PROXY_HOST";
/// Environment variable holding the proxy port.
pub const ENV_PROXY_PORT: &str = "SLIDESHARE_PROXY_PORT";
/// Environment variable holding the proxy user.
pub const ENV_PROXY_USER: &str = "SLIDESHARE_PROXY_USER";
/// Environment variable holding the proxy password.
pub const ENV_PROXY_PASS: &str = "SLIDESHARE_PROXY_PASS";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("slideshare-rs/", env!("CARGO_PKG_VERSION"));

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to build a [`SlideshareApi`](crate::SlideshareApi).
///
/// ```
/// use slideshare::{ApiConfig, Protocol};
///
/// let config = ApiConfig::new("key", "secret").protocol(Protocol::Http);
/// assert_eq!(
///     config.base_url().unwrap().as_str(),
///     "http://www.slideshare.net/api/2/"
/// );
/// ```
#[derive(Clone)]
pub struct ApiConfig {
    pub(crate) api_key: String,
    pub(crate) shared_secret: String,
    pub(crate) protocol: Protocol,
    pub(crate) proxy: Option<Proxy>,
    pub(crate) base_url: Option<Url>,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
}

impl ApiConfig {
    /// Configuration for the given key and secret with default settings.
    pub fn new<K: Into<String>, S: Into<String>>(api_key: K, shared_secret: S) -> Self {
        Self {
            api_key: api_key.into(),
            shared_secret: shared_secret.into(),
            protocol: Protocol::default(),
            proxy: None,
            base_url: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the configuration from `SLIDESHARE_*` environment variables.
    ///
    /// Key and secret are required. The proxy is only configured when
    /// `SLIDESHARE_PROXY_HOST` is set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok().filter(|v| !v.trim().is_empty()))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| {
                SlideshareError::invalid(format!("environment variable {} is not set", name))
            })
        };

        let mut config = Self::new(required(ENV_API_KEY)?, required(ENV_SHARED_SECRET)?);

        if let Some(protocol) = lookup(ENV_PROTOCOL) {
            config.protocol = protocol.parse()?;
        }

        if let Some(host) = lookup(ENV_PROXY_HOST) {
            let port = match lookup(ENV_PROXY_PORT) {
                Some(port) => Some(port.trim().parse::<u16>().map_err(|_| {
                    SlideshareError::invalid(format!("'{}' is not a valid proxy port", port))
                })?),
                None => None,
            };
            let user = lookup(ENV_PROXY_USER);
            let password = lookup(ENV_PROXY_PASS);
            config.proxy = Some(Proxy::from_parts(
                &host,
                port,
                user.as_deref(),
                password.as_deref(),
            )?);
        }

        Ok(config)
    }

    /// Use `protocol` to reach the API.
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    /// Route every request through `proxy`.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Send requests to `base_url` instead of the public API.
    ///
    /// Overrides the protocol.
    pub fn base_url_override(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Send `user_agent` with every request.
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Give up on requests after `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Configured proxy, if any.
    pub fn get_proxy(&self) -> Option<&Proxy> {
        self.proxy.as_ref()
    }

    /// Configured protocol.
    pub fn get_protocol(&self) -> Protocol {
        self.protocol
    }

    /// Base URL web-method names are joined onto.
    pub fn base_url(&self) -> Result<Url> {
        match &self.base_url {
            Some(url) => Ok(url.clone()),
            None => self.protocol.base_url(),
        }
    }

    /// Check that key and secret are present.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(SlideshareError::invalid("api key cannot be empty"));
        }
        if self.shared_secret.trim().is_empty() {
            return Err(SlideshareError::invalid("shared secret cannot be empty"));
        }
        Ok(())
    }
}

// Secret is never printed.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key)
            .field("protocol", &self.protocol)
            .field("proxy", &self.proxy)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
