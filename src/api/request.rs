//! Request composition.
//!
//! An [`ApiRequest`] is a web-method name plus its parameters. It knows
//! nothing about credentials or transport; the client signs and sends it.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::Url;

use crate::error::{Result, SlideshareError};

/// Host and path every web-method hangs off.
pub const API_HOST_PATH: &str = "www.slideshare.net/api/2/";

/// Transport protocol used to reach the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    #[default]
    Https,
}

impl Protocol {
    /// URL scheme for this protocol.
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }

    /// Base URL of the API for this protocol.
    pub fn base_url(&self) -> Result<Url> {
        let url = format!("{}://{}", self.scheme(), API_HOST_PATH);
        Url::parse(&url).map_err(|e| SlideshareError::invalid(format!("bad base URL: {}", e)))
    }
}

impl std::str::FromStr for Protocol {
    type Err = SlideshareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(SlideshareError::invalid(format!(
                "protocol must be http or https and it's '{}'",
                other
            ))),
        }
    }
}

/// A web-method call with its parameters.
///
/// Parameters are kept sorted by name, so the order they were added in does
/// not affect equality, hashing or the resulting URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiRequest {
    method: String,
    params: BTreeMap<String, String>,
}

impl ApiRequest {
    /// Start a request for the given web-method.
    pub fn new<S: Into<String>>(method: S) -> Result<Self> {
        let method = method.into();
        if method.trim().is_empty() {
            return Err(SlideshareError::invalid("web-method name cannot be empty"));
        }
        if method.contains(&['/', ':', '?', '#'][..]) {
            return Err(SlideshareError::invalid(format!(
                "'{}' is not a web-method name",
                method
            )));
        }
        Ok(Self {
            method,
            params: BTreeMap::new(),
        })
    }

    /// Web-method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Parameters, sorted by name.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    /// Value of a parameter, if set.
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Set a parameter, replacing any previous value.
    pub fn param<K: Into<String>, V: ToString>(mut self, name: K, value: V) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Set a parameter only when a value is given.
    pub fn opt_param<K: Into<String>, V: ToString>(self, name: K, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Set a `1`/`0` flag parameter when a value is given.
    pub fn flag_param<K: Into<String>>(self, name: K, value: Option<bool>) -> Self {
        self.opt_param(name, value.map(|v| if v { "1" } else { "0" }))
    }

    /// Set a `Y`/`N` flag parameter when a value is given.
    pub fn yes_no_param<K: Into<String>>(self, name: K, value: Option<bool>) -> Self {
        self.opt_param(name, value.map(|v| if v { "Y" } else { "N" }))
    }

    /// Parameters form-urlencoded, without the leading `?`.
    pub fn query_string(&self) -> String {
        let mut url = Url::parse("http://localhost/").expect("static URL is valid");
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        url.query().unwrap_or("").to_string()
    }

    /// Full URL of the request under `base`, parameters included.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = self.endpoint(base)?;
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        Ok(url)
    }

    /// URL of the web-method under `base`, without parameters.
    pub fn endpoint(&self, base: &Url) -> Result<Url> {
        base.join(&self.method).map_err(|e| {
            SlideshareError::invalid(format!("bad web-method '{}': {}", self.method, e))
        })
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query_string();
        if query.is_empty() {
            write!(f, "{}", self.method)
        } else {
            write!(f, "{}?{}", self.method, query)
        }
    }
}
