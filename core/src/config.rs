//! Client configuration and the options that build it.
//!
//! # Design
//! A `ClientConfig` starts zero-valued (no API key, the public base URL, a
//! default ureq transport) and is shaped by a sequence of `ClientOption`s
//! applied in order, last write wins. Building never fails: whether an API
//! key is present is checked per request, because a few endpoints are public.
//!
//! Once handed to `OdbClient` the config is only reachable through `&self`,
//! so it can be shared across threads without locking.

use std::fmt;
use std::sync::Arc;

use crate::http::{Transport, UreqTransport};

/// Base URL of the public Opendatabot API, including the version prefix.
pub const DEFAULT_BASE_URL: &str = "https://opendatabot.com/api/v2";

/// Credentials, base URL and transport shared by every request.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ClientConfig {
    /// Apply `options` in order to a zero-valued config.
    pub fn build<I>(options: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ClientOption>>,
    {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Trailing slashes are stripped so templates can start with `/`.
    pub fn set_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.trim_end_matches('/').to_string();
    }

    pub fn set_transport(&mut self, transport: Arc<dyn Transport>) {
        self.transport = transport;
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport: Arc::new(UreqTransport::new()),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.api_key.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("ClientConfig")
            .field("api_key", &api_key)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// One mutation applied to a `ClientConfig` while it is being built.
///
/// Any `Fn(&mut ClientConfig)` closure is an option too.
pub trait ClientOption {
    fn apply(&self, config: &mut ClientConfig);
}

impl<F> ClientOption for F
where
    F: Fn(&mut ClientConfig),
{
    fn apply(&self, config: &mut ClientConfig) {
        self(config)
    }
}

/// Sets the API key sent as `apiKey` on every request.
#[derive(Debug, Clone)]
pub struct ApiKey(pub String);

impl ClientOption for ApiKey {
    fn apply(&self, config: &mut ClientConfig) {
        config.set_api_key(self.0.as_str());
    }
}

/// Points the client at another host, e.g. a local mock server.
#[derive(Debug, Clone)]
pub struct BaseUrl(pub String);

impl ClientOption for BaseUrl {
    fn apply(&self, config: &mut ClientConfig) {
        config.set_base_url(&self.0);
    }
}

/// Replaces the transport that executes requests.
#[derive(Clone)]
pub struct WithTransport(pub Arc<dyn Transport>);

impl ClientOption for WithTransport {
    fn apply(&self, config: &mut ClientConfig) {
        config.set_transport(Arc::clone(&self.0));
    }
}

pub fn with_api_key(api_key: impl Into<String>) -> Box<dyn ClientOption> {
    Box::new(ApiKey(api_key.into()))
}

pub fn with_base_url(base_url: impl Into<String>) -> Box<dyn ClientOption> {
    Box::new(BaseUrl(base_url.into()))
}

pub fn with_transport(transport: Arc<dyn Transport>) -> Box<dyn ClientOption> {
    Box::new(WithTransport(transport))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_give_empty_api_key() {
        let config = ClientConfig::build(Vec::new());
        assert_eq!(config.api_key(), "");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn options_apply_in_order_last_write_wins() {
        let config = ClientConfig::build([with_api_key("first"), with_api_key("second")]);
        assert_eq!(config.api_key(), "second");
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let config = ClientConfig::build([with_base_url("http://127.0.0.1:3000/api/v2/")]);
        assert_eq!(config.base_url(), "http://127.0.0.1:3000/api/v2");
    }

    #[test]
    fn closures_are_options() {
        let options: Vec<Box<dyn ClientOption>> = vec![
            with_api_key("K"),
            Box::new(|config: &mut ClientConfig| config.set_api_key("")),
        ];
        let config = ClientConfig::build(options);
        assert_eq!(config.api_key(), "");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClientConfig::build([with_api_key("secret-key")]);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
