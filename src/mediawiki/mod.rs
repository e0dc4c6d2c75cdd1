//! HTTP plumbing for the MediaWiki Action API.
//!
//! [`MediaWikiClient`] owns the shared `reqwest` client (user agent and timeout
//! applied once), turns an edition code into an endpoint URL and decodes
//! `format=json` responses, mapping every failure to a [`FetchError`].

pub(crate) mod responses;

use crate::config::{LANG_PLACEHOLDER, WikiConfig};
use crate::error::{Error, FetchError, Result};
use crate::types::LanguageCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Thin MediaWiki API client (cloneable, the inner `reqwest::Client` is shared)
#[derive(Clone, Debug)]
pub struct MediaWikiClient {
    /// HTTP client carrying the configured user agent and timeout
    http: reqwest::Client,

    /// Endpoint template, possibly containing `{lang}`
    api_url: String,
}

impl MediaWikiClient {
    /// Create a client from the wiki settings
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the HTTP client cannot be built (for example
    /// when the user agent is not a valid header value).
    pub fn new(config: &WikiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Config {
                message: format!("failed to create HTTP client: {}", e),
                key: Some("wiki.user_agent".to_string()),
            })?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// API endpoint for a given edition
    ///
    /// # Errors
    /// Returns [`FetchError::Malformed`] if the substituted template is not a URL.
    pub fn endpoint(&self, language: &LanguageCode) -> std::result::Result<Url, FetchError> {
        let raw = self.api_url.replace(LANG_PLACEHOLDER, language.as_str());
        Url::parse(&raw)
            .map_err(|e| FetchError::Malformed(format!("invalid API URL '{}': {}", raw, e)))
    }

    /// Run one GET against the API and decode the body into `T`
    ///
    /// `format=json` is appended to `params`. A body carrying an `error` object is
    /// reported as [`FetchError::Api`] even when the status is 200.
    pub(crate) async fn query<T: DeserializeOwned>(
        &self,
        language: &LanguageCode,
        params: &[(&str, &str)],
    ) -> std::result::Result<T, FetchError> {
        let endpoint = self.endpoint(language)?;
        debug!(language = %language, endpoint = %endpoint, ?params, "MediaWiki request");

        let response = self
            .http
            .get(endpoint.clone())
            .query(params)
            .query(&[("format", "json")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint = %endpoint, "MediaWiki returned error status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let mut value: serde_json::Value = serde_json::from_str(&body)?;

        if let Some(error) = value.get_mut("error").map(serde_json::Value::take) {
            let error: responses::ApiErrorBody = serde_json::from_value(error)?;
            warn!(code = %error.code, info = %error.info, "MediaWiki API error");
            return Err(FetchError::Api {
                code: error.code,
                info: error.info,
            });
        }

        Ok(serde_json::from_value(value)?)
    }
}
