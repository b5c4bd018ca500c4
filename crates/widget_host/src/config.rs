//! Embedder-tunable settings for the widget helpers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    anchor,
    digest::{self, DigestAlgorithm, DigestService},
    origin, textarea, theme, HostError, OriginHost, TextAreaElement, SESSION_PARAM,
    TEXTAREA_MAX_HEIGHT,
};

/// Failure loading a [`WidgetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document did not match the config schema.
    #[error("invalid widget config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configured textarea cap is not a positive height.
    #[error("textarea_max_height must be positive, got {0}")]
    InvalidMaxHeight(i32),
}

/// Helper settings with the same defaults as the free functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Directory holding the built-in theme stylesheets.
    pub themes_dir: String,
    /// Query parameter stripped from embedding-page URLs.
    pub session_param: String,
    /// Tallest the comment textarea grows, in CSS pixels.
    pub textarea_max_height: i32,
    /// Algorithm used for page-identity digests.
    pub digest_algorithm: DigestAlgorithm,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            themes_dir: "/themes".to_string(),
            session_param: SESSION_PARAM.to_string(),
            textarea_max_height: TEXTAREA_MAX_HEIGHT,
            digest_algorithm: DigestAlgorithm::default(),
        }
    }
}

impl WidgetConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed TOML, unknown digest algorithms, or a
    /// non-positive textarea cap.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        if config.textarea_max_height <= 0 {
            return Err(ConfigError::InvalidMaxHeight(config.textarea_max_height));
        }
        Ok(config)
    }

    /// Stylesheet URL for a resolved theme under [`Self::themes_dir`].
    pub fn theme_url(&self, resolved_theme: &str, theme: &str) -> String {
        theme::theme_url_in(&self.themes_dir, resolved_theme, theme)
    }

    /// [`crate::get_origin_host`] using the configured session parameter.
    pub fn origin_host(&self, origin: &str) -> OriginHost {
        origin::origin_host_without(origin, &self.session_param)
    }

    /// [`crate::clean_session_param`] using the configured session parameter.
    pub fn clean_session_param(&self, url: &str) -> String {
        origin::clean_param(url, &self.session_param)
    }

    /// Cleans the anchor and session parameter of an embedding-page URL in one pass.
    pub fn clean_page_url(&self, url: &str) -> String {
        self.clean_session_param(anchor::clean_anchor(url))
    }

    /// [`crate::digest_message_with`] using the configured algorithm.
    ///
    /// # Errors
    ///
    /// Returns the provider's error unchanged.
    pub async fn digest_message_with<D: DigestService + ?Sized>(
        &self,
        digests: &D,
        message: &str,
    ) -> Result<String, HostError> {
        digest::digest_message_with(digests, message, Some(self.digest_algorithm.name())).await
    }

    /// [`crate::resize_text_area`] using the configured height cap.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Style`] when the element rejects the style update.
    pub fn resize_text_area<E: TextAreaElement + ?Sized>(
        &self,
        element: &E,
    ) -> Result<(), HostError> {
        textarea::resize_text_area_to(element, self.textarea_max_height)
    }
}
