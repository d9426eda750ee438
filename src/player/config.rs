//! Player configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration passed to the player on construction.
///
/// Serialized in camelCase, as the SDK expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Id of the element the player mounts into.
    pub id: String,
    /// Stream address.
    pub url: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Audio switch as a number (0 = muted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlayerConfigError {
    #[error("player config field '{0}' must not be empty")]
    MissingField(&'static str),
}

impl PlayerConfig {
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, PlayerConfigError> {
        let config = Self {
            id: id.into(),
            url: url.into(),
            access_token: access_token.into(),
            template: None,
            audio: None,
            autoplay: None,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_audio(mut self, audio: u32) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    pub fn validate(&self) -> Result<(), PlayerConfigError> {
        if self.id.trim().is_empty() {
            return Err(PlayerConfigError::MissingField("id"));
        }
        if self.url.trim().is_empty() {
            return Err(PlayerConfigError::MissingField("url"));
        }
        if self.access_token.trim().is_empty() {
            return Err(PlayerConfigError::MissingField("accessToken"));
        }
        Ok(())
    }
}
