use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_MAGAZINE_BASE_URL: &str = "https://www.newyorker.com";
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com";
pub const DEFAULT_AWS_REGION: &str = "us-east-1";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
    #[error("failed to read settings: {0}")]
    Load(#[from] config::ConfigError),
}

/// Process configuration, read once at startup and passed by reference.
#[derive(Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub google_api_key: String,
    #[serde(default)]
    pub aws_sns_arn: String,
    #[serde(default = "default_aws_region")]
    pub aws_region: String,
    #[serde(default = "default_magazine_base_url")]
    pub magazine_base_url: String,
    #[serde(default = "default_places_base_url")]
    pub places_base_url: String,
}

fn default_aws_region() -> String {
    DEFAULT_AWS_REGION.to_string()
}

fn default_magazine_base_url() -> String {
    DEFAULT_MAGAZINE_BASE_URL.to_string()
}

fn default_places_base_url() -> String {
    DEFAULT_PLACES_BASE_URL.to_string()
}

impl Settings {
    /// Read `GOOGLE_API_KEY`, `AWS_SNS_ARN`, `AWS_REGION`, `MAGAZINE_BASE_URL`
    /// and `PLACES_BASE_URL` from the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_env(config::Environment::default())
    }

    fn from_env(env: config::Environment) -> Result<Self, SettingsError> {
        let settings = config::Config::builder()
            .add_source(env)
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    /// Missing credentials are fatal here rather than surfacing later as
    /// rejected upstream requests. The topic is only needed when publishing.
    pub fn validate(&self, publish: bool) -> Result<(), SettingsError> {
        if self.google_api_key.trim().is_empty() {
            return Err(SettingsError::Missing("GOOGLE_API_KEY"));
        }
        if publish && self.aws_sns_arn.trim().is_empty() {
            return Err(SettingsError::Missing("AWS_SNS_ARN"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("google_api_key", &"<redacted>")
            .field("aws_sns_arn", &self.aws_sns_arn)
            .field("aws_region", &self.aws_region)
            .field("magazine_base_url", &self.magazine_base_url)
            .field("places_base_url", &self.places_base_url)
            .finish()
    }
}
