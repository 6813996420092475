use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Site-level configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Canonical site origin, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Affiliate/monetization settings
    #[serde(default)]
    pub affiliates: AffiliateSettings,
}

/// Settings for the affiliate link layer.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AffiliateSettings {
    /// Amazon Associates tracking tag, e.g. "recipebook-20". Absent means
    /// links are built without a `tag=` parameter.
    #[serde(default)]
    pub amazon_tag: Option<String>,
}

fn default_base_url() -> String {
    "https://recipebook-green.vercel.app".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            affiliates: AffiliateSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPEBOOK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPEBOOK__AFFILIATES__AMAZON_TAG
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPEBOOK__AFFILIATES__AMAZON_TAG
            .add_source(
                Environment::with_prefix("RECIPEBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut loaded: SiteConfig = settings.try_deserialize()?;
        // Keep the origin slash-free so joins stay predictable
        while loaded.base_url.ends_with('/') {
            loaded.base_url.pop();
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_file_or_env() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, "https://recipebook-green.vercel.app");
        assert!(config.affiliates.amazon_tag.is_none());
    }

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        assert!(!default_base_url().ends_with('/'));
    }
}
