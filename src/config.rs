use clap::Args;

use crate::global_constants;

/// Process-wide settings, read once from flags or the environment.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Base URL the OCR and translation endpoints are appended to
    #[arg(
        long = "api-base",
        env = "API_BASE_URL",
        default_value = global_constants::DEFAULT_API_BASE_URL,
        global = true
    )]
    pub api_base_url: String,

    /// Public site address shown in the banner
    #[arg(
        long = "site-url",
        env = "SITE_URL",
        default_value = global_constants::DEFAULT_SITE_URL,
        global = true
    )]
    pub site_url: String,

    /// Analytics measurement id; analytics stays off when empty
    #[arg(long = "analytics-id", env = "GOOGLE_ANALYTICS_ID", global = true)]
    pub analytics_id: Option<String>,
}

impl AppConfig {
    pub fn analytics_measurement_id(&self) -> Option<String> {
        self.analytics_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: global_constants::DEFAULT_API_BASE_URL.to_string(),
            site_url: global_constants::DEFAULT_SITE_URL.to_string(),
            analytics_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        config: AppConfig,
    }

    #[test]
    fn test_default_config_points_at_local_api() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.site_url, "https://read-beyond.vercel.app");
        assert_eq!(config.analytics_measurement_id(), None);
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "read-beyond",
            "--api-base",
            "https://api.example.com",
            "--analytics-id",
            "G-123",
        ]);

        assert_eq!(cli.config.api_base_url, "https://api.example.com");
        assert_eq!(cli.config.analytics_measurement_id().as_deref(), Some("G-123"));
    }

    #[test]
    fn test_blank_analytics_id_is_disabled() {
        let config = AppConfig {
            analytics_id: Some("   ".to_string()),
            ..AppConfig::default()
        };

        assert_eq!(config.analytics_measurement_id(), None);
    }
}
