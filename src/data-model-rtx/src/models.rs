use serde::{Deserialize, Serialize};

use crate::{Platform, Strategy};

/// Everything the composer needs to render a robots.txt.
///
/// Missing fields deserialize to their defaults, which match the form's initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationInput {
    pub strategy: Strategy,
    pub platform: Platform,
    /// Free text. Blank or whitespace-only means "no sitemap".
    #[serde(alias = "sitemapUrl")]
    pub sitemap_url: String,
}

impl GenerationInput {
    pub fn new(strategy: Strategy, platform: Platform, sitemap_url: impl Into<String>) -> Self {
        Self {
            strategy,
            platform,
            sitemap_url: sitemap_url.into(),
        }
    }

    /// The sitemap URL with surrounding whitespace removed, if anything remains.
    pub fn sitemap(&self) -> Option<&str> {
        let trimmed = self.sitemap_url.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsTxtResponse {
    pub content: String,
}

/// A strategy as presented to a user choosing between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub strategy: Strategy,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<Strategy> for StrategyInfo {
    fn from(strategy: Strategy) -> Self {
        Self {
            strategy,
            label: strategy.label(),
            description: strategy.description(),
        }
    }
}

/// A platform template and the paths it disallows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub label: &'static str,
    pub disallow: &'static [&'static str],
}

impl From<Platform> for PlatformInfo {
    fn from(platform: Platform) -> Self {
        Self {
            platform,
            label: platform.label(),
            disallow: platform.disallows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_is_trimmed() {
        let input = GenerationInput::new(Strategy::default(), Platform::default(), "  https://example.com/sitemap.xml\n");
        assert_eq!(input.sitemap(), Some("https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_blank_sitemap_is_none() {
        assert_eq!(GenerationInput::default().sitemap(), None);
        let input = GenerationInput::new(Strategy::AiOnly, Platform::Shopify, "   ");
        assert_eq!(input.sitemap(), None);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let input: GenerationInput = serde_json::from_str(r#"{"platform": "wordpress"}"#).unwrap();
        assert_eq!(input.strategy, Strategy::MaxVisibility);
        assert_eq!(input.platform, Platform::Wordpress);
        assert_eq!(input.sitemap_url, "");
    }

    #[test]
    fn test_deserialize_camel_case_sitemap() {
        let input: GenerationInput =
            serde_json::from_str(r#"{"strategy": "aiOnly", "sitemapUrl": "https://a.b/s.xml"}"#).unwrap();
        assert_eq!(input.strategy, Strategy::AiOnly);
        assert_eq!(input.sitemap(), Some("https://a.b/s.xml"));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = serde_json::from_str::<GenerationInput>(r#"{"strategy": "everything"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_platform_info() {
        let info = PlatformInfo::from(Platform::Ecommerce);
        assert_eq!(info.label, "eCommerce (General)");
        assert_eq!(info.disallow.len(), 8);
    }
}
