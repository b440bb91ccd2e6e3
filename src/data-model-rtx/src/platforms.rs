use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Website platform whose well-known private paths get `Disallow` rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Wordpress,
    Shopify,
    Ecommerce,
    #[default]
    Custom,
}

impl Platform {
    /// Display order used by selection widgets and listings.
    pub const ALL: [Platform; 4] = [
        Platform::Custom,
        Platform::Wordpress,
        Platform::Shopify,
        Platform::Ecommerce,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Wordpress => "wordpress",
            Self::Shopify => "shopify",
            Self::Ecommerce => "ecommerce",
            Self::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Wordpress => "WordPress",
            Self::Shopify => "Shopify",
            Self::Ecommerce => "eCommerce (General)",
            Self::Custom => "Custom / General",
        }
    }

    /// Path patterns to disallow for this platform, in emission order.
    pub fn disallows(&self) -> &'static [&'static str] {
        match self {
            Self::Wordpress => &[
                "/wp-admin/",
                "/wp-includes/",
                "/wp-content/plugins/",
                "/trackback/",
                "/feed/",
                "/?s=",
                "/search/",
            ],
            Self::Shopify => &[
                "/admin/",
                "/cart/",
                "/checkout/",
                "/orders/",
                "/account/",
                "/*?*variant=",
                "/collections/*+*",
                "/search/",
            ],
            Self::Ecommerce => &[
                "/cart/",
                "/checkout/",
                "/account/",
                "/wishlist/",
                "/compare/",
                "/search/",
                "/*?*sort=",
                "/*?*filter=",
            ],
            Self::Custom => &["/admin/", "/api/", "/private/"],
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.wire_name())
    }
}

impl std::str::FromStr for Platform {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.wire_name() == s)
            .ok_or_else(|| ParseError::UnknownPlatform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
        }
        assert_eq!(
            "WordPress".parse::<Platform>(),
            Err(ParseError::UnknownPlatform("WordPress".into()))
        );
    }

    #[test]
    fn test_every_platform_has_rules() {
        assert!(Platform::ALL.iter().all(|p| !p.disallows().is_empty()));
    }

    #[test]
    fn test_wordpress_rules() {
        let rules = Platform::Wordpress.disallows();
        assert_eq!(rules.first(), Some(&"/wp-admin/"));
        assert!(rules.contains(&"/feed/"));
        assert_eq!(rules.len(), 7);
    }

    #[test]
    fn test_default_is_custom() {
        assert_eq!(Platform::default(), Platform::Custom);
        assert_eq!(Platform::Custom.disallows(), &["/admin/", "/api/", "/private/"]);
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Platform::Ecommerce).unwrap(), "\"ecommerce\"");
        let p: Platform = serde_json::from_str("\"shopify\"").unwrap();
        assert_eq!(p, Platform::Shopify);
    }
}
