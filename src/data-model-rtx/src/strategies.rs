use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Policy choosing which crawler categories may index the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Allow every crawler.
    #[default]
    MaxVisibility,
    /// Allow AI crawlers, block traditional search engines and everyone else.
    AiOnly,
    /// Allow traditional search engines, block AI crawlers.
    Traditional,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::MaxVisibility, Strategy::AiOnly, Strategy::Traditional];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::MaxVisibility => "maxVisibility",
            Self::AiOnly => "aiOnly",
            Self::Traditional => "traditional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MaxVisibility => "Maximum Visibility (Recommended)",
            Self::AiOnly => "AI Visibility Only",
            Self::Traditional => "Traditional SEO Only",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::MaxVisibility => {
                "Allow all crawlers. Maximum visibility in both traditional search engines and AI responses."
            }
            Self::AiOnly => {
                "Allow only AI crawlers. Focus on AI search visibility (ChatGPT, Perplexity, Claude) while blocking traditional search engines."
            }
            Self::Traditional => {
                "Allow only traditional search engines. Block all AI crawlers for maximum content protection."
            }
        }
    }

    /// True if traditional search engines (and the `*` catch-all) are turned away.
    pub fn blocks_search(&self) -> bool {
        matches!(self, Self::AiOnly)
    }

    /// True if AI crawlers are turned away.
    pub fn blocks_ai(&self) -> bool {
        matches!(self, Self::Traditional)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.wire_name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|st| st.wire_name() == s)
            .ok_or_else(|| ParseError::UnknownStrategy(s.to_string()))
    }
}
