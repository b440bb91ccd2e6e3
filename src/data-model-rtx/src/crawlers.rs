use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Which family of crawler a user agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlerCategory {
    /// Traditional search engine indexers.
    Search,
    /// AI training, citation, and answer-engine bots.
    Ai,
}

impl CrawlerCategory {
    pub const ALL: [CrawlerCategory; 2] = [CrawlerCategory::Search, CrawlerCategory::Ai];

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Ai => "ai",
        }
    }
}

impl std::fmt::Display for CrawlerCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.wire_name())
    }
}

impl std::str::FromStr for CrawlerCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Self::Search),
            "ai" => Ok(Self::Ai),
            other => Err(ParseError::UnknownCategory(other.to_string())),
        }
    }
}

/// A known crawler, identified by the token it sends as its `User-agent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Crawler {
    #[serde(rename = "userAgent")]
    pub user_agent: &'static str,
    pub name: &'static str,
    pub company: &'static str,
    pub category: CrawlerCategory,
}

const fn crawler(
    user_agent: &'static str,
    name: &'static str,
    company: &'static str,
    category: CrawlerCategory,
) -> Crawler {
    Crawler {
        user_agent,
        name,
        company,
        category,
    }
}

use CrawlerCategory::{Ai, Search};

/// Every crawler the generator knows about.
/// Order matters: it is the order `User-agent` lines appear within each category block.
pub static CRAWLERS: [Crawler; 20] = [
    // Traditional search engines
    crawler("Googlebot", "Googlebot", "Google", Search),
    crawler("Bingbot", "Bingbot", "Microsoft", Search),
    crawler("Slurp", "Slurp", "Yahoo", Search),
    crawler("DuckDuckBot", "DuckDuckBot", "DuckDuckGo", Search),
    crawler("Baiduspider", "Baiduspider", "Baidu", Search),
    crawler("YandexBot", "YandexBot", "Yandex", Search),
    // AI crawlers (citation + training)
    crawler("GPTBot", "GPTBot", "OpenAI", Ai),
    crawler("ChatGPT-User", "ChatGPT-User", "OpenAI", Ai),
    crawler("OAI-SearchBot", "OAI-SearchBot", "OpenAI", Ai),
    crawler("ClaudeBot", "ClaudeBot", "Anthropic", Ai),
    crawler("anthropic-ai", "Anthropic AI", "Anthropic", Ai),
    crawler("Claude-Web", "Claude-Web", "Anthropic", Ai),
    crawler("Google-Extended", "Google-Extended", "Google", Ai),
    crawler("PerplexityBot", "PerplexityBot", "Perplexity", Ai),
    crawler("YouBot", "YouBot", "You.com", Ai),
    crawler("CCBot", "CCBot", "Common Crawl", Ai),
    crawler("Meta-ExternalAgent", "Meta External Agent", "Meta", Ai),
    crawler("Bytespider", "Bytespider", "ByteDance", Ai),
    crawler("Amazonbot", "Amazonbot", "Amazon", Ai),
    crawler("cohere-ai", "Cohere AI", "Cohere", Ai),
];

/// Crawlers of the given category, in catalog order.
pub fn crawlers_in(category: CrawlerCategory) -> impl Iterator<Item = &'static Crawler> {
    CRAWLERS.iter().filter(move |c| c.category == category)
}
