//! Renders a robots.txt document from a visibility strategy, a platform template, and an optional sitemap.

use data_model_rtx::{CrawlerCategory, GenerationInput, crawlers_in};

use crate::text_utils::{banner, capitalize_string};

/// Trailing credit line present in every generated document.
pub const ATTRIBUTION: &str = "# Generated by Olavi - https://olavi.ai/tools/robots-txt-generator";

/// Suggested file name when the document is saved.
pub const DOWNLOAD_FILE_NAME: &str = "robots.txt";

/// MIME type of the saved document.
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// What to do with the file once it has been generated.
pub const UPLOAD_INSTRUCTIONS: [&str; 4] = [
    "Click \"Download\" or \"Copy\" to get your generated file",
    "Upload the file to the root directory of your website",
    "Verify it's accessible at: https://yourdomain.com/robots.txt",
    "Test with Google Search Console's robots.txt tester",
];

/// Composes the robots.txt document for `input`.
///
/// Total and deterministic: identical inputs always give byte-identical output.
/// Lines are joined with `\n` and the document has no trailing newline.
pub fn compose(input: &GenerationInput) -> String {
    let strategy = input.strategy;
    let mut lines: Vec<String> = Vec::new();

    lines.extend(banner("TRADITIONAL SEARCH ENGINES"));
    user_agents(&mut lines, CrawlerCategory::Search);
    if strategy.blocks_search() {
        lines.push("Disallow: /".into());
        lines.push("# Blocked: AI-only visibility strategy".into());
    } else {
        lines.push("Allow: /".into());
    }
    lines.push(String::new());

    lines.extend(banner("AI CRAWLERS"));
    user_agents(&mut lines, CrawlerCategory::Ai);
    if strategy.blocks_ai() {
        lines.push("Disallow: /".into());
        lines.push("# Blocked: Traditional SEO only strategy".into());
    } else {
        lines.push("Allow: /".into());
    }
    lines.push(String::new());

    lines.extend(banner("ALL OTHER CRAWLERS"));
    lines.push("User-agent: *".into());
    if strategy.blocks_search() {
        lines.push("Disallow: /".into());
    } else {
        lines.push("Allow: /".into());
    }

    // Platform rules only make sense when the catch-all is allowed in.
    let disallows = input.platform.disallows();
    if !disallows.is_empty() && !strategy.blocks_search() {
        lines.push(String::new());
        lines.push(format!(
            "# {} specific rules",
            capitalize_string(input.platform.wire_name())
        ));
        lines.extend(disallows.iter().map(|path| format!("Disallow: {path}")));
    }
    lines.push(String::new());

    if let Some(sitemap) = input.sitemap() {
        lines.extend(banner("SITEMAP"));
        lines.push(format!("Sitemap: {sitemap}"));
        lines.push(String::new());
    }

    lines.push(ATTRIBUTION.into());

    tracing::debug!(
        strategy = %input.strategy,
        platform = %input.platform,
        has_sitemap = input.sitemap().is_some(),
        lines = lines.len(),
        "composed robots.txt"
    );

    lines.join("\n")
}

fn user_agents(lines: &mut Vec<String>, category: CrawlerCategory) {
    lines.extend(crawlers_in(category).map(|c| format!("User-agent: {}", c.user_agent)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_model_rtx::{CRAWLERS, Platform, Strategy};
    use indoc::indoc;

    fn render(strategy: Strategy, platform: Platform, sitemap_url: &str) -> String {
        compose(&GenerationInput::new(strategy, platform, sitemap_url))
    }

    /// Lines of the section that starts with the given banner title, up to the next blank line.
    fn section<'a>(doc: &'a str, title: &str) -> Vec<&'a str> {
        let header = format!("# {title}");
        doc.lines()
            .skip_while(|l| *l != header)
            .skip(2)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_default_document() {
        let expected = indoc! {"
            # ======================
            # TRADITIONAL SEARCH ENGINES
            # ======================
            User-agent: Googlebot
            User-agent: Bingbot
            User-agent: Slurp
            User-agent: DuckDuckBot
            User-agent: Baiduspider
            User-agent: YandexBot
            Allow: /

            # ======================
            # AI CRAWLERS
            # ======================
            User-agent: GPTBot
            User-agent: ChatGPT-User
            User-agent: OAI-SearchBot
            User-agent: ClaudeBot
            User-agent: anthropic-ai
            User-agent: Claude-Web
            User-agent: Google-Extended
            User-agent: PerplexityBot
            User-agent: YouBot
            User-agent: CCBot
            User-agent: Meta-ExternalAgent
            User-agent: Bytespider
            User-agent: Amazonbot
            User-agent: cohere-ai
            Allow: /

            # ======================
            # ALL OTHER CRAWLERS
            # ======================
            User-agent: *
            Allow: /

            # Custom specific rules
            Disallow: /admin/
            Disallow: /api/
            Disallow: /private/

            # Generated by Olavi - https://olavi.ai/tools/robots-txt-generator"};

        assert_eq!(compose(&GenerationInput::default()), expected);
    }

    #[test]
    fn test_deterministic() {
        for strategy in Strategy::ALL {
            for platform in Platform::ALL {
                let first = render(strategy, platform, "https://example.com/sitemap.xml");
                let second = render(strategy, platform, "https://example.com/sitemap.xml");
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_max_visibility_allows_everything() {
        let doc = render(Strategy::MaxVisibility, Platform::Custom, "");
        assert_eq!(section(&doc, "TRADITIONAL SEARCH ENGINES").last(), Some(&"Allow: /"));
        assert_eq!(section(&doc, "AI CRAWLERS").last(), Some(&"Allow: /"));
        assert_eq!(section(&doc, "ALL OTHER CRAWLERS"), vec!["User-agent: *", "Allow: /"]);
        assert!(!doc.lines().any(|l| l == "Disallow: /"));
    }

    #[test]
    fn test_ai_only_blocks_search_and_platform_rules() {
        let doc = render(Strategy::AiOnly, Platform::Wordpress, "");
        let search = section(&doc, "TRADITIONAL SEARCH ENGINES");
        assert_eq!(
            &search[search.len() - 2..],
            &["Disallow: /", "# Blocked: AI-only visibility strategy"]
        );
        assert_eq!(section(&doc, "AI CRAWLERS").last(), Some(&"Allow: /"));
        assert_eq!(section(&doc, "ALL OTHER CRAWLERS"), vec!["User-agent: *", "Disallow: /"]);
        assert!(doc.lines().filter(|l| l.starts_with("Disallow:")).all(|l| l == "Disallow: /"));
        assert!(!doc.contains("specific rules"));
    }

    #[test]
    fn test_traditional_blocks_ai_but_lists_every_ai_agent() {
        let doc = render(Strategy::Traditional, Platform::Custom, "");
        let ai = section(&doc, "AI CRAWLERS");
        assert_eq!(
            &ai[ai.len() - 2..],
            &["Disallow: /", "# Blocked: Traditional SEO only strategy"]
        );
        let agents: Vec<&str> = ai.iter().filter_map(|l| l.strip_prefix("User-agent: ")).collect();
        let expected: Vec<&str> = CRAWLERS
            .iter()
            .filter(|c| c.category == CrawlerCategory::Ai)
            .map(|c| c.user_agent)
            .collect();
        assert_eq!(agents, expected);
        assert_eq!(section(&doc, "TRADITIONAL SEARCH ENGINES").last(), Some(&"Allow: /"));
        assert!(doc.contains("Disallow: /admin/"));
    }

    #[test]
    fn test_wordpress_rules() {
        let doc = render(Strategy::MaxVisibility, Platform::Wordpress, "");
        assert!(doc.contains("\n# Wordpress specific rules\nDisallow: /wp-admin/\n"));
        assert!(doc.lines().any(|l| l == "Disallow: /feed/"));
    }

    #[test]
    fn test_platform_rules_follow_list_order() {
        let doc = render(Strategy::Traditional, Platform::Shopify, "");
        let rules: Vec<&str> = doc
            .lines()
            .skip_while(|l| *l != "# Shopify specific rules")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .filter_map(|l| l.strip_prefix("Disallow: "))
            .collect();
        assert_eq!(rules, Platform::Shopify.disallows());
    }

    #[test]
    fn test_sitemap_block() {
        let doc = render(Strategy::MaxVisibility, Platform::Ecommerce, "https://example.com/sitemap.xml");
        let sitemap_lines: Vec<&str> = doc.lines().filter(|l| l.starts_with("Sitemap:")).collect();
        assert_eq!(sitemap_lines, vec!["Sitemap: https://example.com/sitemap.xml"]);
        assert!(doc.ends_with(&format!(
            "# SITEMAP\n# ======================\nSitemap: https://example.com/sitemap.xml\n\n{ATTRIBUTION}"
        )));
    }

    #[test]
    fn test_sitemap_is_trimmed() {
        let doc = render(Strategy::AiOnly, Platform::Custom, "\t https://example.com/sitemap.xml  ");
        assert!(doc.lines().any(|l| l == "Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_blank_sitemap_is_omitted() {
        let doc = render(Strategy::MaxVisibility, Platform::Custom, "   ");
        assert!(!doc.contains("Sitemap:"));
        assert!(!doc.contains("# SITEMAP"));
    }

    #[test]
    fn test_attribution_always_last() {
        for strategy in Strategy::ALL {
            for platform in Platform::ALL {
                for sitemap in ["", "https://example.com/sitemap.xml"] {
                    let doc = render(strategy, platform, sitemap);
                    assert_eq!(doc.lines().last(), Some(ATTRIBUTION));
                    assert!(!doc.ends_with('\n'));
                }
            }
        }
    }
}
