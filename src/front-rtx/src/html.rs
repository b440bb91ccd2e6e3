//! Markup for the generator form. Pure string building, so it is testable off the browser.

use core_rtx::UPLOAD_INSTRUCTIONS;
use data_model_rtx::{GenerationInput, Platform, Strategy};

pub const STRATEGY_INPUT_NAME: &str = "strategy";
pub const PLATFORM_SELECT_ID: &str = "platform";
pub const SITEMAP_INPUT_ID: &str = "sitemap-url";
pub const OUTPUT_ID: &str = "robots-output";
pub const COPY_BUTTON_ID: &str = "copy-button";
pub const DOWNLOAD_BUTTON_ID: &str = "download-button";

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

pub fn copy_button_label(copied: bool) -> &'static str {
    if copied { "Copied!" } else { "Copy" }
}

/// One radio option per strategy, with its label and description, `selected` checked.
pub fn strategy_options_html(selected: Strategy) -> String {
    let mut html = String::new();
    for strategy in Strategy::ALL {
        let checked = if strategy == selected { " checked" } else { "" };
        html.push_str("<label class='strategy-option'>");
        html.push_str(&format!(
            "<input type='radio' name='{STRATEGY_INPUT_NAME}' value='{}'{checked}>",
            strategy.wire_name()
        ));
        html.push_str(&format!(
            "<div><div class='strategy-label'>{}</div><div class='strategy-description'>{}</div></div>",
            escape_html(strategy.label()),
            escape_html(strategy.description())
        ));
        html.push_str("</label>");
    }
    html
}

/// The platform `<select>`, options in display order.
pub fn platform_select_html(selected: Platform) -> String {
    let mut html = format!("<select id='{PLATFORM_SELECT_ID}' class='form-input'>");
    for platform in Platform::ALL {
        let attr = if platform == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value='{}'{attr}>{}</option>",
            platform.wire_name(),
            escape_html(platform.label())
        ));
    }
    html.push_str("</select>");
    html
}

pub fn instructions_html() -> String {
    let mut html = String::from("<div class='instructions'><h3>How to use your robots.txt file</h3><ol>");
    for step in UPLOAD_INSTRUCTIONS {
        html.push_str(&format!("<li>{}</li>", escape_html(step)));
    }
    html.push_str("</ol></div>");
    html
}

/// The whole form, initialized from `input`.
pub fn form_html(input: &GenerationInput) -> String {
    let mut html = String::from("<div class='controls'>");
    html.push_str("<div><label>Visibility Strategy</label>");
    html.push_str(&strategy_options_html(input.strategy));
    html.push_str("</div>");
    html.push_str("<div><label>Platform Template</label>");
    html.push_str(&platform_select_html(input.platform));
    html.push_str("</div>");
    html.push_str(&format!(
        "<div><label>Sitemap URL (optional)</label><input type='url' id='{SITEMAP_INPUT_ID}' class='form-input' \
         placeholder='https://example.com/sitemap.xml' value='{}'></div>",
        escape_html(&input.sitemap_url)
    ));
    html.push_str("</div>");

    html.push_str("<div class='output'><label>Generated robots.txt</label>");
    html.push_str(&format!(
        "<button id='{COPY_BUTTON_ID}'>{}</button><button id='{DOWNLOAD_BUTTON_ID}'>Download</button>",
        copy_button_label(false)
    ));
    html.push_str(&format!("<pre><code id='{OUTPUT_ID}'></code></pre></div>"));
    html.push_str(&instructions_html());
    html
}
