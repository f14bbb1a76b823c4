use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Answer from the FAQ search box, markdown-like text rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAnswer {
    pub text: String,
}

struct MarkdownRules {
    bold: Regex,
    emphasis: Regex,
    list_item: Regex,
    list_run: Regex,
}

static RULES: OnceLock<MarkdownRules> = OnceLock::new();

fn rules() -> &'static MarkdownRules {
    RULES.get_or_init(|| MarkdownRules {
        bold: Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"),
        emphasis: Regex::new(r"\*(.*?)\*").expect("emphasis pattern"),
        list_item: Regex::new(r"(?m)^- (.*)$").expect("list item pattern"),
        list_run: Regex::new(r"(?s)(<li>.*?</li>)").expect("list run pattern"),
    })
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl SearchAnswer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Render the small markdown subset the model is asked to use: bold,
    /// emphasis, `- ` bullet lists and line breaks. Model text is escaped
    /// first, so the output only ever contains the tags produced here.
    pub fn to_html(&self) -> String {
        let rules = rules();
        let text = escape_html(&self.text.replace("\r\n", "\n"));

        let html = rules.bold.replace_all(&text, "<strong>${1}</strong>");
        let html = rules.emphasis.replace_all(&html, "<em>${1}</em>");
        let html = rules.list_item.replace_all(&html, "<li>${1}</li>");
        let html = html.replace('\n', "<br />");

        rules
            .list_run
            .replace_all(&html, "<ul>${1}</ul>")
            .replace("</ul><br /><ul>", "")
    }
}
