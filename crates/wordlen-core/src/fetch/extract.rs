//! Visible body text from an HTML document.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never renders.
const HIDDEN: &[&str] = &["script", "style", "noscript", "template", "head"];

/// Elements that break the text flow; their content is separated from neighbours.
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Extracts the text a reader would see in `<body>`, whitespace collapsed to single spaces.
///
/// Script, style, and template content is skipped. Inline markup does not split words
/// (`foo<b>bar</b>` reads as `foobar`); block elements do.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let body_selector = match Selector::parse("body") {
        Ok(s) => s,
        Err(_) => return String::new(),
    };
    let Some(body) = document.select(&body_selector).next() else {
        return String::new();
    };

    let mut raw = String::new();
    collect_text(body, &mut raw);
    normalize_whitespace(&raw)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                let Some(el) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = el.value().name();
                if HIDDEN.contains(&name) {
                    continue;
                }
                let block = BLOCK.contains(&name);
                if block {
                    out.push(' ');
                }
                collect_text(el, out);
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

fn normalize_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
