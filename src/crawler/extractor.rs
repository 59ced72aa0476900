//! Page text extraction
//!
//! Reduces a fetched page to its visible text, one line per block-level
//! element, trimmed. Extraction failure never drops the page: the record is
//! still produced with a fixed sentinel as its content so delivery happens
//! either way.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Content value delivered when extraction fails for a page
pub const EXTRACTION_FAILED: &str = "Error extracting content";

/// One extracted page, as delivered downstream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    pub source_link: String,
    pub content: String,
}

/// Produces the delivery record for a fetched page
///
/// On extraction failure the failure is logged and `content` is set to
/// [`EXTRACTION_FAILED`]; the record itself is always returned.
pub fn extract(html: &str, url: &str) -> ExtractedRecord {
    let content = match extract_text(html) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Content extraction failed for {}: {}", url, e);
            EXTRACTION_FAILED.to_string()
        }
    };

    ExtractedRecord {
        source_link: url.to_string(),
        content,
    }
}

/// Extracts the page's text with block-level separation as line breaks
fn extract_text(html: &str) -> Result<String, String> {
    let document = Html::parse_document(html);

    let body_selector =
        Selector::parse("body").map_err(|e| format!("invalid body selector: {:?}", e))?;
    let root = document
        .select(&body_selector)
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut raw = String::new();
    collect_text(root, &mut raw);

    let text = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(text)
}

/// Walks the subtree under `element`, appending text nodes and inserting a
/// line break around each block-level element
fn collect_text(element: ElementRef, out: &mut String) {
    for node in element.children() {
        if let Some(text) = node.value().as_text() {
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(node) {
            let name = child.value().name();
            if matches!(name, "script" | "style" | "noscript" | "template") {
                continue;
            }

            let block = is_block(name);
            if block {
                ensure_break(out);
            }
            collect_text(child, out);
            if block {
                ensure_break(out);
            }
        }
    }
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "address"
            | "article"
            | "aside"
            | "blockquote"
            | "br"
            | "dd"
            | "div"
            | "dl"
            | "dt"
            | "fieldset"
            | "figure"
            | "footer"
            | "form"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "header"
            | "hr"
            | "li"
            | "main"
            | "nav"
            | "ol"
            | "p"
            | "pre"
            | "section"
            | "table"
            | "td"
            | "th"
            | "tr"
            | "ul"
    )
}

fn ensure_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_become_lines() {
        let html = "<html><body><h1>Title</h1><p>First</p><p>Second</p></body></html>";
        let record = extract(html, "https://example.com/imovel/1/");
        assert_eq!(record.content, "Title\nFirst\nSecond");
    }

    #[test]
    fn test_inline_elements_stay_on_one_line() {
        let html = "<html><body><p>Price: <b>100</b> euros</p></body></html>";
        let record = extract(html, "https://example.com/imovel/1/");
        assert_eq!(record.content, "Price: 100 euros");
    }

    #[test]
    fn test_script_and_style_skipped() {
        let html = r#"<html><body>
            <p>Visible</p>
            <script>var hidden = 1;</script>
            <style>.x { color: red; }</style>
        </body></html>"#;
        let record = extract(html, "https://example.com/imovel/1/");
        assert_eq!(record.content, "Visible");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let html = "<html><body><p>   padded   </p><div>\n\n</div></body></html>";
        let record = extract(html, "https://example.com/imovel/1/");
        assert_eq!(record.content, "padded");
    }

    #[test]
    fn test_list_items_separated() {
        let html = "<html><body><ul><li>One</li><li>Two</li></ul></body></html>";
        let record = extract(html, "https://example.com/imovel/1/");
        assert_eq!(record.content, "One\nTwo");
    }

    #[test]
    fn test_br_breaks_line() {
        let html = "<html><body><p>Rua X<br>Lisboa</p></body></html>";
        let record = extract(html, "https://example.com/imovel/1/");
        assert_eq!(record.content, "Rua X\nLisboa");
    }

    #[test]
    fn test_empty_page_gives_empty_content() {
        let record = extract("<html><body></body></html>", "https://example.com/");
        assert_eq!(record.content, "");
    }

    #[test]
    fn test_record_keeps_source_link() {
        let record = extract("<html><body><p>x</p></body></html>", "https://example.com/imovel/2/");
        assert_eq!(record.source_link, "https://example.com/imovel/2/");
    }

    #[test]
    fn test_wire_format_field_names() {
        let record = extract("<html><body><p>x</p></body></html>", "https://example.com/");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["source_link"], "https://example.com/");
        assert_eq!(value["content"], "x");
    }
}
