//! HTML content extraction with `scraper`.

use super::ContentError;
use council_domain::{ContentModel, ImageInfo};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

const MAX_HEADINGS: usize = 12;
const MAX_NAV_ITEMS: usize = 12;
const MAX_CTA_LABELS: usize = 8;
const MAX_PARAGRAPHS: usize = 5;
const MAX_COLORS: usize = 8;
const MAX_FONTS: usize = 4;
/// Shortest paragraph worth sampling
const MIN_PARAGRAPH_CHARS: usize = 20;

static HEX_COLOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"#(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b").ok());
static FONT_FAMILY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"font-family\s*:\s*([^;}]+)"#).ok());

/// Builds a [`ContentModel`] from raw markup
///
/// Reads `<title>`, the meta description, `h1`–`h3`, navigation links,
/// button-like labels, paragraph samples, hex colors and `font-family`
/// declarations from inline styles and `<style>` blocks, and image alt
/// presence.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlContentExtractor;

impl HtmlContentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, html: &str) -> Result<ContentModel, ContentError> {
        let document = Html::parse_document(html);

        let headings = texts(&document, "h1, h2, h3", MAX_HEADINGS);
        let title = texts(&document, "title", 1)
            .into_iter()
            .next()
            .or_else(|| headings.first().cloned())
            .unwrap_or_default();
        let description = attr_values(&document, r#"meta[name="description"]"#, "content")
            .into_iter()
            .next()
            .unwrap_or_default();

        let mut cta_labels = texts(
            &document,
            r#"button, a.btn, a.button, [role="button"]"#,
            MAX_CTA_LABELS,
        );
        for value in attr_values(&document, r#"input[type="submit"]"#, "value") {
            push_unique(&mut cta_labels, value, MAX_CTA_LABELS);
        }

        let paragraphs: Vec<String> = texts(&document, "p", usize::MAX)
            .into_iter()
            .filter(|p| p.chars().count() >= MIN_PARAGRAPH_CHARS)
            .take(MAX_PARAGRAPHS)
            .collect();

        let styles = style_sources(&document);
        let model = ContentModel {
            title,
            description,
            nav_items: texts(&document, "nav a", MAX_NAV_ITEMS),
            headings,
            cta_labels,
            paragraphs,
            colors: colors(&styles),
            fonts: fonts(&styles),
            images: images(&document),
        };

        if model.title.is_empty() && model.headings.is_empty() && model.paragraphs.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(model)
    }
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn element_text(element: ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_unique(items: &mut Vec<String>, value: String, limit: usize) {
    if items.len() < limit && !value.is_empty() && !items.contains(&value) {
        items.push(value);
    }
}

/// Distinct non-empty texts of the matching elements, in document order
fn texts(document: &Html, css: &str, limit: usize) -> Vec<String> {
    let mut found = Vec::new();
    if let Some(sel) = selector(css) {
        for element in document.select(&sel) {
            push_unique(&mut found, element_text(element), limit);
        }
    }
    found
}

fn attr_values(document: &Html, css: &str, attr: &str) -> Vec<String> {
    let Some(sel) = selector(css) else {
        return Vec::new();
    };
    document
        .select(&sel)
        .filter_map(|e| e.value().attr(attr))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Inline `style` attributes followed by `<style>` block contents
fn style_sources(document: &Html) -> Vec<String> {
    let mut sources = attr_values(document, "[style]", "style");
    if let Some(sel) = selector("style") {
        sources.extend(document.select(&sel).map(|e| e.text().collect::<String>()));
    }
    sources
}

fn colors(styles: &[String]) -> Vec<String> {
    let Some(re) = HEX_COLOR.as_ref() else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for style in styles {
        for m in re.find_iter(style) {
            push_unique(&mut found, m.as_str().to_lowercase(), MAX_COLORS);
        }
    }
    found
}

fn fonts(styles: &[String]) -> Vec<String> {
    let Some(re) = FONT_FAMILY.as_ref() else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for style in styles {
        for caps in re.captures_iter(style) {
            let family = caps
                .get(1)
                .and_then(|m| m.as_str().split(',').next())
                .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
                .unwrap_or_default();
            push_unique(&mut found, family, MAX_FONTS);
        }
    }
    found
}

fn images(document: &Html) -> Vec<ImageInfo> {
    let Some(sel) = selector("img") else {
        return Vec::new();
    };
    document
        .select(&sel)
        .map(|img| {
            let src = img.value().attr("src").unwrap_or_default();
            let has_alt = img
                .value()
                .attr("alt")
                .is_some_and(|alt| !alt.trim().is_empty());
            ImageInfo::new(src, has_alt)
        })
        .collect()
}
