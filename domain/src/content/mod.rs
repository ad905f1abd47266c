//! Page content model
//!
//! [`ContentModel`] is the normalized output of the content extractor. It is
//! built once per run by the caller and only read by the orchestration core.

use serde::{Deserialize, Serialize};

/// Primary color used when the page declares none
pub const DEFAULT_PRIMARY_COLOR: &str = "#2563eb";

/// An image found on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Image source URL as written in the markup
    pub src: String,
    /// Whether the image carries non-empty alt text
    pub has_alt: bool,
}

impl ImageInfo {
    pub fn new(src: impl Into<String>, has_alt: bool) -> Self {
        Self {
            src: src.into(),
            has_alt,
        }
    }
}

/// Normalized content of the analyzed page
///
/// # Example
///
/// ```
/// use council_domain::ContentModel;
///
/// let content = ContentModel::new("Acme Bakery")
///     .with_headings(vec!["Fresh bread daily".into()])
///     .with_colors(vec!["#aa3300".into()]);
///
/// assert_eq!(content.primary_color(), "#aa3300");
/// assert_eq!(content.first_heading(), Some("Fresh bread daily"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentModel {
    pub title: String,
    pub description: String,
    pub nav_items: Vec<String>,
    pub headings: Vec<String>,
    pub cta_labels: Vec<String>,
    pub paragraphs: Vec<String>,
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
    pub images: Vec<ImageInfo>,
}

impl ContentModel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_nav_items(mut self, items: Vec<String>) -> Self {
        self.nav_items = items;
        self
    }

    pub fn with_headings(mut self, headings: Vec<String>) -> Self {
        self.headings = headings;
        self
    }

    pub fn with_cta_labels(mut self, labels: Vec<String>) -> Self {
        self.cta_labels = labels;
        self
    }

    pub fn with_paragraphs(mut self, paragraphs: Vec<String>) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_fonts(mut self, fonts: Vec<String>) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn with_images(mut self, images: Vec<ImageInfo>) -> Self {
        self.images = images;
        self
    }

    /// The site's primary color: the first detected color, or a neutral blue.
    pub fn primary_color(&self) -> &str {
        self.colors
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_PRIMARY_COLOR)
    }

    pub fn first_heading(&self) -> Option<&str> {
        self.headings.first().map(String::as_str)
    }

    pub fn first_cta(&self) -> Option<&str> {
        self.cta_labels.first().map(String::as_str)
    }

    /// Number of images without alt text
    pub fn images_missing_alt(&self) -> usize {
        self.images.iter().filter(|i| !i.has_alt).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_color_defaults() {
        let content = ContentModel::new("Site");
        assert_eq!(content.primary_color(), DEFAULT_PRIMARY_COLOR);
    }

    #[test]
    fn test_images_missing_alt() {
        let content = ContentModel::new("Site").with_images(vec![
            ImageInfo::new("a.png", true),
            ImageInfo::new("b.png", false),
            ImageInfo::new("c.png", false),
        ]);
        assert_eq!(content.images_missing_alt(), 2);
    }

    #[test]
    fn test_deserialize_partial_json() {
        let content: ContentModel =
            serde_json::from_str(r#"{"title": "Only title", "headings": ["H"]}"#).unwrap();
        assert_eq!(content.title, "Only title");
        assert_eq!(content.first_heading(), Some("H"));
        assert!(content.nav_items.is_empty());
        assert!(content.first_cta().is_none());
    }
}
