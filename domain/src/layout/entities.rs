//! Layout entities - the candidate mobile layout produced by the designer.

use super::value_objects::{ColorPalette, Typography};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of a mobile layout section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Navigation,
    Hero,
    Content,
    Features,
    #[serde(alias = "call-to-action")]
    Cta,
    Footer,
    Form,
    Gallery,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Navigation => "navigation",
            SectionKind::Hero => "hero",
            SectionKind::Content => "content",
            SectionKind::Features => "features",
            SectionKind::Cta => "cta",
            SectionKind::Footer => "footer",
            SectionKind::Form => "form",
            SectionKind::Gallery => "gallery",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "navigation" | "nav" | "header" => Ok(SectionKind::Navigation),
            "hero" => Ok(SectionKind::Hero),
            "content" => Ok(SectionKind::Content),
            "features" => Ok(SectionKind::Features),
            "cta" | "call-to-action" => Ok(SectionKind::Cta),
            "footer" => Ok(SectionKind::Footer),
            "form" => Ok(SectionKind::Form),
            "gallery" => Ok(SectionKind::Gallery),
            other => Err(format!("Unknown section kind: {}", other)),
        }
    }
}

/// One section of a mobile layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSection {
    pub id: String,
    pub kind: SectionKind,
    pub title: String,
    /// Markup fragment rendered inside the section
    pub body: String,
    /// CSS-like style properties; ordered for reproducible output
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
}

impl LayoutSection {
    pub fn new(
        id: impl Into<String>,
        kind: SectionKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            body: body.into(),
            styles: BTreeMap::new(),
        }
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }
}

/// Candidate mobile layout for one pass
///
/// One candidate exists per pass. The candidate of a losing pass is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCandidate {
    pub sections: Vec<LayoutSection>,
    pub palette: ColorPalette,
    pub typography: Typography,
}

impl LayoutCandidate {
    pub fn new(sections: Vec<LayoutSection>, palette: ColorPalette, typography: Typography) -> Self {
        Self {
            sections,
            palette,
            typography,
        }
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|s| s.kind).collect()
    }
}
