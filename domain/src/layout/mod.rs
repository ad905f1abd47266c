//! Mobile layout domain
//!
//! The designer stage turns a [`StructuralSummary`] (and, on refinement, a
//! [`FeedbackSummary`]) into a [`LayoutCandidate`].

pub mod entities;
pub mod value_objects;

pub use entities::{LayoutCandidate, LayoutSection, SectionKind};
pub use value_objects::{ColorPalette, FeedbackSummary, StructuralSummary, Typography, is_hex_color};
