// Imports
use serde::{Deserialize, Serialize};

/// The size of the strokes of a shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "size_style")]
pub enum SizeStyle {
    /// Small
    #[serde(rename = "small")]
    Small,
    /// Medium
    #[default]
    #[serde(rename = "medium")]
    Medium,
    /// Large
    #[serde(rename = "large")]
    Large,
    /// Extra large
    #[serde(rename = "extra_large")]
    ExtraLarge,
}

impl SizeStyle {
    /// The stroke width for the size.
    pub fn stroke_width(&self) -> f64 {
        match self {
            SizeStyle::Small => 2.0,
            SizeStyle::Medium => 3.5,
            SizeStyle::Large => 5.0,
            SizeStyle::ExtraLarge => 9.0,
        }
    }
}

/// The style parameters of a shape that influence its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "shape_style")]
pub struct ShapeStyle {
    /// The stroke size.
    #[serde(rename = "size")]
    pub size: SizeStyle,
    /// Scale factor, applied to the extents of text.
    #[serde(rename = "scale")]
    pub scale: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            size: SizeStyle::default(),
            scale: 1.0,
        }
    }
}

impl ShapeStyle {
    /// The stroke width.
    pub fn stroke_width(&self) -> f64 {
        self.size.stroke_width()
    }
}
