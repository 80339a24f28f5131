use serde::{Deserialize, Serialize};

use super::shape::Border;
use super::{Property, PropertyValue};

/// How a raster image is fitted into its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Contain,
    Cover,
    Fill,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageStyle {
    /// URL returned by the asset upload service
    pub source: Option<String>,
    pub fit: ImageFit,
}

impl ImageStyle {
    pub(super) fn properties(&self) -> Vec<Property> {
        vec![
            Property::new(
                "source",
                PropertyValue::String(self.source.clone().unwrap_or_default()),
            ),
            Property::new(
                "fit",
                PropertyValue::String(format!("{:?}", self.fit).to_lowercase()),
            ),
        ]
    }
}

/// Recipient photo slot. Drawn as a circle unless the radius is lowered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoStyle {
    pub source: Option<String>,
    /// Percentage of the shorter side, 50 = circle
    pub border_radius: f64,
    pub border: Option<Border>,
}

impl Default for PhotoStyle {
    fn default() -> Self {
        Self {
            source: None,
            border_radius: 50.0,
            border: None,
        }
    }
}

impl PhotoStyle {
    pub(super) fn properties(&self) -> Vec<Property> {
        vec![
            Property::new(
                "source",
                PropertyValue::String(self.source.clone().unwrap_or_default()),
            ),
            Property::new("border_radius", PropertyValue::Number(self.border_radius)),
        ]
    }
}
