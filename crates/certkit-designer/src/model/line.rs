use serde::{Deserialize, Serialize};

use super::{Property, PropertyValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl StrokeDash {
    /// Dash pattern as (on, off) lengths relative to the stroke thickness.
    pub fn pattern(self, thickness: f64) -> Option<(f64, f64)> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some((thickness * 4.0, thickness * 2.0)),
            Self::Dotted => Some((thickness, thickness * 2.0)),
        }
    }
}

/// A straight line drawn horizontally across the element's box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineStyle {
    pub color: String,
    pub thickness: f64,
    pub dash: StrokeDash,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#111827".to_string(),
            thickness: 2.0,
            dash: StrokeDash::Solid,
        }
    }
}

impl LineStyle {
    pub(super) fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("color", PropertyValue::String(self.color.clone())),
            Property::new("thickness", PropertyValue::Number(self.thickness)),
            Property::new(
                "dash",
                PropertyValue::String(format!("{:?}", self.dash).to_lowercase()),
            ),
        ]
    }
}
