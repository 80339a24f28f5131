use serde::{Deserialize, Serialize};

use super::{Property, PropertyValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    RoundedRectangle,
    Circle,
    Triangle,
}

/// Fill of a shape: flat color or a two-stop gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fill {
    Solid {
        color: String,
    },
    LinearGradient {
        from: String,
        to: String,
        /// Degrees, 0 = left to right
        #[serde(default)]
        angle: f64,
    },
    RadialGradient {
        from: String,
        to: String,
    },
}

impl Default for Fill {
    fn default() -> Self {
        Self::Solid {
            color: "#e5e7eb".to_string(),
        }
    }
}

impl Fill {
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid {
            color: color.into(),
        }
    }

    /// Both gradient stops, or the flat color twice.
    pub fn stops(&self) -> (&str, &str) {
        match self {
            Self::Solid { color } => (color.as_str(), color.as_str()),
            Self::LinearGradient { from, to, .. } | Self::RadialGradient { from, to } => {
                (from.as_str(), to.as_str())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeStyle {
    pub shape: ShapeKind,
    pub fill: Fill,
    pub border: Option<Border>,
    /// Only used by rounded rectangles
    pub corner_radius: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Rectangle,
            fill: Fill::default(),
            border: None,
            corner_radius: 12.0,
        }
    }
}

impl ShapeStyle {
    pub fn new(shape: ShapeKind) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    /// Corner radius actually applied, capped at half the shorter side.
    pub fn effective_corner_radius(&self, width: i32, height: i32) -> f64 {
        match self.shape {
            ShapeKind::RoundedRectangle => {
                let cap = f64::from(width.min(height)) / 2.0;
                self.corner_radius.clamp(0.0, cap.max(0.0))
            }
            _ => 0.0,
        }
    }

    pub(super) fn properties(&self) -> Vec<Property> {
        let (from, to) = self.fill.stops();
        let mut props = vec![
            Property::new(
                "shape",
                PropertyValue::String(format!("{:?}", self.shape)),
            ),
            Property::new("fill_from", PropertyValue::String(from.to_string())),
            Property::new("fill_to", PropertyValue::String(to.to_string())),
            Property::new("corner_radius", PropertyValue::Number(self.corner_radius)),
        ];
        if let Some(border) = &self.border {
            props.push(Property::new(
                "border_color",
                PropertyValue::String(border.color.clone()),
            ));
            props.push(Property::new(
                "border_width",
                PropertyValue::Number(border.width),
            ));
        }
        props
    }
}
