use serde::{Deserialize, Serialize};

use super::{Property, PropertyValue};
use crate::placeholders::TextCase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub italic: bool,
    pub color: String,
    pub align: TextAlign,
    /// Multiplier of the font size
    pub line_height: f64,
    /// Extra spacing between glyphs in pixels
    pub letter_spacing: f64,
    /// Applied to the content after placeholder substitution
    pub text_case: TextCase,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_size: 24.0,
            font_weight: FontWeight::Normal,
            italic: false,
            color: "#111827".to_string(),
            align: TextAlign::Center,
            line_height: 1.2,
            letter_spacing: 0.0,
            text_case: TextCase::None,
        }
    }
}

impl TextStyle {
    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    pub fn sized(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub(super) fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("font_family", PropertyValue::String(self.font_family.clone())),
            Property::new("font_size", PropertyValue::Number(self.font_size)),
            Property::new(
                "bold",
                PropertyValue::Bool(self.font_weight == FontWeight::Bold),
            ),
            Property::new("italic", PropertyValue::Bool(self.italic)),
            Property::new("color", PropertyValue::String(self.color.clone())),
            Property::new(
                "align",
                PropertyValue::String(format!("{:?}", self.align).to_lowercase()),
            ),
            Property::new("line_height", PropertyValue::Number(self.line_height)),
            Property::new("letter_spacing", PropertyValue::Number(self.letter_spacing)),
            Property::new(
                "text_case",
                PropertyValue::String(self.text_case.key().to_string()),
            ),
        ]
    }
}
