use serde::{Deserialize, Serialize};

use super::{Property, PropertyValue};

/// One-dimensional barcode symbologies supported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    #[default]
    Code128,
    Code39,
    Code93,
    Ean13,
}

impl Symbology {
    pub const ALL: [Symbology; 4] = [Self::Code128, Self::Code39, Self::Code93, Self::Ean13];

    pub fn label(self) -> &'static str {
        match self {
            Self::Code128 => "CODE 128",
            Self::Code39 => "CODE 39",
            Self::Code93 => "CODE 93",
            Self::Ean13 => "EAN-13",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QrStyle {
    pub foreground: String,
    pub background: String,
}

impl Default for QrStyle {
    fn default() -> Self {
        Self {
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl QrStyle {
    pub(super) fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("foreground", PropertyValue::String(self.foreground.clone())),
            Property::new("background", PropertyValue::String(self.background.clone())),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarcodeStyle {
    pub symbology: Symbology,
    pub foreground: String,
    pub background: String,
    /// Print the encoded value under the bars
    pub show_text: bool,
}

impl Default for BarcodeStyle {
    fn default() -> Self {
        Self {
            symbology: Symbology::Code128,
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
            show_text: true,
        }
    }
}

impl BarcodeStyle {
    pub fn new(symbology: Symbology) -> Self {
        Self {
            symbology,
            ..Self::default()
        }
    }

    pub(super) fn properties(&self) -> Vec<Property> {
        vec![
            Property::new(
                "symbology",
                PropertyValue::String(self.symbology.label().to_string()),
            ),
            Property::new("foreground", PropertyValue::String(self.foreground.clone())),
            Property::new("background", PropertyValue::String(self.background.clone())),
            Property::new("show_text", PropertyValue::Bool(self.show_text)),
        ]
    }
}
