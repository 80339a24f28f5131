//! Element model
//!
//! An [`Element`] is one positioned, styled object on a template canvas. The
//! type-specific part lives in [`ElementKind`], a closed sum type; adding an
//! element type means adding a variant and its match arms, never a subtype.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod code;
mod line;
mod media;
mod shape;
mod style;
mod text;

pub use code::{BarcodeStyle, QrStyle, Symbology};
pub use line::{LineStyle, StrokeDash};
pub use media::{ImageFit, ImageStyle, PhotoStyle};
pub use shape::{Border, Fill, ShapeKind, ShapeStyle};
pub use style::{normalize_opacity, normalize_rotation, CommonStyle, Shadow};
pub use text::{FontWeight, TextAlign, TextStyle};

/// Editable property exposed to a property panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    String(String),
    Bool(bool),
}

/// Identifier of an element, unique within a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.0.simple().to_string()[..8])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Text,
    QrCode,
    Barcode,
    Image,
    Shape,
    Line,
    Photo,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "Text",
            Self::QrCode => "QR Code",
            Self::Barcode => "Barcode",
            Self::Image => "Image",
            Self::Shape => "Shape",
            Self::Line => "Line",
            Self::Photo => "Photo",
        };
        write!(f, "{name}")
    }
}

/// Type-specific style of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Text(TextStyle),
    QrCode(QrStyle),
    Barcode(BarcodeStyle),
    Image(ImageStyle),
    Shape(ShapeStyle),
    Line(LineStyle),
    Photo(PhotoStyle),
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            Self::Text(_) => ElementType::Text,
            Self::QrCode(_) => ElementType::QrCode,
            Self::Barcode(_) => ElementType::Barcode,
            Self::Image(_) => ElementType::Image,
            Self::Shape(_) => ElementType::Shape,
            Self::Line(_) => ElementType::Line,
            Self::Photo(_) => ElementType::Photo,
        }
    }

    /// Whether the content string is meaningful (and substituted) for this type.
    pub fn uses_content(&self) -> bool {
        matches!(self, Self::Text(_) | Self::QrCode(_) | Self::Barcode(_))
    }

    /// Whether this type stores an uploaded asset URL.
    pub fn holds_asset(&self) -> bool {
        matches!(self, Self::Image(_) | Self::Photo(_))
    }

    /// The uploaded asset URL, for the types that carry one.
    pub fn asset_source(&self) -> Option<&str> {
        match self {
            Self::Image(style) => style.source.as_deref(),
            Self::Photo(style) => style.source.as_deref(),
            _ => None,
        }
    }

    /// Returns a copy with the asset URL replaced, or `None` if this type
    /// carries no asset.
    pub fn with_asset_source(&self, url: impl Into<String>) -> Option<Self> {
        match self {
            Self::Image(style) => Some(Self::Image(ImageStyle {
                source: Some(url.into()),
                ..style.clone()
            })),
            Self::Photo(style) => Some(Self::Photo(PhotoStyle {
                source: Some(url.into()),
                ..style.clone()
            })),
            _ => None,
        }
    }

    pub fn properties(&self) -> Vec<Property> {
        match self {
            Self::Text(style) => style.properties(),
            Self::QrCode(style) => style.properties(),
            Self::Barcode(style) => style.properties(),
            Self::Image(style) => style.properties(),
            Self::Shape(style) => style.properties(),
            Self::Line(style) => style.properties(),
            Self::Photo(style) => style.properties(),
        }
    }
}

/// Position and size in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Geometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub fn center_x(&self) -> f64 {
        f64::from(self.x) + f64::from(self.width) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        f64::from(self.y) + f64::from(self.height) / 2.0
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= f64::from(self.x)
            && px <= f64::from(self.right())
            && py >= f64::from(self.y)
            && py <= f64::from(self.bottom())
    }

    /// Clamps to a committable box: non-negative origin, positive size.
    pub fn normalized(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    #[serde(flatten)]
    pub geometry: Geometry,
    /// May contain `{{token}}` placeholders
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub style: CommonStyle,
    #[serde(default)]
    pub z_index: i32,
}

impl Element {
    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    pub fn is_locked(&self) -> bool {
        self.style.locked
    }

    pub fn is_visible(&self) -> bool {
        self.style.visible
    }

    /// Enforces the at-rest invariants on geometry, opacity and rotation.
    pub fn normalized(mut self) -> Self {
        self.geometry = self.geometry.normalized();
        self.style = self.style.normalized();
        self
    }

    /// Copy with a fresh id, shifted by `(dx, dy)` and placed at `z_index`.
    pub fn cloned_as_new(&self, dx: i32, dy: i32, z_index: i32) -> Self {
        let mut copy = self.clone();
        copy.id = ElementId::new();
        copy.geometry.x = copy.geometry.x.saturating_add(dx);
        copy.geometry.y = copy.geometry.y.saturating_add(dy);
        copy.z_index = z_index;
        copy.normalized()
    }

    /// Property list for a property panel: common fields then type-specific ones.
    pub fn properties(&self) -> Vec<Property> {
        let mut props = vec![
            Property::new("x", PropertyValue::Number(f64::from(self.geometry.x))),
            Property::new("y", PropertyValue::Number(f64::from(self.geometry.y))),
            Property::new("width", PropertyValue::Number(f64::from(self.geometry.width))),
            Property::new(
                "height",
                PropertyValue::Number(f64::from(self.geometry.height)),
            ),
            Property::new("opacity", PropertyValue::Number(self.style.opacity)),
            Property::new("rotation", PropertyValue::Number(self.style.rotation)),
            Property::new("locked", PropertyValue::Bool(self.style.locked)),
            Property::new("visible", PropertyValue::Bool(self.style.visible)),
        ];
        if self.kind.uses_content() {
            props.push(Property::new(
                "content",
                PropertyValue::String(self.content.clone()),
            ));
        }
        props.extend(self.kind.properties());
        props
    }
}

/// Everything needed to create an element except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDraft {
    pub kind: ElementKind,
    pub geometry: Geometry,
    pub content: String,
    pub style: CommonStyle,
    /// `None` places the element above everything else
    pub z_index: Option<i32>,
}

impl ElementDraft {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            geometry: Geometry::new(0, 0, 200, 50),
            content: String::new(),
            style: CommonStyle::default(),
            z_index: None,
        }
    }

    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self
    }

    pub fn sized(mut self, width: i32, height: i32) -> Self {
        self.geometry.width = width;
        self.geometry.height = height;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(mut self, style: CommonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub(crate) fn into_element(self, id: ElementId, z_index: i32) -> Element {
        Element {
            id,
            kind: self.kind,
            geometry: self.geometry,
            content: self.content,
            style: self.style,
            z_index: self.z_index.unwrap_or(z_index),
        }
        .normalized()
    }
}

/// Whole-field replacement for an element. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub content: Option<String>,
    pub kind: Option<ElementKind>,
    pub opacity: Option<f64>,
    pub rotation: Option<f64>,
    pub shadow: Option<Option<Shadow>>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub z_index: Option<i32>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn geometry(self, geometry: Geometry) -> Self {
        self.position(geometry.x, geometry.y)
            .size(geometry.width, geometry.height)
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn kind(mut self, kind: ElementKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Builds the patched element. The input is left untouched.
    pub fn apply(&self, element: &Element) -> Element {
        let mut next = element.clone();
        if let Some(x) = self.x {
            next.geometry.x = x;
        }
        if let Some(y) = self.y {
            next.geometry.y = y;
        }
        if let Some(width) = self.width {
            next.geometry.width = width;
        }
        if let Some(height) = self.height {
            next.geometry.height = height;
        }
        if let Some(content) = &self.content {
            next.content = content.clone();
        }
        if let Some(kind) = &self.kind {
            next.kind = kind.clone();
        }
        if let Some(opacity) = self.opacity {
            next.style.opacity = opacity;
        }
        if let Some(rotation) = self.rotation {
            next.style.rotation = rotation;
        }
        if let Some(shadow) = &self.shadow {
            next.style.shadow = shadow.clone();
        }
        if let Some(locked) = self.locked {
            next.style.locked = locked;
        }
        if let Some(visible) = self.visible {
            next.style.visible = visible;
        }
        if let Some(z_index) = self.z_index {
            next.z_index = z_index;
        }
        next.normalized()
    }
}
