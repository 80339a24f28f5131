//! Ready-made element drafts for the "add" palette.
//!
//! Each factory returns an [`ElementDraft`]; the template assigns the id and
//! z-index when the draft is added.

use crate::model::{
    BarcodeStyle, ElementDraft, ElementKind, ImageStyle, LineStyle, PhotoStyle, QrStyle,
    ShapeKind, ShapeStyle, Symbology, TextStyle,
};
use crate::placeholders::Token;
use crate::template::CanvasPreset;

/// Content given to new QR codes.
pub const DEFAULT_QR_CONTENT: &str = "{{registration_number}}";

/// Text element bound to one placeholder field.
pub fn field(token: Token) -> ElementDraft {
    let style = match token {
        Token::Name => TextStyle::default().sized(40.0).bold(),
        Token::EventName => TextStyle::default().sized(32.0),
        _ => TextStyle::default(),
    };
    let height = (style.font_size * style.line_height).ceil() as i32;
    ElementDraft::new(ElementKind::Text(style))
        .at(100, 100)
        .sized(400, height.max(1))
        .with_content(token.marker())
}

/// Free text with literal content.
pub fn text(content: impl Into<String>) -> ElementDraft {
    ElementDraft::new(ElementKind::Text(TextStyle::default()))
        .at(100, 100)
        .sized(300, 40)
        .with_content(content)
}

pub fn shape(kind: ShapeKind) -> ElementDraft {
    let (width, height) = match kind {
        ShapeKind::Circle => (150, 150),
        ShapeKind::Triangle => (160, 140),
        ShapeKind::Rectangle | ShapeKind::RoundedRectangle => (200, 120),
    };
    ElementDraft::new(ElementKind::Shape(ShapeStyle::new(kind)))
        .at(100, 100)
        .sized(width, height)
}

/// Horizontal rule; height is the hit area, not the stroke.
pub fn line() -> ElementDraft {
    ElementDraft::new(ElementKind::Line(LineStyle::default()))
        .at(100, 100)
        .sized(300, 10)
}

pub fn qr_code() -> ElementDraft {
    ElementDraft::new(ElementKind::QrCode(QrStyle::default()))
        .at(100, 100)
        .sized(150, 150)
        .with_content(DEFAULT_QR_CONTENT)
}

pub fn barcode(symbology: Symbology) -> ElementDraft {
    let content = match symbology {
        // EAN-13 only encodes digits
        Symbology::Ean13 => "590123412345".to_string(),
        _ => Token::RegistrationNumber.marker(),
    };
    ElementDraft::new(ElementKind::Barcode(BarcodeStyle::new(symbology)))
        .at(100, 100)
        .sized(260, 90)
        .with_content(content)
}

/// Image slot; the source is filled in when an upload completes.
pub fn image() -> ElementDraft {
    ElementDraft::new(ElementKind::Image(ImageStyle::default()))
        .at(100, 100)
        .sized(200, 150)
}

/// Circular recipient photo placeholder.
pub fn photo() -> ElementDraft {
    ElementDraft::new(ElementKind::Photo(PhotoStyle::default()))
        .at(100, 100)
        .sized(140, 140)
}

/// Full-canvas rectangle pinned to z-index 0, below every added element.
pub fn background(preset: CanvasPreset, color: impl Into<String>) -> ElementDraft {
    let (width, height) = preset.dimensions();
    let style = ShapeStyle::new(ShapeKind::Rectangle).with_fill(crate::model::Fill::solid(color));
    ElementDraft::new(ElementKind::Shape(style))
        .at(0, 0)
        .sized(width, height)
        .with_z_index(0)
}
