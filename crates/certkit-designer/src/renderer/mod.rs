//! Rendering adapter.
//!
//! Turns a template plus an optional data record into a [`RenderPlan`]: the
//! drawables an external preview or export renderer paints, in paint order,
//! with placeholders already substituted. Nothing here rasterizes.

mod codes;

pub use codes::{encode_barcode, encode_qr, QrMatrix, QR_EC_LEVEL};

use certkit_core::DataRecord;
use serde::Serialize;

use crate::model::{
    Border, Element, ElementId, ElementKind, Fill, FontWeight, ImageFit, Shadow, ShapeKind,
    Symbology, TextAlign,
};
use crate::placeholders::{render_text, substitute};
use crate::template::Template;

/// Everything an external renderer needs for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub template_id: Option<String>,
    pub width: i32,
    pub height: i32,
    pub background_color: String,
    pub background_image: Option<String>,
    /// Bottom to top
    pub items: Vec<RenderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub id: ElementId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// 0.0 to 1.0
    pub opacity: f64,
    pub rotation: f64,
    pub shadow: Option<Shadow>,
    pub drawable: Drawable,
}

/// Per-element drawable description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Drawable {
    Text {
        text: String,
        font_family: String,
        font_size: f64,
        font_weight: FontWeight,
        italic: bool,
        color: String,
        align: TextAlign,
        line_height: f64,
        letter_spacing: f64,
    },
    QrCode {
        data: String,
        matrix: QrMatrix,
        foreground: String,
        background: String,
    },
    Barcode {
        data: String,
        symbology: Symbology,
        bars: Vec<bool>,
        /// Human-readable line under the bars
        caption: Option<String>,
        foreground: String,
        background: String,
    },
    Image {
        source: Option<String>,
        fit: ImageFit,
    },
    Shape {
        shape: ShapeKind,
        fill: Fill,
        border: Option<Border>,
        corner_radius: f64,
    },
    Line {
        color: String,
        thickness: f64,
        /// (dash, gap) lengths; `None` is a solid stroke
        dash: Option<(f64, f64)>,
    },
    Photo {
        source: Option<String>,
        border_radius: f64,
        border: Option<Border>,
        /// No photo uploaded; draw the placeholder icon
        show_fallback_icon: bool,
    },
    /// Content that the element's encoder rejected, e.g. letters in an EAN-13
    Invalid {
        reason: String,
    },
}

/// Builds the drawable for one element.
pub fn drawable_for(element: &Element, record: Option<&DataRecord>) -> Drawable {
    match &element.kind {
        ElementKind::Text(style) => Drawable::Text {
            text: render_text(&element.content, record, style.text_case),
            font_family: style.font_family.clone(),
            font_size: style.font_size,
            font_weight: style.font_weight,
            italic: style.italic,
            color: style.color.clone(),
            align: style.align,
            line_height: style.line_height,
            letter_spacing: style.letter_spacing,
        },
        ElementKind::QrCode(style) => {
            let data = substitute(&element.content, record);
            match encode_qr(&data) {
                Ok(matrix) => Drawable::QrCode {
                    data,
                    matrix,
                    foreground: style.foreground.clone(),
                    background: style.background.clone(),
                },
                Err(reason) => invalid(element, reason),
            }
        }
        ElementKind::Barcode(style) => {
            let data = substitute(&element.content, record);
            match encode_barcode(style.symbology, &data) {
                Ok(bars) => Drawable::Barcode {
                    caption: style.show_text.then(|| data.clone()),
                    data,
                    symbology: style.symbology,
                    bars,
                    foreground: style.foreground.clone(),
                    background: style.background.clone(),
                },
                Err(reason) => invalid(element, reason),
            }
        }
        ElementKind::Image(style) => Drawable::Image {
            source: style.source.clone(),
            fit: style.fit,
        },
        ElementKind::Shape(style) => Drawable::Shape {
            shape: style.shape,
            fill: style.fill.clone(),
            border: style.border.clone(),
            corner_radius: style
                .effective_corner_radius(element.geometry.width, element.geometry.height),
        },
        ElementKind::Line(style) => Drawable::Line {
            color: style.color.clone(),
            thickness: style.thickness,
            dash: style.dash.pattern(style.thickness),
        },
        ElementKind::Photo(style) => Drawable::Photo {
            show_fallback_icon: style.source.is_none(),
            source: style.source.clone(),
            border_radius: style.border_radius,
            border: style.border.clone(),
        },
    }
}

fn invalid(element: &Element, reason: String) -> Drawable {
    tracing::debug!("{} {} not drawable: {}", element.element_type(), element.id, reason);
    Drawable::Invalid { reason }
}

/// Builds the render plan for `template` against `record`.
///
/// Hidden elements are skipped. With no record every placeholder shows its
/// sample value.
pub fn render_template(template: &Template, record: Option<&DataRecord>) -> RenderPlan {
    let (width, height) = template.canvas_size();
    let items = template
        .paint_order()
        .into_iter()
        .filter(|element| element.is_visible())
        .map(|element| RenderItem {
            id: element.id,
            x: element.geometry.x,
            y: element.geometry.y,
            width: element.geometry.width,
            height: element.geometry.height,
            opacity: element.style.opacity / 100.0,
            rotation: element.style.rotation,
            shadow: element.style.shadow.clone(),
            drawable: drawable_for(element, record),
        })
        .collect();

    RenderPlan {
        template_id: template.id.clone(),
        width,
        height,
        background_color: template.background_color.clone(),
        background_image: template.background_image.clone(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementPatch, PhotoStyle, Symbology};
    use crate::placeholders::{TextCase, Token};
    use crate::presets;

    #[test]
    fn test_text_is_substituted_and_cased() {
        let mut draft = presets::field(Token::Name);
        if let ElementKind::Text(style) = &mut draft.kind {
            style.text_case = TextCase::Uppercase;
        }
        let (template, _) = Template::default().add_element(draft);
        let record = DataRecord::new().with_name("Asha Rao");

        let plan = render_template(&template, Some(&record));
        match &plan.items[0].drawable {
            Drawable::Text { text, .. } => assert_eq!(text, "ASHA RAO"),
            other => panic!("unexpected drawable {other:?}"),
        }
    }

    #[test]
    fn test_hidden_elements_are_skipped_and_order_follows_z() {
        let (t, top) = Template::default().add_element(presets::line());
        let (t, hidden) = t.add_element(presets::qr_code());
        let (t, bottom) = t.add_element(presets::photo().with_z_index(0));
        let t = t.update_element(hidden, &ElementPatch::new().visible(false));

        let plan = render_template(&t, None);
        let ids: Vec<_> = plan.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![bottom, top]);
    }

    #[test]
    fn test_qr_encodes_substituted_content() {
        let (t, _) = Template::default().add_element(presets::qr_code());
        let plan = render_template(&t, None);
        match &plan.items[0].drawable {
            Drawable::QrCode { data, matrix, .. } => {
                assert_eq!(data, "REG001");
                assert!(matrix.size >= 21);
            }
            other => panic!("unexpected drawable {other:?}"),
        }
    }

    #[test]
    fn test_unencodable_barcode_is_reported() {
        let draft = presets::barcode(Symbology::Ean13).with_content("{{name}}");
        let (t, _) = Template::default().add_element(draft);
        let plan = render_template(&t, None);
        assert!(matches!(plan.items[0].drawable, Drawable::Invalid { .. }));
    }

    #[test]
    fn test_photo_fallback_icon() {
        let (t, _) = Template::default().add_element(presets::photo());
        let plan = render_template(&t, None);
        assert!(matches!(
            plan.items[0].drawable,
            Drawable::Photo {
                show_fallback_icon: true,
                ..
            }
        ));

        let element = t.elements[0].clone();
        let with_photo = ElementKind::Photo(PhotoStyle {
            source: Some("memory://p.png".into()),
            ..PhotoStyle::default()
        });
        let t = t.update_element(element.id, &ElementPatch::new().kind(with_photo));
        let plan = render_template(&t, None);
        assert!(matches!(
            plan.items[0].drawable,
            Drawable::Photo {
                show_fallback_icon: false,
                ..
            }
        ));
    }

    #[test]
    fn test_opacity_is_fractional() {
        let (t, id) = Template::default().add_element(presets::line());
        let t = t.update_element(id, &ElementPatch::new().opacity(40.0));
        let plan = render_template(&t, None);
        assert!((plan.items[0].opacity - 0.4).abs() < 1e-9);
        assert_eq!(plan.width, 1123);
    }
}
