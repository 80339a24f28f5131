use certkit_core::DataRecord;
use certkit_designer::model::{ElementKind, ElementPatch, Symbology, TextStyle};
use certkit_designer::placeholders::{TextCase, Token};
use certkit_designer::presets;
use certkit_designer::renderer::{render_template, Drawable};
use certkit_designer::template::Template;

#[test]
fn test_plan_substitutes_record_and_case() {
    let style = TextStyle {
        text_case: TextCase::Uppercase,
        ..TextStyle::default()
    };
    let draft = presets::field(Token::Name);
    let draft = certkit_designer::model::ElementDraft {
        kind: ElementKind::Text(style),
        ..draft
    };
    let (template, id) = Template::default().add_element(draft);

    let record = DataRecord::new().with_name("Asha Rao");
    let plan = render_template(&template, Some(&record));
    let item = plan.items.iter().find(|i| i.id == id).unwrap();
    match &item.drawable {
        Drawable::Text { text, .. } => assert_eq!(text, "ASHA RAO"),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_plan_skips_hidden_and_orders_by_z() {
    let (template, low) = Template::default().add_element(presets::line().with_z_index(5));
    let (template, high) = template.add_element(presets::photo().with_z_index(9));
    let (template, hidden) = template.add_element(presets::image());
    let template = template.update_element(hidden, &ElementPatch::new().visible(false));

    let plan = render_template(&template, None);
    let ids: Vec<_> = plan.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![low, high]);
    assert_eq!(plan.width, 1123);
}

#[test]
fn test_unencodable_barcode_is_reported() {
    let draft = presets::barcode(Symbology::Ean13).with_content("not digits");
    let (template, _) = Template::default().add_element(draft);
    let plan = render_template(&template, None);
    assert!(matches!(plan.items[0].drawable, Drawable::Invalid { .. }));
}

#[test]
fn test_qr_uses_sample_when_no_record() {
    let (template, _) = Template::default().add_element(presets::qr_code());
    let plan = render_template(&template, None);
    match &plan.items[0].drawable {
        Drawable::QrCode { data, matrix, .. } => {
            assert_eq!(data, "REG001");
            assert!(matrix.size >= 21);
        }
        other => panic!("expected qr code, got {other:?}"),
    }
}
