use certkit_core::DataRecord;
use certkit_designer::placeholders::{render_text, substitute, tokens_in, TextCase, Token};
use chrono::NaiveDate;

#[test]
fn test_substitute_without_record_uses_samples() {
    assert_eq!(
        substitute("{{name}} — {{registration_number}}", None),
        "John Doe — REG001"
    );
}

#[test]
fn test_substitute_with_record() {
    let record = DataRecord::new()
        .with_name("Asha Rao")
        .with_registration_number("R-42");
    assert_eq!(
        substitute("{{name}} — {{registration_number}}", Some(&record)),
        "Asha Rao — R-42"
    );
}

#[test]
fn test_empty_field_falls_back_to_sample() {
    let record = DataRecord::new().with_name("");
    assert_eq!(substitute("{{name}}", Some(&record)), "John Doe");
}

#[test]
fn test_resolved_values_are_not_rescanned() {
    let record = DataRecord::new().with_name("{{email}}");
    assert_eq!(substitute("Hi {{name}}", Some(&record)), "Hi {{email}}");
}

#[test]
fn test_event_date_range() {
    let record = DataRecord::new().with_event_dates(
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    );
    assert_eq!(substitute("{{event_date}}", Some(&record)), "Mar 3 – 5, 2025");
    assert_eq!(substitute("{{event_date}}", None), "Event Date");
}

#[test]
fn test_case_applies_after_substitution() {
    let record = DataRecord::new().with_name("asha rao");
    assert_eq!(
        render_text("dr. {{name}}", Some(&record), TextCase::Title),
        "Dr. Asha Rao"
    );
    assert_eq!(
        render_text("{{name}}", Some(&record), TextCase::Uppercase),
        "ASHA RAO"
    );
}

#[test]
fn test_tokens_in_content() {
    assert_eq!(
        tokens_in("{{name}} {{unknown}} {{ event_name }}"),
        vec![Token::Name, Token::EventName]
    );
}
